/*
 * ruler
 *
 * Copyright 2022 - Manos Pitsidianakis
 *
 * This file is part of ruler.
 *
 * ruler is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * ruler is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with ruler. If not, see <http://www.gnu.org/licenses/>.
 */

//! Geometry of a ruler for one viewport: which ticks and labels are visible
//! and where they go. Nothing here paints.

use super::options::{Direction, Orientation, RulerOptions};
use crate::utils::points::{Point, Rect};
use std::ops::RangeInclusive;

/// Distance of a label's baseline from the ruler edge for the `start` and
/// `end` directions.
pub const LABEL_INSET: f64 = 17.0;
/// Gap between a main tick and its label along the primary axis.
pub const LABEL_PADDING: f64 = 3.0;

/// Logical size of the surface and the value at its origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scroll_pos: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, scroll_pos: f64) -> Self {
        Self {
            width,
            height,
            scroll_pos,
        }
    }

    /// Extent along the ruler's primary axis.
    pub fn size(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        }
    }

    /// Extent across the ruler.
    pub fn thickness(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Horizontal => self.height,
            Orientation::Vertical => self.width,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TickTier {
    Main,
    Long,
    Short,
}

impl TickTier {
    /// Main at the unit boundary, then alternating short and long.
    pub fn for_segment(j: u32) -> Self {
        if j == 0 {
            Self::Main
        } else if j % 2 == 0 {
            Self::Long
        } else {
            Self::Short
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    pub index: i64,
    pub segment: u32,
    pub value: f64,
    /// Position along the primary axis, in logical pixels.
    pub pos: f64,
    pub tier: TickTier,
    pub length: f64,
    pub from: Point,
    pub to: Point,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub index: i64,
    pub value: f64,
    pub pos: f64,
    /// Point the text is drawn at, `text_offset` included.
    pub anchor: Point,
    pub text: String,
}

/// Indexes of the main ticks that can show up in a viewport `size` long.
///
/// `None` when the zoomed unit isn't a positive finite distance.
pub fn visible_indices(
    scroll_pos: f64,
    zoom: f64,
    unit: f64,
    size: f64,
) -> Option<RangeInclusive<i64>> {
    let zoom_unit = zoom * unit;
    if !(zoom_unit.is_finite() && zoom_unit > 0.0) {
        return None;
    }
    let min = (scroll_pos * zoom / zoom_unit).floor();
    let max = ((scroll_pos * zoom + size) / zoom_unit).ceil();
    if !(min.is_finite() && max.is_finite()) {
        return None;
    }
    Some(min as i64..=max as i64)
}

/// Position along the primary axis of `value`.
pub fn value_to_pos(value: f64, scroll_pos: f64, zoom: f64) -> f64 {
    (value - scroll_pos) * zoom
}

pub struct Layout<'a> {
    options: &'a RulerOptions,
    viewport: Viewport,
    size: f64,
    thickness: f64,
    main_line_size: f64,
    long_line_size: f64,
    short_line_size: f64,
}

impl<'a> Layout<'a> {
    pub fn new(options: &'a RulerOptions, viewport: Viewport) -> Self {
        let size = viewport.size(options.orientation);
        let thickness = viewport.thickness(options.orientation);
        Self {
            options,
            viewport,
            size,
            thickness,
            main_line_size: options.main_line_size.resolve(thickness),
            long_line_size: options.long_line_size.resolve(thickness),
            short_line_size: options.short_line_size.resolve(thickness),
        }
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    pub fn main_line_size(&self) -> f64 {
        self.main_line_size
    }

    pub fn line_size(&self, tier: TickTier) -> f64 {
        match tier {
            TickTier::Main => self.main_line_size,
            TickTier::Long => self.long_line_size,
            TickTier::Short => self.short_line_size,
        }
    }

    pub fn zoom_unit(&self) -> f64 {
        self.options.zoom * self.options.unit
    }

    /// Main tick indexes to walk, negative ones dropped unless
    /// `negative_ruler` is set.
    pub fn indices(&self) -> impl Iterator<Item = i64> {
        let negative_ruler = self.options.negative_ruler;
        visible_indices(
            self.viewport.scroll_pos,
            self.options.zoom,
            self.options.unit,
            self.size,
        )
        .into_iter()
        .flatten()
        .filter(move |&i| negative_ruler || i >= 0)
    }

    /// Band behind the `range` values, when both ends are finite.
    pub fn range_highlight(&self) -> Option<Rect> {
        let range = self.options.range;
        if !range.is_bounded() {
            return None;
        }
        let start = value_to_pos(range.start, self.viewport.scroll_pos, self.options.zoom);
        let length = (range.end - range.start) * self.options.zoom;
        Some(match self.options.orientation {
            Orientation::Horizontal => Rect::new(start, 0.0, length, self.thickness),
            Orientation::Vertical => Rect::new(0.0, start, self.thickness, length),
        })
    }

    fn tick_origin(&self, length: f64) -> f64 {
        match self.options.direction {
            Direction::Start => 0.0,
            Direction::Center => self.thickness / 2.0 - length / 2.0,
            Direction::End => self.thickness - length,
        }
    }

    fn label_origin(&self) -> f64 {
        match self.options.direction {
            Direction::Start => LABEL_INSET,
            Direction::Center => self.thickness / 2.0,
            Direction::End => self.thickness - LABEL_INSET,
        }
    }

    pub fn ticks(&self) -> Vec<Tick> {
        // Ticks are shifted by twice `line_offset`.
        let RulerOptions {
            unit,
            zoom,
            range,
            line_offset: [dx, dy],
            orientation,
            ..
        } = *self.options;
        let segment = self.options.segment.max(1);
        let scroll_pos = self.viewport.scroll_pos;

        let mut ret = vec![];
        for index in self.indices() {
            let start_value = index as f64 * unit;
            for j in 0..segment {
                let value = start_value + j as f64 / segment as f64 * unit;
                let pos = value_to_pos(value, scroll_pos, zoom);
                if pos < 0.0 || pos >= self.size || !range.contains(value) {
                    continue;
                }
                let tier = TickTier::for_segment(j);
                let length = self.line_size(tier);
                let origin = self.tick_origin(length);
                let (from, to) = match orientation {
                    Orientation::Horizontal => {
                        let from = Point::new(pos + 2.0 * dx, origin + 2.0 * dy);
                        (from, from + Point::new(0.0, length))
                    }
                    Orientation::Vertical => {
                        let from = Point::new(origin + 2.0 * dx, pos + 2.0 * dy);
                        (from, from + Point::new(length, 0.0))
                    }
                };
                ret.push(Tick {
                    index,
                    segment: j,
                    value,
                    pos,
                    tier,
                    length,
                    from,
                    to,
                });
            }
        }
        ret
    }

    /// One label per main tick. Labels are kept up to a unit beyond either
    /// end of the viewport so they don't pop in at the edges.
    pub fn labels(&self) -> Vec<Label> {
        let RulerOptions {
            unit,
            zoom,
            range,
            text_offset: [dx, dy],
            orientation,
            text_align,
            ..
        } = *self.options;
        let zoom_unit = self.zoom_unit();
        let origin = self.label_origin();
        let padding = text_align.sign() * LABEL_PADDING;

        let mut ret = vec![];
        for index in self.indices() {
            let value = index as f64 * unit;
            let pos = value_to_pos(value, self.viewport.scroll_pos, zoom);
            if pos < -zoom_unit || pos >= self.size + unit * zoom || !range.contains(value) {
                continue;
            }
            let anchor = match orientation {
                Orientation::Horizontal => Point::new(pos - padding + dx, origin + dy),
                Orientation::Vertical => Point::new(origin + dx, pos + padding + dy),
            };
            ret.push(Label {
                index,
                value,
                pos,
                anchor,
                text: self.options.label_text(value),
            });
        }
        ret
    }
}
