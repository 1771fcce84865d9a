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

use super::layout::{Layout, Viewport};
use super::options::{Orientation, RulerOptions};
use crate::error::Error;
use crate::paint::{Painter, TextBaseline};
use crate::utils::points::{Point, Rect};
use std::f64::consts::FRAC_PI_2;

/// Horizontal shift applied before drawing so 1px lines fall on pixel
/// centers.
pub const PIXEL_SNAP: f64 = 0.5;

/// Paint a full ruler onto `painter`, whose device space is `scale` times
/// larger than the viewport.
pub fn render<P: Painter + ?Sized>(
    painter: &mut P,
    options: &RulerOptions,
    viewport: Viewport,
    scale: f64,
) -> Result<(), Error> {
    let layout = Layout::new(options, viewport);
    let device = Rect::new(0.0, 0.0, viewport.width * scale, viewport.height * scale);
    if options.background_color.is_transparent() {
        painter.clear_rect(device)?;
    } else {
        painter.fill_rect(device, options.background_color)?;
    }

    let (ticks, labels) = with_saved(painter, |painter| {
        painter.scale(scale, scale);
        painter.set_font(&options.font);
        painter.translate(PIXEL_SNAP, 0.0);
        paint_layout(painter, options, &layout)
    })?;
    log::trace!(
        "rendered {ticks} ticks and {labels} labels at scroll position {}",
        viewport.scroll_pos
    );
    Ok(())
}

/// Run `f` between `save` and `restore`. Hosts reuse their context between
/// draws, so the state is restored even when `f` fails.
fn with_saved<P, R, F>(painter: &mut P, f: F) -> Result<R, Error>
where
    P: Painter + ?Sized,
    F: FnOnce(&mut P) -> Result<R, Error>,
{
    painter.save()?;
    let ret = f(painter);
    let restored = painter.restore();
    let ret = ret?;
    restored?;
    Ok(ret)
}

/// Range band, ticks and labels in logical coordinates. Returns how many
/// ticks and labels were painted.
fn paint_layout<P: Painter + ?Sized>(
    painter: &mut P,
    options: &RulerOptions,
    layout: &Layout,
) -> Result<(usize, usize), Error> {
    if !options.range_background_color.is_transparent() {
        if let Some(rect) = layout.range_highlight() {
            painter.fill_rect(rect, options.range_background_color)?;
        }
    }

    painter.begin_path();
    let ticks = layout.ticks();
    for tick in &ticks {
        painter.move_to(tick.from);
        painter.line_to(tick.to);
    }
    painter.stroke(options.line_color, 1.0)?;

    let labels = layout.labels();
    let baseline = TextBaseline::from(options.direction);
    for label in &labels {
        let width = painter.measure_text(&label.text)?;
        let offset = options.text_align.offset(width);
        let bg = Rect::new(offset, 0.0, width, layout.main_line_size());

        match options.orientation {
            Orientation::Horizontal => {
                if !options.text_background_color.is_transparent() {
                    painter.fill_rect(
                        Rect {
                            x: label.anchor.x + offset,
                            ..bg
                        },
                        options.text_background_color,
                    )?;
                }
                painter.fill_text(
                    &label.text,
                    label.anchor,
                    options.text_align,
                    baseline,
                    options.text_color,
                )?;
            }
            Orientation::Vertical => {
                if !options.text_background_color.is_transparent() {
                    with_saved(painter, |painter| {
                        painter.translate(0.0, label.anchor.y);
                        painter.rotate(-FRAC_PI_2);
                        painter.fill_rect(bg, options.text_background_color)
                    })?;
                }
                with_saved(painter, |painter| {
                    painter.translate(label.anchor.x, label.anchor.y);
                    painter.rotate(-FRAC_PI_2);
                    painter.fill_text(
                        &label.text,
                        Point::default(),
                        options.text_align,
                        baseline,
                        options.text_color,
                    )
                })?;
            }
        }
    }

    Ok((ticks.len(), labels.len()))
}
