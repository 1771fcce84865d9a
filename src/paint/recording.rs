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

//! A [`Painter`] that keeps a list of what was drawn, in device space.

use super::{Painter, TextBaseline};
use crate::error::Error;
use crate::font::Font;
use crate::ruler::options::TextAlign;
use crate::utils::colors::Color;
use crate::utils::points::{Point, Rect};
use cairo::Matrix;
use smallvec::SmallVec;

/// Ratio of a glyph's advance to the font size used when measuring text.
pub const DEFAULT_ADVANCE_RATIO: f64 = 0.6;

#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Clear {
        rect: Rect,
    },
    FillRect {
        rect: Rect,
        color: Color,
    },
    /// One stroke call with every line segment of its path.
    Stroke {
        segments: Vec<(Point, Point)>,
        color: Color,
        line_width: f64,
    },
    Text {
        text: String,
        /// Device position of the point the text was drawn at.
        anchor: Point,
        /// Device bounding box of the text's em box.
        bounds: Rect,
        /// Rotation of the text's baseline, in radians.
        rotation: f64,
        color: Color,
        font: Font,
    },
}

#[derive(Clone, Debug)]
struct State {
    matrix: Matrix,
    font: Font,
}

#[derive(Debug)]
pub struct Recorder {
    state: State,
    stack: SmallVec<[State; 4]>,
    path: Vec<(Point, Point)>,
    pen: Option<Point>,
    advance_ratio: f64,
    primitives: Vec<Primitive>,
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}

impl Recorder {
    pub fn new() -> Self {
        Self::with_advance_ratio(DEFAULT_ADVANCE_RATIO)
    }

    /// Measure every character as `ratio` times the font size.
    pub fn with_advance_ratio(ratio: f64) -> Self {
        Self {
            state: State {
                matrix: Matrix::identity(),
                font: Font::default(),
            },
            stack: SmallVec::new(),
            path: vec![],
            pen: None,
            advance_ratio: ratio,
            primitives: vec![],
        }
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn take_primitives(&mut self) -> Vec<Primitive> {
        std::mem::take(&mut self.primitives)
    }

    /// Depth of the save stack, zero once every `save` has been restored.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn matrix(&self) -> Matrix {
        self.state.matrix
    }

    fn text_width(&self, text: &str) -> f64 {
        text.chars().count() as f64 * self.state.font.size * self.advance_ratio
    }
}

impl Painter for Recorder {
    fn save(&mut self) -> Result<(), Error> {
        self.stack.push(self.state.clone());
        Ok(())
    }

    fn restore(&mut self) -> Result<(), Error> {
        // Unbalanced restores are ignored, like cairo and canvas do.
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
        Ok(())
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.state.matrix.scale(sx, sy);
    }

    fn translate(&mut self, tx: f64, ty: f64) {
        self.state.matrix.translate(tx, ty);
    }

    fn rotate(&mut self, angle: f64) {
        self.state.matrix.rotate(angle);
    }

    fn clear_rect(&mut self, rect: Rect) -> Result<(), Error> {
        let rect = rect.transform(self.state.matrix);
        self.primitives.push(Primitive::Clear { rect });
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), Error> {
        let rect = rect.transform(self.state.matrix);
        self.primitives.push(Primitive::FillRect { rect, color });
        Ok(())
    }

    fn begin_path(&mut self) {
        self.path.clear();
        self.pen = None;
    }

    fn move_to(&mut self, p: Point) {
        self.pen = Some(self.state.matrix * p);
    }

    fn line_to(&mut self, p: Point) {
        let p = self.state.matrix * p;
        if let Some(from) = self.pen {
            self.path.push((from, p));
        }
        self.pen = Some(p);
    }

    fn stroke(&mut self, color: Color, line_width: f64) -> Result<(), Error> {
        let segments = std::mem::take(&mut self.path);
        self.pen = None;
        self.primitives.push(Primitive::Stroke {
            segments,
            color,
            line_width,
        });
        Ok(())
    }

    fn set_font(&mut self, font: &Font) {
        self.state.font = font.clone();
    }

    fn measure_text(&mut self, text: &str) -> Result<f64, Error> {
        Ok(self.text_width(text))
    }

    fn fill_text(
        &mut self,
        text: &str,
        at: Point,
        align: TextAlign,
        baseline: TextBaseline,
        color: Color,
    ) -> Result<(), Error> {
        let width = self.text_width(text);
        let size = self.state.font.size;
        let top = match baseline {
            TextBaseline::Top => at.y,
            TextBaseline::Middle => at.y - size / 2.0,
            TextBaseline::Alphabetic => at.y - size * 0.8,
            TextBaseline::Bottom => at.y - size,
        };
        let m = self.state.matrix;
        let bounds = Rect::new(at.x + align.offset(width), top, width, size).transform(m);
        let (dx, dy) = m.transform_distance(1.0, 0.0);
        self.primitives.push(Primitive::Text {
            text: text.to_string(),
            anchor: m * at,
            bounds,
            rotation: dy.atan2(dx),
            color,
            font: self.state.font.clone(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_transforms() {
        let mut r = Recorder::new();
        r.save().unwrap();
        r.scale(2.0, 2.0);
        r.translate(0.5, 0.0);
        r.begin_path();
        r.move_to(Point::new(10.0, 0.0));
        r.line_to(Point::new(10.0, 5.0));
        r.stroke(Color::BLACK, 1.0).unwrap();
        r.restore().unwrap();
        assert_eq!(r.depth(), 0);
        r.fill_rect(Rect::new(0.0, 0.0, 4.0, 4.0), Color::RED).unwrap();

        assert_eq!(
            r.primitives(),
            &[
                Primitive::Stroke {
                    segments: vec![(Point::new(21.0, 0.0), Point::new(21.0, 10.0))],
                    color: Color::BLACK,
                    line_width: 1.0,
                },
                Primitive::FillRect {
                    rect: Rect::new(0.0, 0.0, 4.0, 4.0),
                    color: Color::RED,
                },
            ]
        );
    }

    #[test]
    fn test_recorder_text_bounds() {
        let mut r = Recorder::with_advance_ratio(1.0);
        r.set_font(&Font::new(10.0, "serif"));
        assert_eq!(r.measure_text("abc").unwrap(), 30.0);

        r.fill_text(
            "abc",
            Point::new(100.0, 20.0),
            TextAlign::Center,
            TextBaseline::Bottom,
            Color::WHITE,
        )
        .unwrap();
        r.save().unwrap();
        r.translate(5.0, 200.0);
        r.rotate(-std::f64::consts::FRAC_PI_2);
        r.fill_text(
            "abc",
            Point::new(0.0, 0.0),
            TextAlign::Left,
            TextBaseline::Top,
            Color::WHITE,
        )
        .unwrap();
        r.restore().unwrap();

        let prims = r.take_primitives();
        let Primitive::Text { bounds, rotation, .. } = &prims[0] else {
            panic!("expected text, got {:?}", prims[0]);
        };
        assert_eq!(*bounds, Rect::new(85.0, 10.0, 30.0, 10.0));
        assert_eq!(*rotation, 0.0);
        let Primitive::Text { bounds, rotation, anchor, .. } = &prims[1] else {
            panic!("expected text, got {:?}", prims[1]);
        };
        assert!((anchor.x - 5.0).abs() < 1e-9 && (anchor.y - 200.0).abs() < 1e-9);
        assert!((*rotation + std::f64::consts::FRAC_PI_2).abs() < 1e-9);
        assert!((bounds.height - 30.0).abs() < 1e-9);
        assert!((bounds.width - 10.0).abs() < 1e-9);
        assert!((bounds.y - 170.0).abs() < 1e-9);
        assert!(r.primitives().is_empty());
    }
}
