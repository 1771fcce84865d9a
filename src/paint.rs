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

//! The 2D drawing surface a ruler is painted onto.

use crate::error::Error;
use crate::font::Font;
use crate::ruler::options::{Direction, TextAlign};
use crate::utils::colors::Color;
use crate::utils::points::{Point, Rect};

mod cairo_context;
pub mod recording;

pub use recording::{Primitive, Recorder};

/// Vertical placement of text relative to the point it's drawn at, as in HTML
/// canvas.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    Top,
    Middle,
    #[default]
    Alphabetic,
    Bottom,
}

impl From<Direction> for TextBaseline {
    fn from(val: Direction) -> Self {
        match val {
            Direction::Start => Self::Top,
            Direction::Center => Self::Middle,
            Direction::End => Self::Bottom,
        }
    }
}

/// A stateful 2D context with a save/restore stack and a current
/// transformation, modelled on cairo and HTML canvas.
///
/// `fill_rect` and `clear_rect` don't touch the current path; `stroke`
/// consumes it.
pub trait Painter {
    fn save(&mut self) -> Result<(), Error>;
    fn restore(&mut self) -> Result<(), Error>;

    fn scale(&mut self, sx: f64, sy: f64);
    fn translate(&mut self, tx: f64, ty: f64);
    fn rotate(&mut self, angle: f64);

    fn clear_rect(&mut self, rect: Rect) -> Result<(), Error>;
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), Error>;

    fn begin_path(&mut self);
    fn move_to(&mut self, p: Point);
    fn line_to(&mut self, p: Point);
    fn stroke(&mut self, color: Color, line_width: f64) -> Result<(), Error>;

    fn set_font(&mut self, font: &Font);
    /// Advance width of `text` in user space with the current font.
    fn measure_text(&mut self, text: &str) -> Result<f64, Error>;
    fn fill_text(
        &mut self,
        text: &str,
        at: Point,
        align: TextAlign,
        baseline: TextBaseline,
        color: Color,
    ) -> Result<(), Error>;
}
