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

//! Inherent `cairo::Context` methods share names with [`Painter`]'s, so
//! they're always called through the type path here.

use super::{Painter, TextBaseline};
use crate::error::Error;
use crate::font::Font;
use crate::ruler::options::TextAlign;
use crate::utils::colors::{Color, ColorExt};
use crate::utils::points::{Point, Rect};
use cairo::{Context, Operator};

impl Painter for Context {
    fn save(&mut self) -> Result<(), Error> {
        Ok(Context::save(self)?)
    }

    fn restore(&mut self) -> Result<(), Error> {
        Ok(Context::restore(self)?)
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        Context::scale(self, sx, sy);
    }

    fn translate(&mut self, tx: f64, ty: f64) {
        Context::translate(self, tx, ty);
    }

    fn rotate(&mut self, angle: f64) {
        Context::rotate(self, angle);
    }

    fn clear_rect(&mut self, rect: Rect) -> Result<(), Error> {
        let path = self.copy_path()?;
        Context::save(self)?;
        self.new_path();
        self.set_operator(Operator::Clear);
        self.rectangle(rect.x, rect.y, rect.width, rect.height);
        self.fill()?;
        Context::restore(self)?;
        self.append_path(&path);
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), Error> {
        let path = self.copy_path()?;
        Context::save(self)?;
        self.new_path();
        self.set_source_color_alpha(color);
        self.rectangle(rect.x, rect.y, rect.width, rect.height);
        self.fill()?;
        Context::restore(self)?;
        self.append_path(&path);
        Ok(())
    }

    fn begin_path(&mut self) {
        self.new_path();
    }

    fn move_to(&mut self, p: Point) {
        Context::move_to(self, p.x, p.y);
    }

    fn line_to(&mut self, p: Point) {
        Context::line_to(self, p.x, p.y);
    }

    fn stroke(&mut self, color: Color, line_width: f64) -> Result<(), Error> {
        Context::save(self)?;
        self.set_source_color_alpha(color);
        self.set_line_width(line_width);
        Context::stroke(self)?;
        Context::restore(self)?;
        Ok(())
    }

    fn set_font(&mut self, font: &Font) {
        let (slant, weight) = font.to_cairo();
        self.select_font_face(font.family(), slant, weight);
        self.set_font_size(font.size);
    }

    fn measure_text(&mut self, text: &str) -> Result<f64, Error> {
        Ok(self.text_extents(text)?.x_advance)
    }

    fn fill_text(
        &mut self,
        text: &str,
        at: Point,
        align: TextAlign,
        baseline: TextBaseline,
        color: Color,
    ) -> Result<(), Error> {
        let width = self.text_extents(text)?.x_advance;
        let font_extents = self.font_extents()?;
        let dy = match baseline {
            TextBaseline::Top => font_extents.ascent,
            TextBaseline::Middle => (font_extents.ascent - font_extents.descent) / 2.0,
            TextBaseline::Alphabetic => 0.0,
            TextBaseline::Bottom => -font_extents.descent,
        };
        Context::save(self)?;
        self.new_path();
        self.set_source_color_alpha(color);
        Context::move_to(self, at.x + align.offset(width), at.y + dy);
        self.show_text(text)?;
        Context::restore(self)?;
        Ok(())
    }
}
