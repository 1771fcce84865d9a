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

//! The ruler widget: configuration plus the last scroll position, drawn
//! into whatever [`Host`] it's given.

use crate::host::Host;

pub mod descriptor;
pub mod layout;
pub mod options;
pub mod render;

pub use layout::{Label, Layout, Tick, TickTier, Viewport};
pub use options::{
    Direction, LineSize, Orientation, RulerOptions, TextAlign, TextFormat, ValueRange,
};

/// Ratio of backing surface pixels to logical pixels.
pub const BACKING_SCALE: f64 = 2.0;

pub struct Ruler<H: Host> {
    options: RulerOptions,
    host: H,
    width: f64,
    height: f64,
    scroll_pos: f64,
}

impl<H: Host> Ruler<H> {
    pub fn new(options: RulerOptions, host: H) -> Self {
        let scroll_pos = options.scroll_pos;
        Self {
            options,
            host,
            width: 0.0,
            height: 0.0,
            scroll_pos,
        }
    }

    pub fn options(&self) -> &RulerOptions {
        &self.options
    }

    /// Replace the configuration and redraw.
    pub fn set_options(&mut self, options: RulerOptions) {
        self.options = options;
        self.resize();
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    /// Logical size as of the last [`resize`](Self::resize).
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn scroll_pos(&self) -> f64 {
        self.scroll_pos
    }

    /// Pick up the host's size (unless the options override it), reallocate
    /// the backing surface and redraw at the current scroll position.
    pub fn resize(&mut self) {
        let (offset_width, offset_height) = self.host.offset_size();
        self.width = if self.options.width > 0.0 {
            self.options.width
        } else {
            offset_width
        };
        self.height = if self.options.height > 0.0 {
            self.options.height
        } else {
            offset_height
        };
        let (width, height) = (
            (self.width * BACKING_SCALE) as i32,
            (self.height * BACKING_SCALE) as i32,
        );
        log::debug!(
            "resizing ruler to {}x{} ({width}x{height} backing pixels)",
            self.width,
            self.height
        );
        if let Err(err) = self.host.resize_backing(width, height) {
            log::warn!("could not resize ruler surface to {width}x{height}: {err}");
        }
        self.draw(self.scroll_pos);
    }

    pub fn scroll(&mut self, scroll_pos: f64) {
        self.draw(scroll_pos);
    }

    pub fn draw(&mut self, scroll_pos: f64) {
        self.scroll_pos = scroll_pos;
        if self.width <= 0.0 || self.height <= 0.0 {
            return;
        }
        let Some(painter) = self.host.painter() else {
            return;
        };
        let viewport = Viewport::new(self.width, self.height, scroll_pos);
        if let Err(err) = render::render(painter, &self.options, viewport, BACKING_SCALE) {
            log::warn!("could not draw ruler at {scroll_pos}: {err}");
        }
    }
}
