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

//! Measurement rulers for pannable and zoomable views.
//!
//! A [`Ruler`](ruler::Ruler) paints tick marks, numeric labels and an
//! optional highlighted range for the part of a value axis currently in
//! view. It draws through the [`Painter`](paint::Painter) trait into a
//! [`Host`](host::Host), which owns the backing surface: a cairo image, an
//! SVG document, a recording for inspection or, with the `gtk` feature, a
//! `gtk::DrawingArea`.

pub mod config;
pub mod error;
pub mod export;
pub mod font;
pub mod host;
pub mod paint;
pub mod ruler;
pub mod utils;
#[cfg(feature = "gtk")]
pub mod widget;

pub const APPLICATION_NAME: &str = "ruler";
pub const ISSUE_TRACKER: &str = "https://github.com/epilys/ruler/issues";
pub const VERSION_INFO: &str = env!("CARGO_PKG_VERSION");
#[cfg(feature = "gtk")]
pub const BUILD_INFO: &str = concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"), " +gtk");
#[cfg(not(feature = "gtk"))]
pub const BUILD_INFO: &str = concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"));

pub mod prelude {
    pub use super::*;
    pub use error::Error;
    pub use font::Font;
    pub use host::{Host, ImageHost, RecordingHost, SvgHost};
    pub use paint::{Painter, Primitive, Recorder, TextBaseline};
    pub use super::ruler::{
        Direction, LineSize, Orientation, Ruler, RulerOptions, TextAlign, TextFormat, TickTier,
        ValueRange, Viewport, BACKING_SCALE,
    };
    pub use utils::colors::*;
    pub use utils::points::*;
    #[cfg(feature = "gtk")]
    pub use widget::RulerWidget;
}
