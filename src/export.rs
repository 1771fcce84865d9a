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

//! Render a single ruler to an image file without any windowing system.

use crate::error::Error;
use crate::host::{ImageHost, SvgHost};
use crate::ruler::{Ruler, RulerOptions};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Png,
    Svg,
}

impl Format {
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("png") => Ok(Self::Png),
            Some("svg") => Ok(Self::Svg),
            _ => Err(Error::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Draw a `width` × `height` ruler scrolled to `scroll_pos` into `path`.
///
/// The file holds the backing surface, so its pixel size is twice the
/// logical size.
pub fn export<P: AsRef<Path>>(
    options: RulerOptions,
    (width, height): (f64, f64),
    scroll_pos: f64,
    path: P,
) -> Result<(), Error> {
    let path = path.as_ref();
    let format = Format::from_path(path)?;
    log::debug!("exporting {format:?} ruler to {}", path.display());
    // Scrolling before the first resize only records the position, so the
    // ruler is drawn exactly once.
    match format {
        Format::Png => {
            let mut ruler = Ruler::new(options, ImageHost::new(width, height));
            ruler.scroll(scroll_pos);
            ruler.resize();
            let png = ruler.host().to_png()?;
            std::fs::write(path, png).map_err(|source| Error::Io {
                path: path.to_path_buf(),
                source,
            })
        }
        Format::Svg => {
            let mut ruler = Ruler::new(options, SvgHost::new(path, width, height));
            ruler.scroll(scroll_pos);
            ruler.resize();
            let (w, h) = ruler.size();
            if w <= 0.0 || h <= 0.0 {
                return Err(Error::EmptySurface);
            }
            ruler.host_mut().finish();
            Ok(())
        }
    }
}
