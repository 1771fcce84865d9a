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

//! Backing surfaces a [`Ruler`](crate::ruler::Ruler) can be drawn into.

use crate::error::Error;
use crate::paint::{Painter, Primitive, Recorder};
use std::path::{Path, PathBuf};

/// The environment a ruler lives in: it knows its own size and owns the
/// backing surface painting goes to.
pub trait Host {
    type Painter: Painter;

    /// Logical size of the element hosting the surface.
    fn offset_size(&self) -> (f64, f64);

    /// Reallocate the backing surface to `width` × `height` device pixels.
    fn resize_backing(&mut self, width: i32, height: i32) -> Result<(), Error>;

    /// `None` while there is no backing surface to paint on.
    fn painter(&mut self) -> Option<&mut Self::Painter>;
}

struct Image {
    surface: cairo::ImageSurface,
    context: cairo::Context,
}

/// In-memory ARGB32 surface.
pub struct ImageHost {
    offset_size: (f64, f64),
    image: Option<Image>,
}

impl ImageHost {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            offset_size: (width, height),
            image: None,
        }
    }

    pub fn set_offset_size(&mut self, width: f64, height: f64) {
        self.offset_size = (width, height);
    }

    pub fn surface(&self) -> Option<&cairo::ImageSurface> {
        self.image.as_ref().map(|i| &i.surface)
    }

    pub fn write_png<W: std::io::Write>(&self, stream: &mut W) -> Result<(), Error> {
        let image = self.image.as_ref().ok_or(Error::EmptySurface)?;
        image.surface.flush();
        image.surface.write_to_png(stream)?;
        Ok(())
    }

    pub fn to_png(&self) -> Result<Vec<u8>, Error> {
        let mut ret = vec![];
        self.write_png(&mut ret)?;
        Ok(ret)
    }
}

impl Host for ImageHost {
    type Painter = cairo::Context;

    fn offset_size(&self) -> (f64, f64) {
        self.offset_size
    }

    fn resize_backing(&mut self, width: i32, height: i32) -> Result<(), Error> {
        if width <= 0 || height <= 0 {
            self.image = None;
            return Ok(());
        }
        if let Some(ref image) = self.image {
            if image.surface.width() == width && image.surface.height() == height {
                return Ok(());
            }
        }
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        let context = cairo::Context::new(&surface)?;
        self.image = Some(Image { surface, context });
        Ok(())
    }

    fn painter(&mut self) -> Option<&mut Self::Painter> {
        self.image.as_mut().map(|i| &mut i.context)
    }
}

struct Svg {
    surface: cairo::SvgSurface,
    context: cairo::Context,
}

/// SVG document written to `path`. The document is complete once
/// [`SvgHost::finish`] is called or the host is dropped.
pub struct SvgHost {
    path: PathBuf,
    offset_size: (f64, f64),
    svg: Option<Svg>,
}

impl SvgHost {
    pub fn new<P: AsRef<Path>>(path: P, width: f64, height: f64) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            offset_size: (width, height),
            svg: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn finish(&mut self) {
        if let Some(svg) = self.svg.take() {
            svg.surface.finish();
        }
    }
}

impl Drop for SvgHost {
    fn drop(&mut self) {
        self.finish();
    }
}

impl Host for SvgHost {
    type Painter = cairo::Context;

    fn offset_size(&self) -> (f64, f64) {
        self.offset_size
    }

    fn resize_backing(&mut self, width: i32, height: i32) -> Result<(), Error> {
        self.finish();
        if width <= 0 || height <= 0 {
            return Ok(());
        }
        let surface = cairo::SvgSurface::new(width as f64, height as f64, Some(&self.path))?;
        let context = cairo::Context::new(&surface)?;
        self.svg = Some(Svg { surface, context });
        Ok(())
    }

    fn painter(&mut self) -> Option<&mut Self::Painter> {
        self.svg.as_mut().map(|s| &mut s.context)
    }
}

/// Host backed by a [`Recorder`], for inspecting what gets drawn.
pub struct RecordingHost {
    offset_size: (f64, f64),
    backing_size: (i32, i32),
    recorder: Recorder,
}

impl RecordingHost {
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_recorder(width, height, Recorder::new())
    }

    pub fn with_recorder(width: f64, height: f64, recorder: Recorder) -> Self {
        Self {
            offset_size: (width, height),
            backing_size: (0, 0),
            recorder,
        }
    }

    pub fn set_offset_size(&mut self, width: f64, height: f64) {
        self.offset_size = (width, height);
    }

    pub fn backing_size(&self) -> (i32, i32) {
        self.backing_size
    }

    pub fn recorder(&self) -> &Recorder {
        &self.recorder
    }

    pub fn primitives(&self) -> &[Primitive] {
        self.recorder.primitives()
    }

    pub fn take_primitives(&mut self) -> Vec<Primitive> {
        self.recorder.take_primitives()
    }
}

impl Host for RecordingHost {
    type Painter = Recorder;

    fn offset_size(&self) -> (f64, f64) {
        self.offset_size
    }

    fn resize_backing(&mut self, width: i32, height: i32) -> Result<(), Error> {
        self.backing_size = (width.max(0), height.max(0));
        Ok(())
    }

    fn painter(&mut self) -> Option<&mut Self::Painter> {
        let (width, height) = self.backing_size;
        if width > 0 && height > 0 {
            Some(&mut self.recorder)
        } else {
            None
        }
    }
}
