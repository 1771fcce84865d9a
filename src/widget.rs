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

//! A ruler inside a `gtk::DrawingArea`.
//!
//! The ruler draws into a backing image twice the allocated size, which is
//! then scaled down onto the widget in the draw handler.

use crate::host::ImageHost;
use crate::ruler::{Orientation, Ruler, RulerOptions, BACKING_SCALE};
use gtk::glib;
use gtk::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone)]
pub struct RulerWidget {
    area: gtk::DrawingArea,
    ruler: Rc<RefCell<Ruler<ImageHost>>>,
}

impl RulerWidget {
    /// Requested thickness of the ruler, in pixels.
    pub const BREADTH: i32 = 30;

    pub fn new(options: RulerOptions) -> Self {
        let area = gtk::DrawingArea::builder().visible(true).build();
        match options.orientation {
            Orientation::Horizontal => {
                area.set_size_request(-1, Self::BREADTH);
                area.set_hexpand(true);
            }
            Orientation::Vertical => {
                area.set_size_request(Self::BREADTH, -1);
                area.set_vexpand(true);
            }
        }
        let ret = Self {
            area,
            ruler: Rc::new(RefCell::new(Ruler::new(options, ImageHost::new(0.0, 0.0)))),
        };
        let ruler = ret.ruler.clone();
        ret.area.connect_size_allocate(glib::clone!(@weak ruler => move |area, _| {
            let (width, height) = (area.allocated_width() as f64, area.allocated_height() as f64);
            let mut ruler = ruler.borrow_mut();
            ruler.host_mut().set_offset_size(width, height);
            ruler.resize();
        }));
        ret.area.connect_draw(glib::clone!(@weak ruler => @default-return gtk::Inhibit(false), move |_, cr| {
            let ruler = ruler.borrow();
            if let Some(surface) = ruler.host().surface() {
                if let Err(err) = blit(cr, surface) {
                    log::warn!("could not paint ruler: {err}");
                }
            }
            gtk::Inhibit(false)
        }));
        ret
    }

    pub fn area(&self) -> &gtk::DrawingArea {
        &self.area
    }

    /// Resize the ruler as if the widget had been allocated `width` ×
    /// `height`.
    pub fn allocate(&self, width: f64, height: f64) {
        {
            let mut ruler = self.ruler.borrow_mut();
            ruler.host_mut().set_offset_size(width, height);
            ruler.resize();
        }
        self.area.queue_draw();
    }

    pub fn scroll(&self, scroll_pos: f64) {
        self.ruler.borrow_mut().scroll(scroll_pos);
        self.area.queue_draw();
    }

    pub fn resize(&self) {
        self.ruler.borrow_mut().resize();
        self.area.queue_draw();
    }

    pub fn scroll_pos(&self) -> f64 {
        self.ruler.borrow().scroll_pos()
    }

    pub fn set_options(&self, options: RulerOptions) {
        self.ruler.borrow_mut().set_options(options);
        self.area.queue_draw();
    }

    pub fn with_ruler<R, F: FnOnce(&Ruler<ImageHost>) -> R>(&self, f: F) -> R {
        f(&self.ruler.borrow())
    }
}

fn blit(cr: &cairo::Context, surface: &cairo::ImageSurface) -> Result<(), cairo::Error> {
    cr.save()?;
    cr.scale(1.0 / BACKING_SCALE, 1.0 / BACKING_SCALE);
    cr.set_source_surface(surface, 0.0, 0.0)?;
    cr.paint()?;
    cr.restore()
}
