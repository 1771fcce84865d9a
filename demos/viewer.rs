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

//! A canvas with a ruler along each edge that follows its scrollbars.
//!
//! Run with `cargo run --example viewer --features gtk`.

use gtk::glib;
use gtk::prelude::*;
use ruler::prelude::{Orientation, RulerOptions, RulerWidget, ValueRange};

const CANVAS_SIZE: i32 = 2000;

fn build_ui(app: &gtk::Application) {
    let options = match ruler::config::load_default() {
        Ok(options) => options,
        Err(err) => {
            log::warn!("ignoring configuration: {err}");
            RulerOptions::default()
        }
    };
    let horizontal = RulerWidget::new(RulerOptions {
        orientation: Orientation::Horizontal,
        range: ValueRange::new(0.0, CANVAS_SIZE as f64),
        ..options.clone()
    });
    let vertical = RulerWidget::new(RulerOptions {
        orientation: Orientation::Vertical,
        range: ValueRange::new(0.0, CANVAS_SIZE as f64),
        ..options
    });

    let canvas = gtk::DrawingArea::builder()
        .width_request(CANVAS_SIZE)
        .height_request(CANVAS_SIZE)
        .build();
    canvas.connect_draw(|_, cr| {
        cr.set_source_rgb(0.95, 0.95, 0.95);
        let _ = cr.paint();
        gtk::Inhibit(false)
    });
    let hadjustment = gtk::Adjustment::new(0.0, 0.0, 0.0, 1.0, 10.0, 0.0);
    let vadjustment = gtk::Adjustment::new(0.0, 0.0, 0.0, 1.0, 10.0, 0.0);
    hadjustment.connect_value_changed(glib::clone!(@strong horizontal => move |adj| {
        horizontal.scroll(adj.value());
    }));
    vadjustment.connect_value_changed(glib::clone!(@strong vertical => move |adj| {
        vertical.scroll(adj.value());
    }));
    let scrolled = gtk::ScrolledWindow::builder()
        .hadjustment(&hadjustment)
        .vadjustment(&vadjustment)
        .hexpand(true)
        .vexpand(true)
        .child(&canvas)
        .build();

    let corner = gtk::DrawingArea::builder()
        .width_request(RulerWidget::BREADTH)
        .height_request(RulerWidget::BREADTH)
        .build();
    let grid = gtk::Grid::new();
    grid.attach(&corner, 0, 0, 1, 1);
    grid.attach(horizontal.area(), 1, 0, 1, 1);
    grid.attach(vertical.area(), 0, 1, 1, 1);
    grid.attach(&scrolled, 1, 1, 1, 1);

    let window = gtk::ApplicationWindow::builder()
        .application(app)
        .title("ruler")
        .default_width(800)
        .default_height(600)
        .child(&grid)
        .build();
    window.show_all();
}

fn main() {
    let app = gtk::Application::new(
        Some("is.pitsidianak.ruler.viewer"),
        gtk::gio::ApplicationFlags::default(),
    );
    app.connect_activate(build_ui);
    app.run();
}
