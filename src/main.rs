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

#![deny(clippy::dbg_macro)]

use gio::prelude::*;
use glib::{OptionArg, OptionFlags};
use ruler::config::{self, EnumValue};
use ruler::error::Error;
use ruler::ruler::{Orientation, RulerOptions};
use ruler::APPLICATION_NAME;
use std::path::PathBuf;

static GLIB_LOGGER: glib::GlibLogger = glib::GlibLogger::new(
    glib::GlibLoggerFormat::Plain,
    glib::GlibLoggerDomain::CrateTarget,
);

const DEFAULT_LENGTH: f64 = 800.0;
const DEFAULT_BREADTH: f64 = 30.0;

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    output: Option<PathBuf>,
    scroll: Option<f64>,
    width: Option<f64>,
    height: Option<f64>,
    zoom: Option<f64>,
    orientation: Option<String>,
}

impl Args {
    fn from_dict(dict: &glib::VariantDict) -> Self {
        let path = |name: &str| {
            dict.lookup_value(name, None)
                .and_then(|var| var.get::<Vec<u8>>())
                .and_then(|mut bytes| {
                    while bytes.ends_with(b"\0") {
                        bytes.pop();
                    }
                    String::from_utf8(bytes).ok()
                })
                .map(PathBuf::from)
        };
        let double = |name: &str| {
            dict.lookup_value(name, Some(glib::VariantTy::DOUBLE))
                .and_then(|var| var.get::<f64>())
        };
        Self {
            config: path("config"),
            output: path("output"),
            scroll: double("scroll"),
            width: double("width"),
            height: double("height"),
            zoom: double("zoom"),
            orientation: dict
                .lookup_value("type", Some(glib::VariantTy::STRING))
                .and_then(|var| var.get::<String>()),
        }
    }

    /// Command line values win over the configuration file. The size goes
    /// into the options so it also beats a `width`/`height` set there.
    fn apply(&self, options: &mut RulerOptions) -> Result<(), Error> {
        if let Some(ref s) = self.orientation {
            options.orientation = Orientation::parse_kebab(s)?;
        }
        if let Some(zoom) = self.zoom {
            options.zoom = zoom;
        }
        if let Some(width) = self.width {
            options.width = width;
        }
        if let Some(height) = self.height {
            options.height = height;
        }
        if let Some(scroll) = self.scroll {
            options.scroll_pos = scroll;
        }
        Ok(())
    }
}

/// Host size used when neither the command line nor the configuration set
/// one.
fn default_size(orientation: Orientation) -> (f64, f64) {
    match orientation {
        Orientation::Horizontal => (DEFAULT_LENGTH, DEFAULT_BREADTH),
        Orientation::Vertical => (DEFAULT_BREADTH, DEFAULT_LENGTH),
    }
}

fn run(args: Args) -> Result<(), Error> {
    let mut options = match args.config {
        Some(ref path) => config::load(path)?,
        None => config::load_default()?,
    };
    args.apply(&mut options)?;
    let size = default_size(options.orientation);
    let scroll_pos = options.scroll_pos;
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("{}.png", APPLICATION_NAME)));
    ruler::export::export(options, size, scroll_pos, &output)?;
    log::info!("wrote {}", output.display());
    Ok(())
}

fn main() {
    if log::set_logger(&GLIB_LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Debug);
    }

    let app = gio::Application::new(
        Some("is.pitsidianak.ruler"),
        gio::ApplicationFlags::NON_UNIQUE,
    );
    app.add_main_option(
        "config",
        glib::Char('c' as i8),
        OptionFlags::IN_MAIN,
        OptionArg::Filename,
        "configuration file to load",
        Some("A .toml or .json file with ruler properties"),
    );
    app.add_main_option(
        "output",
        glib::Char('o' as i8),
        OptionFlags::IN_MAIN,
        OptionArg::Filename,
        "file to write, .png or .svg",
        Some("FILE"),
    );
    app.add_main_option(
        "scroll",
        glib::Char('s' as i8),
        OptionFlags::IN_MAIN,
        OptionArg::Double,
        "value at the start of the ruler",
        Some("POS"),
    );
    app.add_main_option(
        "width",
        glib::Char('W' as i8),
        OptionFlags::IN_MAIN,
        OptionArg::Double,
        "logical width in pixels",
        Some("PX"),
    );
    app.add_main_option(
        "height",
        glib::Char('H' as i8),
        OptionFlags::IN_MAIN,
        OptionArg::Double,
        "logical height in pixels",
        Some("PX"),
    );
    app.add_main_option(
        "zoom",
        glib::Char('z' as i8),
        OptionFlags::IN_MAIN,
        OptionArg::Double,
        "pixels per value unit",
        Some("Z"),
    );
    app.add_main_option(
        "type",
        glib::Char('t' as i8),
        OptionFlags::IN_MAIN,
        OptionArg::String,
        "ruler orientation",
        Some("horizontal|vertical"),
    );
    app.add_main_option(
        "defaults",
        glib::Char(0),
        OptionFlags::IN_MAIN,
        OptionArg::None,
        "print the default configuration as JSON",
        None,
    );
    app.add_main_option(
        "version",
        glib::Char('v' as i8),
        OptionFlags::IN_MAIN,
        OptionArg::None,
        "show version",
        None,
    );

    app.connect_handle_local_options(|_self, dict| {
        if dict
            .lookup_value("version", Some(glib::VariantTy::BOOLEAN))
            .is_some()
        {
            println!("{}", ruler::VERSION_INFO);
            return 0;
        }
        if dict
            .lookup_value("defaults", Some(glib::VariantTy::BOOLEAN))
            .is_some()
        {
            return match serde_json::to_string_pretty(&ruler::ruler::descriptor::defaults()) {
                Ok(json) => {
                    println!("{json}");
                    0
                }
                Err(err) => {
                    eprintln!("{}", Error::suggest_bug_report(&err.to_string()));
                    1
                }
            };
        }

        match run(Args::from_dict(dict)) {
            Ok(()) => 0,
            Err(err) if err.is_internal() => {
                eprintln!("{}", Error::suggest_bug_report(&err.to_string()));
                1
            }
            Err(err) => {
                eprintln!("{err}");
                1
            }
        }
    });

    std::process::exit(app.run());
}
