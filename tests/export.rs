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

use ::ruler::export::{export, Format};
use ::ruler::prelude::*;
use std::path::{Path, PathBuf};

const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("ruler-test-{}-{name}", std::process::id()))
}

fn png_size(png: &[u8]) -> (u32, u32) {
    let be = |b: &[u8]| u32::from_be_bytes([b[0], b[1], b[2], b[3]]);
    (be(&png[16..20]), be(&png[20..24]))
}

#[test]
fn test_image_redraw_is_identical() {
    let options = RulerOptions {
        range: [25.0, 175.0].into(),
        range_background_color: "rgba(255, 0, 0, 0.5)".parse().unwrap(),
        ..RulerOptions::default()
    };
    let mut ruler = Ruler::new(options, ImageHost::new(300.0, 30.0));
    ruler.scroll(10.0);
    ruler.resize();
    let first = ruler.host().to_png().unwrap();
    ruler.scroll(10.0);
    let second = ruler.host().to_png().unwrap();
    assert!(first.starts_with(PNG_MAGIC));
    assert_eq!(png_size(&first), (600, 60));
    assert_eq!(first, second);
}

#[test]
fn test_empty_image() {
    let mut ruler = Ruler::new(RulerOptions::default(), ImageHost::new(0.0, 30.0));
    ruler.resize();
    assert!(ruler.host().surface().is_none());
    assert!(matches!(ruler.host().to_png(), Err(Error::EmptySurface)));
}

#[test]
fn test_format_from_path() {
    assert_eq!(Format::from_path(Path::new("a.png")).unwrap(), Format::Png);
    assert_eq!(Format::from_path(Path::new("dir/A.SVG")).unwrap(), Format::Svg);
    assert!(matches!(
        Format::from_path(Path::new("ruler.jpg")),
        Err(Error::UnsupportedFormat(_))
    ));
    assert!(Format::from_path(Path::new("ruler")).is_err());
}

#[test]
fn test_export_png() {
    let path = temp_path("export.png");
    export(RulerOptions::default(), (250.0, 30.0), -40.0, &path).unwrap();
    let png = std::fs::read(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert!(png.starts_with(PNG_MAGIC));
    assert_eq!(png_size(&png), (500, 60));

    let path = temp_path("export-vertical.png");
    let options = RulerOptions {
        orientation: Orientation::Vertical,
        width: 40.0,
        ..RulerOptions::default()
    };
    export(options, (30.0, 120.0), 0.0, &path).unwrap();
    let png = std::fs::read(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(png_size(&png), (80, 240));
}

#[test]
fn test_export_svg() {
    let path = temp_path("export.svg");
    export(RulerOptions::default(), (250.0, 30.0), 0.0, &path).unwrap();
    let svg = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));

    let path = temp_path("empty.svg");
    assert!(matches!(
        export(RulerOptions::default(), (0.0, 0.0), 0.0, &path),
        Err(Error::EmptySurface)
    ));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_export_errors() {
    assert!(matches!(
        export(RulerOptions::default(), (100.0, 30.0), 0.0, temp_path("out.bmp")),
        Err(Error::UnsupportedFormat(_))
    ));
    let path = temp_path("missing-dir").join("out.png");
    let err = export(RulerOptions::default(), (100.0, 30.0), 0.0, &path).unwrap_err();
    assert!(matches!(err, Error::Io { .. }), "{err:?}");
    assert!(!err.is_internal());
}
