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

//! Loading [`RulerOptions`] from TOML and JSON files.
//!
//! Keys are the names in [`PROPERTIES`](crate::ruler::descriptor::PROPERTIES).

use crate::error::Error;
use crate::ruler::options::{Direction, Orientation, RulerOptions, TextAlign};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "ruler.toml";

pub trait EnumValue: Sized {
    const NAME: &'static str;

    fn toml_deserialize<'de>(item: Option<&toml_edit::Item>) -> Option<Self>
    where
        Self: Deserialize<'de>,
    {
        use serde::de::IntoDeserializer;
        item.cloned()?
            .into_value()
            .ok()
            .map(toml_edit::Value::into_deserializer)
            .and_then(|p| <Self as Deserialize>::deserialize(p).ok())
    }

    fn kebab_str_deserialize<'de>(s: &str) -> Option<Self>
    where
        Self: Deserialize<'de>,
    {
        use serde::de::IntoDeserializer;
        <Self as Deserialize>::deserialize(toml_edit::Value::into_deserializer(
            toml_edit::value(s).into_value().ok()?,
        ))
        .ok()
    }

    fn parse_kebab<'de>(s: &str) -> Result<Self, Error>
    where
        Self: Deserialize<'de>,
    {
        Self::kebab_str_deserialize(s).ok_or_else(|| Error::InvalidValue {
            name: Self::NAME,
            value: s.to_string(),
            expected: Self::kebab_case_variants(),
        })
    }

    fn kebab_case_variants() -> &'static [&'static str];
}

impl EnumValue for Orientation {
    const NAME: &'static str = "type";

    fn kebab_case_variants() -> &'static [&'static str] {
        &["horizontal", "vertical"]
    }
}

impl EnumValue for Direction {
    const NAME: &'static str = "direction";

    fn kebab_case_variants() -> &'static [&'static str] {
        &["start", "center", "end"]
    }
}

impl EnumValue for TextAlign {
    const NAME: &'static str = "textAlign";

    fn kebab_case_variants() -> &'static [&'static str] {
        &["left", "center", "right"]
    }
}

pub fn from_toml_str(s: &str) -> Result<RulerOptions, Error> {
    Ok(toml_edit::de::from_str(s)?)
}

pub fn from_json_str(s: &str) -> Result<RulerOptions, Error> {
    Ok(serde_json::from_str(s)?)
}

/// Read a configuration file, as JSON when it has a `.json` extension and as
/// TOML otherwise.
pub fn load<P: AsRef<Path>>(path: P) -> Result<RulerOptions, Error> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("loading ruler configuration from {}", path.display());
    if path.extension().map_or(false, |ext| ext == "json") {
        from_json_str(&contents)
    } else {
        from_toml_str(&contents)
    }
}

/// `$XDG_CONFIG_HOME/ruler/ruler.toml`, if it exists.
pub fn default_path() -> Option<PathBuf> {
    xdg::BaseDirectories::with_prefix(crate::APPLICATION_NAME)
        .ok()?
        .find_config_file(CONFIG_FILE_NAME)
}

/// Options from [`default_path`], or the built-in defaults when there is no
/// such file.
pub fn load_default() -> Result<RulerOptions, Error> {
    match default_path() {
        Some(path) => load(path),
        None => Ok(RulerOptions::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FontWeight;
    use crate::ruler::options::{LineSize, ValueRange};
    use crate::utils::colors::Color;

    #[test]
    fn test_parse_toml() {
        const TOML: &str = r##"type = "vertical"
unit = 100
segment = 5
mainLineSize = "50%"
longLineSize = 12
shortLineSize = "4px"
direction = "center"
textAlign = "right"
range = [-inf, 500]
backgroundColor = "transparent"
rangeBackgroundColor = "#ff000080"
font = "bold 12px monospace"
lineOffset = [1, 0]
"##;
        let options = from_toml_str(TOML).unwrap();
        assert_eq!(options.orientation, Orientation::Vertical);
        assert_eq!(options.unit, 100.0);
        assert_eq!(options.segment, 5);
        assert_eq!(options.main_line_size, LineSize::Percent(50.0));
        assert_eq!(options.long_line_size, LineSize::Pixels(12.0));
        assert_eq!(options.short_line_size, LineSize::Pixels(4.0));
        assert_eq!(options.direction, Direction::Center);
        assert_eq!(options.text_align, TextAlign::Right);
        assert_eq!(options.range, ValueRange::new(f64::NEG_INFINITY, 500.0));
        assert!(options.background_color.is_transparent());
        assert_eq!(
            options.range_background_color,
            Color::new_alpha(1.0, 0.0, 0.0, 128.0 / 255.0)
        );
        assert_eq!(options.font.weight, FontWeight::Bold);
        assert_eq!(options.line_offset, [1.0, 0.0]);
        // Untouched keys keep their defaults.
        assert_eq!(options.zoom, 1.0);
        assert!(options.negative_ruler);
        assert_eq!(options.text_color, Color::WHITE);
    }

    #[test]
    fn test_parse_json() {
        let options = from_json_str(
            r#"{"orientation": "vertical", "zoom": 2, "range": [0, null], "negativeRuler": false}"#,
        )
        .unwrap();
        assert_eq!(options.orientation, Orientation::Vertical);
        assert_eq!(options.zoom, 2.0);
        assert_eq!(options.range, ValueRange::new(0.0, f64::INFINITY));
        assert!(!options.negative_ruler);
    }

    #[test]
    fn test_invalid_configuration() {
        assert!(matches!(
            from_toml_str("colour = \"#fff\""),
            Err(Error::Toml(_))
        ));
        assert!(from_toml_str("direction = \"sideways\"").is_err());
        assert!(from_toml_str("lineColor = \"#ggg\"").is_err());
        assert!(from_toml_str("font = \"serif\"").is_err());
        assert!(matches!(
            from_json_str(r#"{"mainLineSize": "big"}"#),
            Err(Error::Json(_))
        ));
        assert!(matches!(
            load("/nonexistent/ruler.toml"),
            Err(Error::Io { .. })
        ));
    }

    #[test]
    fn test_enum_values() {
        use toml_edit::Document;

        let doc = r#"type = "vertical"
direction = "start"
textAlign = "middle"
"#
        .parse::<Document>()
        .unwrap();
        assert_eq!(
            <Orientation as EnumValue>::toml_deserialize(Some(&doc["type"])),
            Some(Orientation::Vertical)
        );
        assert_eq!(
            <Direction as EnumValue>::toml_deserialize(Some(&doc["direction"])),
            Some(Direction::Start)
        );
        assert_eq!(
            <TextAlign as EnumValue>::toml_deserialize(Some(&doc["textAlign"])),
            None
        );
        assert_eq!(
            <TextAlign as EnumValue>::toml_deserialize(None),
            None
        );
        assert_eq!(Orientation::parse_kebab("horizontal").unwrap(), Orientation::Horizontal);
        let err = Direction::parse_kebab("up").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value `up` for direction, expected one of: start, center, end"
        );
    }
}
