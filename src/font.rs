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

//! CSS font shorthand, as accepted by the `font` option.
//!
//! Only the parts that matter for drawing ruler labels are kept: style,
//! weight, size and the family list. A line height (`10px/1.2`) is accepted
//! and ignored.

use crate::error::Error;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pixel size of the CSS `medium` keyword, used for relative units.
pub const MEDIUM_FONT_SIZE: f64 = 16.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Oblique,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct Font {
    pub style: FontStyle,
    pub weight: FontWeight,
    /// Size in pixels.
    pub size: f64,
    pub families: Vec<String>,
}

impl Font {
    pub fn new(size: f64, family: &str) -> Self {
        Self {
            style: FontStyle::Normal,
            weight: FontWeight::Normal,
            size,
            families: vec![family.to_string()],
        }
    }

    /// First family of the list, the only one cairo's toy font API can use.
    pub fn family(&self) -> &str {
        self.families
            .first()
            .map(String::as_str)
            .unwrap_or("sans-serif")
    }

    pub fn to_cairo(&self) -> (cairo::FontSlant, cairo::FontWeight) {
        (
            match self.style {
                FontStyle::Normal => cairo::FontSlant::Normal,
                FontStyle::Italic => cairo::FontSlant::Italic,
                FontStyle::Oblique => cairo::FontSlant::Oblique,
            },
            match self.weight {
                FontWeight::Normal => cairo::FontWeight::Normal,
                FontWeight::Bold => cairo::FontWeight::Bold,
            },
        )
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(10.0, "sans-serif")
    }
}

impl FromStr for Font {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        static SHORTHAND: Lazy<Regex> = Lazy::new(|| {
            Regex::new(
                r"^\s*(?P<modifiers>(?:[a-zA-Z0-9-]+\s+)*)(?P<size>\d*\.?\d+)(?P<unit>px|pt|em|rem|%)?(?:\s*/\s*\S+)?\s+(?P<families>\S.*?)\s*$",
            )
            .unwrap()
        });
        let err = || Error::InvalidFont(s.to_string());
        let caps = SHORTHAND.captures(s).ok_or_else(err)?;

        let mut ret = Font::default();
        for modifier in caps["modifiers"].split_whitespace() {
            match modifier.to_ascii_lowercase().as_str() {
                "normal" | "small-caps" | "lighter" => {}
                "italic" => ret.style = FontStyle::Italic,
                "oblique" => ret.style = FontStyle::Oblique,
                "bold" | "bolder" => ret.weight = FontWeight::Bold,
                other => match other.parse::<u16>() {
                    Ok(w @ 100..=900) if w % 100 == 0 => {
                        ret.weight = if w >= 600 {
                            FontWeight::Bold
                        } else {
                            FontWeight::Normal
                        };
                    }
                    _ => return Err(err()),
                },
            }
        }

        let size: f64 = caps["size"].parse().map_err(|_| err())?;
        ret.size = match caps.name("unit").map(|m| m.as_str()) {
            None | Some("px") => size,
            Some("pt") => size * 4.0 / 3.0,
            Some("em") | Some("rem") => size * MEDIUM_FONT_SIZE,
            Some("%") => size * MEDIUM_FONT_SIZE / 100.0,
            Some(_) => return Err(err()),
        };

        ret.families = caps["families"]
            .split(',')
            .map(|f| f.trim().trim_matches(|c| c == '"' || c == '\'').to_string())
            .filter(|f| !f.is_empty())
            .collect();
        if ret.families.is_empty() {
            return Err(err());
        }
        Ok(ret)
    }
}

impl fmt::Display for Font {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self.style {
            FontStyle::Normal => {}
            FontStyle::Italic => write!(fmt, "italic ")?,
            FontStyle::Oblique => write!(fmt, "oblique ")?,
        }
        if self.weight == FontWeight::Bold {
            write!(fmt, "bold ")?;
        }
        write!(fmt, "{}px ", self.size)?;
        for (i, family) in self.families.iter().enumerate() {
            if i > 0 {
                write!(fmt, ", ")?;
            }
            if family.contains(' ') {
                write!(fmt, "\"{family}\"")?;
            } else {
                write!(fmt, "{family}")?;
            }
        }
        Ok(())
    }
}

impl TryFrom<String> for Font {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Font> for String {
    fn from(val: Font) -> String {
        val.to_string()
    }
}
