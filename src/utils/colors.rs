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

use crate::error::Error;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An RGBA color with components in `[0, 1]`.
///
/// Any color with a zero alpha channel is treated as "transparent".
#[derive(Clone, Deserialize, Serialize, Debug, Copy, PartialEq)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0);
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0);
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    pub const TRANSPARENT: Self = Self::new_alpha(0.0, 0.0, 0.0, 0.0);

    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self::new_alpha(red, green, blue, 1.0)
    }

    pub const fn new_alpha(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub fn is_transparent(&self) -> bool {
        self.alpha <= 0.0
    }

    pub fn try_parse(s: &str) -> Option<Self> {
        static FUNCTIONAL: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*([0-9]*\.?[0-9]+)\s*)?\)$")
                .unwrap()
        });
        let s = s.trim();
        if s.starts_with('#') {
            return Self::try_from_hex(s);
        }
        if let Some(caps) = FUNCTIONAL.captures(s) {
            let channel = |i: usize| -> Option<f64> {
                let v: u16 = caps.get(i)?.as_str().parse().ok()?;
                (v <= 255).then(|| v as f64 / 255.0)
            };
            let alpha = match caps.get(4) {
                Some(a) => a.as_str().parse::<f64>().ok()?.clamp(0.0, 1.0),
                None => 1.0,
            };
            return Some(Self::new_alpha(channel(1)?, channel(2)?, channel(3)?, alpha));
        }
        match s.to_ascii_lowercase().as_str() {
            "transparent" => Some(Self::TRANSPARENT),
            "black" => Some(Self::BLACK),
            "white" => Some(Self::WHITE),
            "red" => Some(Self::RED),
            "lime" => Some(Self::GREEN),
            "green" => Some(Self::new(0.0, 128.0 / 255.0, 0.0)),
            "blue" => Some(Self::BLUE),
            "gray" | "grey" => Some(Self::new(128.0 / 255.0, 128.0 / 255.0, 128.0 / 255.0)),
            _ => None,
        }
    }

    pub fn try_from_hex(s: &str) -> Option<Self> {
        if s.len() == 9 {
            let (r, g, b) = hex_color_to_rgb(s.get(..7)?)?;
            let a = u8::from_str_radix(s.get(7..9)?, 16).ok()? as f64 / 255.0;
            return Some(Color::new_alpha(r, g, b, a));
        }
        hex_color_to_rgb(s).map(|(r, g, b)| Color::new(r, g, b))
    }

    pub fn to_hex(&self) -> String {
        let byte = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        if self.alpha >= 1.0 {
            format!(
                "#{:02x}{:02x}{:02x}",
                byte(self.red),
                byte(self.green),
                byte(self.blue)
            )
        } else {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                byte(self.red),
                byte(self.green),
                byte(self.blue),
                byte(self.alpha)
            )
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        if *self == Self::TRANSPARENT {
            write!(fmt, "transparent")
        } else {
            write!(fmt, "{}", self.to_hex())
        }
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse(s).ok_or_else(|| Error::InvalidColor(s.to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(val: Color) -> String {
        val.to_string()
    }
}

#[cfg(feature = "gtk")]
impl From<gtk::gdk::RGBA> for Color {
    fn from(val: gtk::gdk::RGBA) -> Color {
        Color::new_alpha(val.red(), val.green(), val.blue(), val.alpha())
    }
}

pub fn hex_color_to_rgb(s: &str) -> Option<(f64, f64, f64)> {
    if s.starts_with('#')
        && s.len() == 7
        && s[1..].as_bytes().iter().all(|b| b.is_ascii_hexdigit())
    {
        Some((
            u8::from_str_radix(&s[1..3], 16).ok()? as f64 / 255.0,
            u8::from_str_radix(&s[3..5], 16).ok()? as f64 / 255.0,
            u8::from_str_radix(&s[5..7], 16).ok()? as f64 / 255.0,
        ))
    } else if s.starts_with('#')
        && s.len() == 4
        && s[1..].as_bytes().iter().all(|b| b.is_ascii_hexdigit())
    {
        Some((
            (17 * u8::from_str_radix(&s[1..2], 16).ok()?) as f64 / 255.0,
            (17 * u8::from_str_radix(&s[2..3], 16).ok()?) as f64 / 255.0,
            (17 * u8::from_str_radix(&s[3..4], 16).ok()?) as f64 / 255.0,
        ))
    } else {
        None
    }
}

pub trait ColorExt {
    fn set_source_color(&self, color: Color);
    fn set_source_color_alpha(&self, color: Color);
}

impl ColorExt for cairo::Context {
    fn set_source_color(&self, color: Color) {
        self.set_source_rgb(color.red, color.green, color.blue);
    }

    fn set_source_color_alpha(&self, color: Color) {
        self.set_source_rgba(color.red, color.green, color.blue, color.alpha);
    }
}
