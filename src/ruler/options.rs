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

//! Configuration of a [`Ruler`](crate::ruler::Ruler).

use crate::error::Error;
use crate::font::Font;
use crate::utils::colors::Color;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

#[derive(Debug, Deserialize, Serialize, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Edge of the ruler's thickness that tick marks are anchored to.
#[derive(Debug, Deserialize, Serialize, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    Start,
    Center,
    #[default]
    End,
}

#[derive(Debug, Deserialize, Serialize, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// `-1`, `0` or `1` for left, center and right.
    pub fn sign(self) -> f64 {
        match self {
            Self::Left => -1.0,
            Self::Center => 0.0,
            Self::Right => 1.0,
        }
    }

    /// Offset of the start of a text run of `width` relative to its anchor.
    pub fn offset(self, width: f64) -> f64 {
        match self {
            Self::Left => 0.0,
            Self::Center => -width / 2.0,
            Self::Right => -width,
        }
    }
}

/// Length of a tick mark tier.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize, Serialize)]
#[serde(try_from = "LineSizeRepr", into = "LineSizeRepr")]
pub enum LineSize {
    Pixels(f64),
    /// Percentage of the ruler's thickness.
    Percent(f64),
}

impl LineSize {
    pub fn resolve(self, thickness: f64) -> f64 {
        match self {
            Self::Pixels(px) => px,
            Self::Percent(pc) => thickness * pc / 100.0,
        }
    }
}

impl FromStr for LineSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || Error::InvalidLineSize(s.to_string());
        let t = s.trim();
        if let Some(pc) = t.strip_suffix('%') {
            return pc.trim().parse().map(Self::Percent).map_err(|_| err());
        }
        t.strip_suffix("px")
            .unwrap_or(t)
            .trim()
            .parse()
            .map(Self::Pixels)
            .map_err(|_| err())
    }
}

impl fmt::Display for LineSize {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Pixels(px) => write!(fmt, "{px}px"),
            Self::Percent(pc) => write!(fmt, "{pc}%"),
        }
    }
}

#[derive(Clone, Deserialize, Serialize)]
#[serde(untagged)]
enum LineSizeRepr {
    Number(f64),
    Text(String),
}

impl TryFrom<LineSizeRepr> for LineSize {
    type Error = Error;

    fn try_from(val: LineSizeRepr) -> Result<Self, Self::Error> {
        match val {
            LineSizeRepr::Number(px) => Ok(Self::Pixels(px)),
            LineSizeRepr::Text(s) => s.parse(),
        }
    }
}

impl From<LineSize> for LineSizeRepr {
    fn from(val: LineSize) -> Self {
        match val {
            LineSize::Pixels(px) => Self::Number(px),
            LineSize::Percent(_) => Self::Text(val.to_string()),
        }
    }
}

/// Closed interval of values, either end may be infinite.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ValueRange {
    pub start: f64,
    pub end: f64,
}

impl ValueRange {
    pub const UNBOUNDED: Self = Self::new(f64::NEG_INFINITY, f64::INFINITY);

    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.start && value <= self.end
    }

    /// Both ends are finite.
    pub fn is_bounded(&self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

impl From<[f64; 2]> for ValueRange {
    fn from([start, end]: [f64; 2]) -> Self {
        Self::new(start, end)
    }
}

/// Serialized as a two element array. Infinite ends are written as plain
/// floats, which JSON turns into `null`; `null` reads back as infinity.
impl Serialize for ValueRange {
    fn serialize<S>(&self, se: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        [self.start, self.end].serialize(se)
    }
}

impl<'de> Deserialize<'de> for ValueRange {
    fn deserialize<D>(de: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let [start, end] = <[Option<f64>; 2]>::deserialize(de)?;
        let ret = Self::new(
            start.unwrap_or(f64::NEG_INFINITY),
            end.unwrap_or(f64::INFINITY),
        );
        if ret.start > ret.end {
            return Err(serde::de::Error::custom(format!(
                "range start {} is greater than its end {}",
                ret.start, ret.end
            )));
        }
        Ok(ret)
    }
}

/// Maps a tick value to the text of its label.
#[derive(Clone)]
pub struct TextFormat(Rc<dyn Fn(f64) -> String>);

impl TextFormat {
    pub fn new<F: Fn(f64) -> String + 'static>(f: F) -> Self {
        Self(Rc::new(f))
    }

    pub fn format(&self, value: f64) -> String {
        (self.0)(value)
    }
}

impl fmt::Debug for TextFormat {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_tuple("TextFormat").finish()
    }
}

/// Text of a tick value when no [`TextFormat`] is set, written the way
/// ECMAScript prints numbers: plain decimals in `[1e-6, 1e21)`, exponent
/// notation with an explicit sign outside it.
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        // No "-0".
        return "0".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let abs = value.abs();
    if abs.is_nan() || (1e-6..1e21).contains(&abs) {
        return value.to_string();
    }
    let exp = format!("{value:e}");
    match exp.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exp,
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct RulerOptions {
    #[serde(rename = "type", alias = "orientation")]
    pub orientation: Orientation,
    /// Overrides the host's width when non-zero.
    pub width: f64,
    /// Overrides the host's height when non-zero.
    pub height: f64,
    /// Value distance between two main ticks.
    pub unit: f64,
    pub zoom: f64,
    pub direction: Direction,
    pub text_align: TextAlign,
    pub font: Font,
    /// Subdivisions per unit.
    pub segment: u32,
    pub main_line_size: LineSize,
    pub long_line_size: LineSize,
    pub short_line_size: LineSize,
    pub line_offset: [f64; 2],
    pub text_offset: [f64; 2],
    pub negative_ruler: bool,
    pub range: ValueRange,
    /// Scroll position used until the first [`scroll`](crate::ruler::Ruler::scroll).
    pub scroll_pos: f64,
    pub background_color: Color,
    pub range_background_color: Color,
    pub line_color: Color,
    pub text_color: Color,
    pub text_background_color: Color,
    #[serde(skip)]
    pub text_format: Option<TextFormat>,
}

impl RulerOptions {
    pub fn label_text(&self, value: f64) -> String {
        match self.text_format {
            Some(ref f) => f.format(value),
            None => format_value(value),
        }
    }
}

impl Default for RulerOptions {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            width: 0.0,
            height: 0.0,
            unit: 50.0,
            zoom: 1.0,
            direction: Direction::End,
            text_align: TextAlign::Left,
            font: Font::default(),
            segment: 10,
            main_line_size: LineSize::Percent(100.0),
            long_line_size: LineSize::Pixels(10.0),
            short_line_size: LineSize::Pixels(7.0),
            line_offset: [0.0, 0.0],
            text_offset: [0.0, 0.0],
            negative_ruler: true,
            range: ValueRange::UNBOUNDED,
            scroll_pos: 0.0,
            background_color: Color::new(0.2, 0.2, 0.2),
            range_background_color: Color::TRANSPARENT,
            line_color: Color::new(0x77 as f64 / 255.0, 0x77 as f64 / 255.0, 0x77 as f64 / 255.0),
            text_color: Color::WHITE,
            text_background_color: Color::TRANSPARENT,
            text_format: None,
        }
    }
}
