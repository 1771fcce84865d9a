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

//! Names a host needs to wire a ruler up: the operations it can call and the
//! configuration properties it can set.

use super::options::RulerOptions;
use indexmap::IndexMap;

pub const METHODS: &[&str] = &["scroll", "resize"];

pub const PROPERTIES: &[&str] = &[
    "type",
    "width",
    "height",
    "unit",
    "zoom",
    "direction",
    "textAlign",
    "font",
    "segment",
    "mainLineSize",
    "longLineSize",
    "shortLineSize",
    "lineOffset",
    "textOffset",
    "negativeRuler",
    "range",
    "scrollPos",
    "backgroundColor",
    "rangeBackgroundColor",
    "lineColor",
    "textColor",
    "textBackgroundColor",
    "textFormat",
];

/// Default value of every property that has a serialized form, in
/// [`PROPERTIES`] order. `textFormat` is a closure and has none.
pub fn defaults() -> IndexMap<&'static str, serde_json::Value> {
    let mut value = match serde_json::to_value(RulerOptions::default()) {
        Ok(serde_json::Value::Object(map)) => map,
        _ => return IndexMap::new(),
    };
    PROPERTIES
        .iter()
        .filter_map(|&name| Some((name, value.remove(name)?)))
        .collect()
}
