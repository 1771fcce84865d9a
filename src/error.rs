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

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cairo: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("could not write image: {0}")]
    Image(#[from] cairo::IoError),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML configuration: {0}")]
    Toml(#[from] toml_edit::de::Error),

    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid color `{0}`")]
    InvalidColor(String),

    #[error("invalid font `{0}`")]
    InvalidFont(String),

    #[error("invalid line size `{0}`")]
    InvalidLineSize(String),

    #[error("invalid value `{value}` for {name}, expected one of: {}", .expected.join(", "))]
    InvalidValue {
        name: &'static str,
        value: String,
        expected: &'static [&'static str],
    },

    #[error("cannot export to {}: expected a .png or .svg file", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("nothing to export: the ruler has a zero size")]
    EmptySurface,
}

impl Error {
    pub fn suggest_bug_report(err: &str) -> String {
        format!("Application error: {err}\n\nIf you wish to report this bug to <{}>, you can include the following build info string:\n\n{}", crate::ISSUE_TRACKER, crate::BUILD_INFO)
    }

    /// Errors that come from the rendering backend rather than user input.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Cairo(_) | Self::Image(_))
    }
}
