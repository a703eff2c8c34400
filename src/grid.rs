// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Style fragments for the quiz widget: the outline colour and the
//! background writing grid.

use percent_encoding::NON_ALPHANUMERIC;
use percent_encoding::utf8_percent_encode;
use serde::Deserialize;

const GRID_COLOR: &str = "#DDD";

/// The guide lines drawn behind the character.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridKind {
    /// No background grid.
    None,
    /// 田字格: a horizontal and a vertical centre line.
    Field,
    /// 米字格: the centre lines plus both diagonals.
    #[default]
    Rice,
}

type Line = (&'static str, &'static str, &'static str, &'static str);

const HORIZONTAL: Line = ("0", "50%", "100%", "50%");
const VERTICAL: Line = ("50%", "0", "50%", "100%");
const DIAGONAL: Line = ("0", "0", "100%", "100%");
const ANTI_DIAGONAL: Line = ("100%", "0", "0", "100%");

impl GridKind {
    fn lines(self) -> &'static [Line] {
        match self {
            GridKind::None => &[],
            GridKind::Field => &[HORIZONTAL, VERTICAL],
            GridKind::Rice => &[HORIZONTAL, VERTICAL, DIAGONAL, ANTI_DIAGONAL],
        }
    }
}

/// The outline is drawn by the quiz template in black; in night mode it
/// needs to be white to remain visible.
pub fn border_style(target_id: &str) -> String {
    format!(
        ".nightMode #{target_id} {{\n    outline-color: rgb(255, 255, 255);\n}}"
    )
}

/// CSS drawing the given grid as the background image of the target
/// element. Returns an empty string for [`GridKind::None`].
pub fn grid_style(target_id: &str, grid: GridKind) -> String {
    let lines = grid.lines();
    if lines.is_empty() {
        return String::new();
    }
    let mut svg = String::from(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="100%" height="100%">"#,
    );
    for (x1, y1, x2, y2) in lines {
        svg.push_str(&format!(
            r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{GRID_COLOR}" stroke-width="1" stroke-dasharray="5,5"/>"#
        ));
    }
    svg.push_str("</svg>");
    let encoded = utf8_percent_encode(&svg, NON_ALPHANUMERIC);
    format!(
        "#{target_id} {{\n    background-image: url(\"data:image/svg+xml,{encoded}\");\n    background-size: 100% 100%;\n}}"
    )
}
