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

use serde::Deserialize;
use serde::Serialize;

use crate::error::Fallible;

/// Stroke geometry for a single character, in the layout of the
/// hanzi-writer-data files consumed by the client-side widget.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterData {
    /// SVG path data, one entry per stroke, in stroke order.
    pub strokes: Vec<String>,
    /// Median points of each stroke, used for stroke matching.
    pub medians: Vec<Vec<[i32; 2]>>,
    /// Indices of the strokes that belong to the radical.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rad_strokes: Option<Vec<usize>>,
}

impl CharacterData {
    pub fn from_json(json: &str) -> Fallible<Self> {
        let data: CharacterData = serde_json::from_str(json)?;
        Ok(data)
    }

    /// Serializes the data as a literal that can be embedded in a `<script>`
    /// element. The result is JSON, with `</` written as `<\/` so that it can
    /// never terminate the enclosing element.
    pub fn to_script_literal(&self) -> Fallible<String> {
        script_literal(self)
    }
}

/// Serializes any value as JSON that is safe to embed in a `<script>`
/// element.
pub fn script_literal<T: Serialize>(value: &T) -> Fallible<String> {
    let json: String = serde_json::to_string(value)?;
    Ok(json.replace("</", "<\\/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() -> Fallible<()> {
        let json = r#"{"strokes": ["M 1 2 L 3 4"], "medians": [[[1, 2], [3, 4]]], "radStrokes": [0]}"#;
        let data = CharacterData::from_json(json)?;
        assert_eq!(data.strokes, vec!["M 1 2 L 3 4".to_string()]);
        assert_eq!(data.medians, vec![vec![[1, 2], [3, 4]]]);
        assert_eq!(data.rad_strokes, Some(vec![0]));
        Ok(())
    }

    #[test]
    fn test_from_json_without_radicals() -> Fallible<()> {
        let json = r#"{"strokes": [], "medians": []}"#;
        let data = CharacterData::from_json(json)?;
        assert_eq!(data.rad_strokes, None);
        Ok(())
    }

    #[test]
    fn test_from_invalid_json() {
        assert!(CharacterData::from_json(r#"{"strokes": 1}"#).is_err());
    }

    #[test]
    fn test_script_literal() -> Fallible<()> {
        let data = CharacterData {
            strokes: vec!["M 0 0 Z".to_string()],
            medians: vec![vec![[0, 0], [10, -5]]],
            rad_strokes: None,
        };
        assert_eq!(
            data.to_script_literal()?,
            r#"{"strokes":["M 0 0 Z"],"medians":[[[0,0],[10,-5]]]}"#
        );
        Ok(())
    }

    #[test]
    fn test_script_literal_cannot_close_script() -> Fallible<()> {
        let data = CharacterData {
            strokes: vec!["</script><script>alert(1)".to_string()],
            medians: vec![],
            rad_strokes: Some(vec![]),
        };
        let literal = data.to_script_literal()?;
        assert!(!literal.contains("</"));
        // Still valid JSON, and the escape decodes to the original text.
        let parsed = CharacterData::from_json(&literal)?;
        assert_eq!(parsed, data);
        Ok(())
    }
}
