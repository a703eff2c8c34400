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

use std::path::Path;

use crate::config::MaobiConfig;
use crate::data::load::DirectoryLoader;
use crate::error::Fallible;
use crate::error::fail;
use crate::quiz::render_card;
use crate::types::card::Card;

/// What the command line knows about the card to render.
pub struct CardInput<'a> {
    pub config: &'a Path,
    pub deck: &'a str,
    pub card: &'a str,
    /// Fields given as `NAME=VALUE`.
    pub fields: &'a [String],
    pub html: &'a str,
}

pub fn render_command(input: CardInput<'_>) -> Fallible<()> {
    let output = render_input(input)?;
    print!("{output}");
    Ok(())
}

pub fn render_input(input: CardInput<'_>) -> Fallible<String> {
    let config = MaobiConfig::load(input.config)?;
    let loader = DirectoryLoader::new(config.data_dir.clone());
    let fields = parse_fields(input.fields)?;
    let card = Card::new(input.deck, input.card, fields);
    render_card(input.html, &card, &config, &loader)
}

fn parse_fields(fields: &[String]) -> Fallible<Vec<(String, String)>> {
    let mut parsed = Vec::new();
    for field in fields {
        match field.split_once('=') {
            Some((name, value)) if !name.is_empty() => {
                parsed.push((name.to_string(), value.to_string()));
            }
            _ => return fail(format!("invalid field '{field}': expected NAME=VALUE")),
        }
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fields() -> Fallible<()> {
        let fields = vec!["Hanzi=水".to_string(), "Formula=a=b".to_string()];
        assert_eq!(
            parse_fields(&fields)?,
            vec![
                ("Hanzi".to_string(), "水".to_string()),
                ("Formula".to_string(), "a=b".to_string()),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_parse_invalid_fields() {
        assert!(parse_fields(&["Hanzi".to_string()]).is_err());
        assert!(parse_fields(&["=水".to_string()]).is_err());
    }

    #[test]
    fn test_render_input() -> Fallible<()> {
        let fields = vec!["Hanzi=火".to_string()];
        let output = render_input(CardInput {
            config: Path::new("./test/maobi.toml"),
            deck: "Chinese",
            card: "Writing",
            fields: &fields,
            html: r#"<div id="character-target-div"></div>"#,
        })?;
        assert!(output.contains("'火'"));
        Ok(())
    }

    #[test]
    fn test_render_input_unconfigured_card() -> Fallible<()> {
        let output = render_input(CardInput {
            config: Path::new("./test/maobi.toml"),
            deck: "French",
            card: "Writing",
            fields: &[],
            html: r#"<div id="character-target-div"></div>"#,
        })?;
        assert_eq!(output, r#"<div id="character-target-div"></div>"#);
        Ok(())
    }

    #[test]
    fn test_render_input_missing_character_data() {
        let fields = vec!["Hanzi=龘".to_string()];
        let result = render_input(CardInput {
            config: Path::new("./test/maobi.toml"),
            deck: "Chinese",
            card: "Writing",
            fields: &fields,
            html: r#"<div id="character-target-div"></div>"#,
        });
        assert!(result.is_err());
    }
}
