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

pub mod load;
pub mod tones;

use crate::config::DeckConfig;
use crate::error::Fallible;
use crate::error::fail;
use crate::data::tones::parse_tones;
use crate::types::card::Card;

const ENTITIES: [(&str, &str); 6] = [
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&amp;", "&"),
];

/// Finds the character to quiz: the configured field of the card, with any
/// markup removed.
pub fn resolve_character(card: &Card, config: &DeckConfig) -> Fallible<String> {
    let value = match card.field(&config.field) {
        Some(value) => value,
        None => {
            return fail(format!(
                "card in deck '{}' has no field named '{}'",
                card.deck_name(),
                config.field
            ));
        }
    };
    let character = strip_html(value).trim().to_string();
    if character.is_empty() {
        return fail(format!("field '{}' is empty", config.field));
    }
    log::debug!("Resolved character '{character}' from field '{}'.", config.field);
    Ok(character)
}

/// The characters of a multi-character quiz: every non-whitespace
/// character of the configured field, in order.
pub fn resolve_characters(card: &Card, config: &DeckConfig) -> Fallible<Vec<String>> {
    let text = resolve_character(card, config)?;
    Ok(text
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(String::from)
        .collect())
}

/// The tone of each character, read from the configured pinyin field.
/// Empty when there is no such field or its syllables do not line up with
/// the characters; the widget then draws every stroke in the same colour.
pub fn resolve_tones(card: &Card, config: &DeckConfig, count: usize) -> Vec<u8> {
    let Some(field) = config.tone_field.as_deref() else {
        return Vec::new();
    };
    let Some(value) = card.field(field) else {
        log::debug!("Card has no tone field '{field}'.");
        return Vec::new();
    };
    let tones = parse_tones(&strip_html(value));
    if tones.len() != count {
        log::debug!(
            "Found {} tones for {count} characters, ignoring tones.",
            tones.len()
        );
        return Vec::new();
    }
    tones
}

/// Removes tags and decodes the entities editors commonly insert into
/// field values.
fn strip_html(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }
    // `&amp;` goes last so that e.g. `&amp;lt;` decodes to `&lt;`.
    for (entity, replacement) in ENTITIES {
        text = text.replace(entity, replacement);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorReport;
    use crate::grid::GridKind;

    fn make_config() -> DeckConfig {
        DeckConfig {
            deck: "Chinese".to_string(),
            card: "Writing".to_string(),
            field: "Hanzi".to_string(),
            grid: GridKind::Rice,
            size: 200,
            leniency: 100,
            multi: true,
            tone_field: Some("Pinyin".to_string()),
            show_hint_after_misses: None,
            reveal_button: None,
            restart_button: None,
        }
    }

    fn make_card(value: &str) -> Card {
        Card::new(
            "Chinese",
            "Writing",
            vec![("Hanzi".to_string(), value.to_string())],
        )
    }

    #[test]
    fn test_plain_field() -> Fallible<()> {
        assert_eq!(resolve_character(&make_card("水"), &make_config())?, "水");
        Ok(())
    }

    #[test]
    fn test_markup_is_stripped() -> Fallible<()> {
        let card = make_card("<div><b>火</b></div>&nbsp;<br>");
        assert_eq!(resolve_character(&card, &make_config())?, "火");
        Ok(())
    }

    #[test]
    fn test_missing_field() {
        let card = Card::new("Chinese", "Writing", vec![]);
        assert_eq!(
            resolve_character(&card, &make_config()),
            Err(ErrorReport::new(
                "card in deck 'Chinese' has no field named 'Hanzi'"
            ))
        );
    }

    #[test]
    fn test_empty_field() {
        let card = make_card("  <br/> &nbsp; ");
        assert!(resolve_character(&card, &make_config()).is_err());
    }

    #[test]
    fn test_resolve_characters() -> Fallible<()> {
        let card = make_card("<b>水果</b> 汁");
        assert_eq!(
            resolve_characters(&card, &make_config())?,
            vec!["水".to_string(), "果".to_string(), "汁".to_string()]
        );
        Ok(())
    }

    #[test]
    fn test_resolve_tones() {
        let card = Card::new(
            "Chinese",
            "Words",
            vec![
                ("Hanzi".to_string(), "水果".to_string()),
                ("Pinyin".to_string(), "<i>shuǐ guǒ</i>".to_string()),
            ],
        );
        assert_eq!(resolve_tones(&card, &make_config(), 2), vec![3, 3]);
        // Mismatched syllable count.
        assert_eq!(resolve_tones(&card, &make_config(), 3), Vec::<u8>::new());
    }

    #[test]
    fn test_resolve_tones_without_field() {
        let config = DeckConfig {
            tone_field: None,
            ..make_config()
        };
        assert!(resolve_tones(&make_card("水"), &config, 1).is_empty());
        // Configured, but missing from the card.
        assert!(resolve_tones(&make_card("水"), &make_config(), 1).is_empty());
    }

    #[test]
    fn test_strip_html_entities() {
        assert_eq!(strip_html("a &lt;b&gt; &amp;lt;"), "a <b> &lt;");
    }
}
