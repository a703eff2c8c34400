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

//! Embeds the handwriting quiz widget into a card's HTML.

mod multi;

use std::collections::HashMap;

use minijinja::AutoEscape;
use minijinja::Environment;
use minijinja::UndefinedBehavior;

use crate::config::DeckConfig;
use crate::config::MaobiConfig;
use crate::data::load::CharacterDataLoader;
use crate::data::resolve_character;
use crate::error::Fallible;
use crate::grid::border_style;
use crate::grid::grid_style;
use crate::quiz::multi::render_multi_quiz;
use crate::types::card::Card;

/// The id of the element the widget is mounted into.
pub const TARGET_DIV: &str = "character-target-div";

/// The outline is drawn inside the element, rather than as a border, so that
/// it does not cover the edges of the background grid.
const QUIZ_TEMPLATE: &str = r#"
<style scoped>
#{{ target_div }} {
    display: inline-block;
    outline-color: rgb(0, 0, 0);
    outline-style: solid;
    outline-width: 1px;
    outline-offset: -1px;
}

{{ styles }}
</style>

{{ html }}

<script>
onShownHook.push(function () {
    var writer = HanziWriter.create('{{ target_div }}', '{{ character }}', {
        width: {{ size }},
        height: {{ size }},
        showCharacter: false,
        showOutline: false,
        highlightOnComplete: true,
        leniency: {{ leniency }},
        padding: 0,
        charDataLoader: function (char, onComplete) {
            var charData = {{ character_data }};
            onComplete(charData);
        }
    });
    writer.quiz();
});
</script>
"#;

/// Renders the quiz into `html` if it contains the target element, and
/// returns it unchanged otherwise.
///
/// The target is found by a plain substring search for `id="` followed by
/// the target id, so an id that merely starts with it also matches. The
/// output still contains the target element, so rendering it a second time
/// adds a second widget.
pub fn render_quiz(
    html: &str,
    card: &Card,
    config: &DeckConfig,
    loader: &dyn CharacterDataLoader,
) -> Fallible<String> {
    if !has_target(html) {
        log::debug!("No quiz target in card HTML.");
        return Ok(html.to_string());
    }
    if config.multi {
        return render_multi_quiz(html, card, config, loader);
    }

    let character: String = resolve_character(card, config)?;
    let character_data = loader.load(&character)?;

    let styles = [
        border_style(TARGET_DIV),
        grid_style(TARGET_DIV, config.grid),
    ];

    let mut context: HashMap<&str, String> = HashMap::new();
    context.insert("html", html.to_string());
    context.insert("target_div", TARGET_DIV.to_string());
    context.insert("character", js_string_content(&character));
    context.insert("character_data", character_data.to_script_literal()?);
    context.insert("size", config.size.to_string());
    context.insert("leniency", format!("{:?}", config.leniency_fraction()));
    context.insert("styles", styles.join("\n"));

    render_template(QUIZ_TEMPLATE, &context)
}

/// Renders the quiz using the deck entry matching the card. Cards from
/// decks or card templates without an entry are returned unchanged.
pub fn render_card(
    html: &str,
    card: &Card,
    config: &MaobiConfig,
    loader: &dyn CharacterDataLoader,
) -> Fallible<String> {
    match config.deck_config(card) {
        Some(deck_config) => render_quiz(html, card, deck_config, loader),
        None => {
            log::debug!(
                "No quiz configured for deck '{}', card '{}'.",
                card.deck_name(),
                card.template_name()
            );
            Ok(html.to_string())
        }
    }
}

fn has_target(html: &str) -> bool {
    html.contains(&format!("id=\"{TARGET_DIV}"))
}

/// Substitutes `context` into `source`. Values are inserted verbatim, and
/// a placeholder without a value is an error.
fn render_template(source: &str, context: &HashMap<&str, String>) -> Fallible<String> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.set_keep_trailing_newline(true);
    Ok(env.render_str(source, context)?)
}

/// Escapes text for use between single quotes in a script.
fn js_string_content(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '<' => out.push_str("\\x3C"),
            _ => out.push(c),
        }
    }
    out
}
