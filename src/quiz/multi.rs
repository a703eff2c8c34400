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

//! Quizzes every character of a field in turn, with tone colours and
//! optional reveal and restart buttons.

use std::collections::HashMap;

use serde::Serialize;

use crate::config::DeckConfig;
use crate::data::load::CharacterDataLoader;
use crate::data::resolve_characters;
use crate::data::resolve_tones;
use crate::error::Fallible;
use crate::grid::border_style;
use crate::grid::grid_style;
use crate::quiz::TARGET_DIV;
use crate::quiz::render_template;
use crate::types::card::Card;
use crate::types::character_data::CharacterData;
use crate::types::character_data::script_literal;

const QUIZ_SCRIPT: &str = include_str!("multi.js");

/// Selector of the per-character elements the script creates.
const CHARACTER_SELECTOR: &str = "character-target-div > .maobi-character";

const MULTI_QUIZ_TEMPLATE: &str = r#"
<style scoped>
#{{ target_div }} {
    display: inline-block;
    white-space: nowrap;
}

#{{ character_selector }} {
    display: inline-block;
    outline-color: rgb(0, 0, 0);
    outline-style: solid;
    outline-width: 1px;
    outline-offset: -1px;
    transition: opacity 0.3s, margin-left 0.3s;
}

{{ styles }}
</style>

{{ html }}

<script>
onShownHook.push(function () {
{{ script }}
    maobiQuiz({{ config }}, {{ data }});
});
</script>
"#;

/// Settings read by the client-side script.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WidgetConfig<'a> {
    target_div: &'a str,
    size: u32,
    leniency: f64,
    show_hint_after_misses: Option<u32>,
    reveal_button: Option<&'a str>,
    restart_button: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QuizData {
    characters: Vec<String>,
    characters_data: Vec<CharacterData>,
    /// One tone (1 to 5) per character, or empty.
    tones: Vec<u8>,
}

pub fn render_multi_quiz(
    html: &str,
    card: &Card,
    config: &DeckConfig,
    loader: &dyn CharacterDataLoader,
) -> Fallible<String> {
    let characters = resolve_characters(card, config)?;
    let characters_data = characters
        .iter()
        .map(|character| loader.load(character))
        .collect::<Fallible<Vec<_>>>()?;
    let tones = resolve_tones(card, config, characters.len());
    log::debug!("Rendering quiz for {} characters.", characters.len());

    let widget = WidgetConfig {
        target_div: TARGET_DIV,
        size: config.size,
        leniency: config.leniency_fraction(),
        show_hint_after_misses: config.show_hint_after_misses,
        reveal_button: config.reveal_button.as_deref(),
        restart_button: config.restart_button.as_deref(),
    };
    let data = QuizData {
        characters,
        characters_data,
        tones,
    };
    let styles = [
        border_style(TARGET_DIV),
        grid_style(CHARACTER_SELECTOR, config.grid),
    ];

    let mut context: HashMap<&str, String> = HashMap::new();
    context.insert("html", html.to_string());
    context.insert("target_div", TARGET_DIV.to_string());
    context.insert("character_selector", CHARACTER_SELECTOR.to_string());
    context.insert("styles", styles.join("\n"));
    context.insert("script", QUIZ_SCRIPT.to_string());
    context.insert("config", script_literal(&widget)?);
    context.insert("data", script_literal(&data)?);

    render_template(MULTI_QUIZ_TEMPLATE, &context)
}
