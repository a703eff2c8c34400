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

use std::collections::HashSet;
use std::fs::read_to_string;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::error::Fallible;
use crate::error::fail;
use crate::grid::GridKind;
use crate::types::card::Card;

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_SIZE: u32 = 200;
const DEFAULT_LENIENCY: u8 = 100;

/// The contents of `maobi.toml`.
#[derive(Debug)]
pub struct MaobiConfig {
    /// Absolute path to the character data directory.
    pub data_dir: PathBuf,
    pub decks: Vec<DeckConfig>,
}

/// Quiz settings for one card template in one deck.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeckConfig {
    pub deck: String,
    pub card: String,
    /// The note field holding the character to quiz.
    pub field: String,
    #[serde(default)]
    pub grid: GridKind,
    /// Width and height of the widget, in pixels.
    #[serde(default = "default_size")]
    pub size: u32,
    /// Stroke-matching tolerance, as a percentage.
    #[serde(default = "default_leniency")]
    pub leniency: u8,
    /// Quiz every character of the field in turn, instead of the whole
    /// field as a single character.
    #[serde(default)]
    pub multi: bool,
    /// Field holding the pinyin, used to colour strokes by tone. Only used
    /// in multi-character quizzes.
    #[serde(default)]
    pub tone_field: Option<String>,
    /// Number of misses after which a stroke hint is shown. Never, if unset.
    #[serde(default)]
    pub show_hint_after_misses: Option<u32>,
    /// Id of the element that receives the reveal button.
    #[serde(default)]
    pub reveal_button: Option<String>,
    /// Id of the element that receives the restart button.
    #[serde(default)]
    pub restart_button: Option<String>,
}

fn default_size() -> u32 {
    DEFAULT_SIZE
}

fn default_leniency() -> u8 {
    DEFAULT_LENIENCY
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    data: Option<String>,
    #[serde(default)]
    decks: Vec<DeckConfig>,
}

impl MaobiConfig {
    pub fn load(path: &Path) -> Fallible<Self> {
        if !path.exists() {
            return fail(format!("config file does not exist: {}", path.display()));
        }
        let content = read_to_string(path)?;
        let base: PathBuf = path
            .canonicalize()?
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Self::parse(&content, &base)
    }

    /// Parses a config, resolving the data directory relative to `base`.
    pub fn parse(content: &str, base: &Path) -> Fallible<Self> {
        let file: ConfigFile = toml::from_str(content)?;
        let data_dir = base.join(file.data.as_deref().unwrap_or(DEFAULT_DATA_DIR));
        let mut seen = HashSet::new();
        for deck in &file.decks {
            deck.validate()?;
            if !seen.insert((deck.deck.as_str(), deck.card.as_str())) {
                return fail(format!(
                    "duplicate config for deck '{}', card '{}'",
                    deck.deck, deck.card
                ));
            }
        }
        log::debug!("Loaded config with {} deck entries.", file.decks.len());
        Ok(Self {
            data_dir,
            decks: file.decks,
        })
    }

    /// The entry matching the card's deck and card template, if any.
    pub fn deck_config(&self, card: &Card) -> Option<&DeckConfig> {
        self.decks
            .iter()
            .find(|d| d.deck == card.deck_name() && d.card == card.template_name())
    }
}

impl DeckConfig {
    fn validate(&self) -> Fallible<()> {
        if self.field.trim().is_empty() {
            return fail(format!("deck '{}': field must not be empty", self.deck));
        }
        if self.size == 0 {
            return fail(format!("deck '{}': size must be positive", self.deck));
        }
        if self.leniency > 100 {
            return fail(format!(
                "deck '{}': leniency must be between 0 and 100, got {}",
                self.deck, self.leniency
            ));
        }
        Ok(())
    }

    /// The leniency as the fraction the widget expects.
    pub fn leniency_fraction(&self) -> f64 {
        f64::from(self.leniency) / 100.0
    }
}
