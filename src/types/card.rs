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

/// A card being displayed, as seen by the quiz renderer.
#[derive(Clone, Debug)]
pub struct Card {
    /// The name of the deck this card belongs to.
    deck_name: String,
    /// The name of the card template that produced this card.
    template_name: String,
    /// The note's fields, in note-type order.
    fields: Vec<(String, String)>,
}

impl Card {
    pub fn new(
        deck_name: impl Into<String>,
        template_name: impl Into<String>,
        fields: Vec<(String, String)>,
    ) -> Self {
        Self {
            deck_name: deck_name.into(),
            template_name: template_name.into(),
            fields,
        }
    }

    pub fn deck_name(&self) -> &str {
        &self.deck_name
    }

    pub fn template_name(&self) -> &str {
        &self.template_name
    }

    /// The value of the field with the given name, if the note has one.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}
