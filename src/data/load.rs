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

use std::fs::read_to_string;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use crate::error::Fallible;
use crate::error::fail;
use crate::types::character_data::CharacterData;

/// Source of stroke data for characters.
pub trait CharacterDataLoader {
    fn load(&self, character: &str) -> Fallible<CharacterData>;
}

/// Loads character data from a directory laid out like hanzi-writer-data:
/// one `<character>.json` file per character.
pub struct DirectoryLoader {
    root: PathBuf,
}

impl DirectoryLoader {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// The path of the data file for `character`. Characters that could
    /// name a file outside the root are rejected.
    fn path_for(&self, character: &str) -> Fallible<PathBuf> {
        let file_name = format!("{character}.json");
        let mut components = Path::new(&file_name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => {}
            _ => return fail(format!("invalid character: '{character}'")),
        }
        if character.is_empty() || character.contains(['/', '\\']) {
            return fail(format!("invalid character: '{character}'"));
        }
        Ok(self.root.join(file_name))
    }
}

impl CharacterDataLoader for DirectoryLoader {
    fn load(&self, character: &str) -> Fallible<CharacterData> {
        let path = self.path_for(character)?;
        if !path.is_file() {
            return fail(format!("no character data for '{character}'"));
        }
        log::debug!("Loading character data from {}", path.display());
        let content = read_to_string(&path)?;
        CharacterData::from_json(&content)
    }
}
