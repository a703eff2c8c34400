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

use walkdir::WalkDir;

use crate::config::MaobiConfig;
use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::error::fail;
use crate::types::character_data::CharacterData;

pub fn check_command(config: &Path) -> Fallible<()> {
    let count = check_config(config)?;
    println!("ok ({count} characters)");
    Ok(())
}

/// Validates the config and parses every file in its data directory.
/// Returns the number of characters found.
fn check_config(path: &Path) -> Fallible<usize> {
    let config = MaobiConfig::load(path)?;
    if !config.data_dir.is_dir() {
        return fail(format!(
            "data directory does not exist: {}",
            config.data_dir.display()
        ));
    }
    let mut count = 0;
    for entry in WalkDir::new(&config.data_dir) {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            let content = std::fs::read_to_string(path)?;
            CharacterData::from_json(&content)
                .map_err(|e| ErrorReport::new(format!("{}: {e}", path.display())))?;
            count += 1;
        }
    }
    log::debug!("Checked {count} character data files.");
    Ok(count)
}
