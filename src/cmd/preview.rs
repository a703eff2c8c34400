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

use std::fs::write;
use std::path::Path;

use crate::cmd::render::CardInput;
use crate::cmd::render::render_input;
use crate::error::Fallible;
use crate::preview::preview_page;

pub fn preview_command(input: CardInput<'_>, output: &Path, open_browser: bool) -> Fallible<()> {
    let title = format!("{} / {}", input.deck, input.card);
    let card_html = render_input(input)?;
    let page = preview_page(&title, &card_html);
    write(output, page.into_string())?;
    println!("Wrote preview to {}.", output.display());
    if open_browser {
        log::debug!("Opening {} in the browser.", output.display());
        open::that(output)?;
    }
    Ok(())
}
