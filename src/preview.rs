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

use maud::DOCTYPE;
use maud::Markup;
use maud::PreEscaped;
use maud::html;

pub const HANZI_WRITER_URL: &str =
    "https://cdn.jsdelivr.net/npm/hanzi-writer@3.5/dist/hanzi-writer.min.js";

/// Card templates register their scripts in `onShownHook`, which the
/// flashcard reviewer runs once the card is visible. The page provides the
/// same hook so rendered cards work outside the reviewer.
const HOOK_SHIM: &str = "var onShownHook = [];";
const RUN_HOOKS: &str = "onShownHook.forEach(function (hook) { hook(); });";

/// A standalone page displaying rendered card HTML.
pub fn preview_page(page_title: &str, card_html: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="zh" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (page_title) }
                script src=(HANZI_WRITER_URL) {};
                script { (PreEscaped(HOOK_SHIM)) }
            }
            body {
                div.card {
                    (PreEscaped(card_html))
                }
                script { (PreEscaped(RUN_HOOKS)) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_page() {
        let page = preview_page("水 <preview>", "<div id=\"x\"></div>").into_string();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>水 &lt;preview&gt;</title>"));
        assert!(page.contains(HANZI_WRITER_URL));
        assert!(page.contains("<div id=\"x\"></div>"));
        let shim = page.find(HOOK_SHIM).unwrap();
        let body = page.find("<div id=\"x\">").unwrap();
        let run = page.find(RUN_HOOKS).unwrap();
        assert!(shim < body);
        assert!(body < run);
    }
}
