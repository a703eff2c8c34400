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
use std::io::Read;
use std::io::stdin;
use std::path::PathBuf;

use clap::Args;
use clap::Parser;

use crate::cmd::check::check_command;
use crate::cmd::preview::preview_command;
use crate::cmd::render::CardInput;
use crate::cmd::render::render_command;
use crate::error::Fallible;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Render the quiz into a card's HTML and print the result.
    Render {
        #[command(flatten)]
        card: CardArgs,
    },
    /// Write a standalone HTML page showing the rendered card.
    Preview {
        #[command(flatten)]
        card: CardArgs,
        /// Path of the page to write.
        #[arg(long, default_value = "preview.html")]
        output: PathBuf,
        /// Open the page in the browser.
        #[arg(long)]
        open: bool,
    },
    /// Check the config and the character data directory.
    Check {
        /// Path to the config file.
        #[arg(long, default_value = "maobi.toml")]
        config: PathBuf,
    },
}

#[derive(Args)]
struct CardArgs {
    /// Path to the config file.
    #[arg(long, default_value = "maobi.toml")]
    config: PathBuf,
    /// The deck the card belongs to.
    #[arg(long)]
    deck: String,
    /// The name of the card template.
    #[arg(long)]
    card: String,
    /// A note field, as NAME=VALUE. May be repeated.
    #[arg(long = "field")]
    fields: Vec<String>,
    /// File containing the card HTML. Read from standard input if absent.
    #[arg(long)]
    html: Option<PathBuf>,
}

impl CardArgs {
    fn read_html(&self) -> Fallible<String> {
        match &self.html {
            Some(path) => Ok(read_to_string(path)?),
            None => {
                let mut html = String::new();
                stdin().read_to_string(&mut html)?;
                Ok(html)
            }
        }
    }

    fn input<'a>(&'a self, html: &'a str) -> CardInput<'a> {
        CardInput {
            config: &self.config,
            deck: &self.deck,
            card: &self.card,
            fields: &self.fields,
            html,
        }
    }
}

pub fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Render { card } => {
            let html = card.read_html()?;
            render_command(card.input(&html))
        }
        Command::Preview { card, output, open } => {
            let html = card.read_html()?;
            preview_command(card.input(&html), &output, open)
        }
        Command::Check { config } => check_command(&config),
    }
}
