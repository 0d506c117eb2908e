// Copyright 2026 the cardbox authors
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

use clap::Parser;

use crate::cmd::add::add_card;
use crate::cmd::due::print_due_cards;
use crate::cmd::export::export_collection;
use crate::cmd::import::import_deck;
use crate::cmd::review::review_cards;
use crate::cmd::stats::StatsFormat;
use crate::cmd::stats::print_stats;
use crate::error::Fallible;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Add a card to the collection.
    Add {
        /// The front of the card.
        front: String,
        /// The back of the card.
        back: String,
        /// Optional path to the collection directory.
        directory: Option<String>,
    },
    /// List the cards due for review.
    Due {
        /// Optional path to the collection directory.
        directory: Option<String>,
        /// Maximum number of cards to list.
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Review due cards.
    Review {
        /// Optional path to the collection directory.
        directory: Option<String>,
        /// Maximum number of cards to review.
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Import cards from Markdown files.
    Import {
        /// Path to a Markdown file or a directory of them.
        path: String,
        /// Optional path to the collection directory.
        directory: Option<String>,
    },
    /// Print collection statistics.
    Stats {
        /// Optional path to the collection directory.
        directory: Option<String>,
        /// Output format.
        #[arg(long, default_value_t = StatsFormat::Text)]
        format: StatsFormat,
    },
    /// Export the collection as JSON.
    Export {
        /// Optional path to the collection directory.
        directory: Option<String>,
    },
}

pub fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Add {
            front,
            back,
            directory,
        } => add_card(directory, &front, &back),
        Command::Due { directory, limit } => print_due_cards(directory, limit),
        Command::Review { directory, limit } => review_cards(directory, limit),
        Command::Import { path, directory } => import_deck(directory, &path),
        Command::Stats { directory, format } => print_stats(directory, format),
        Command::Export { directory } => export_collection(directory),
    }
}
