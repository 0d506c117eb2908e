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

use std::collections::HashSet;

use walkdir::WalkDir;

use crate::collection::Collection;
use crate::error::Fallible;
use crate::parser::parse_cards;
use crate::types::card::CardContent;

/// Scan a deck file or directory of deck files and add every card not
/// already in the collection. Cards are deduplicated by their exact front
/// and back text.
pub fn import_deck(directory: Option<String>, deck_path: &str) -> Fallible<()> {
    let mut coll = Collection::new(directory)?;
    let mut parsed: Vec<CardContent> = Vec::new();
    for entry in WalkDir::new(deck_path) {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "md") {
            let contents = std::fs::read_to_string(path)?;
            parsed.extend(parse_cards(&contents));
        }
    }
    println!("Found {} cards.", parsed.len());
    let mut seen: HashSet<CardContent> = coll
        .db
        .all_cards()?
        .into_iter()
        .map(|card| card.content().clone())
        .collect();
    let mut added = 0;
    for content in parsed {
        if seen.insert(content.clone()) {
            coll.db.insert_card(&content)?;
            added += 1;
        }
    }
    println!("Added {added} new cards.");
    Ok(())
}
