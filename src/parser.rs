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

use crate::types::card::CardContent;

/// Parse the text of a deck file. Cards are blocks separated by blank
/// lines, with the front and back split by " / ". Blocks that don't parse
/// into a valid card are skipped.
pub fn parse_cards(content: &str) -> Vec<CardContent> {
    let mut flashcards = Vec::new();

    let cards: Vec<&str> = content
        .split("\n\n")
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    for card_text in cards {
        if let Some(separator_pos) = card_text.find(" / ") {
            let front = &card_text[..separator_pos];
            let back = &card_text[separator_pos + 3..];
            if let Ok(content) = CardContent::new(front, back) {
                flashcards.push(content);
            }
        }
    }

    flashcards
}
