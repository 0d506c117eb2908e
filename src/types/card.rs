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

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::types::card_id::CardId;
use crate::types::date::Date;
use crate::types::performance::Performance;

#[derive(Clone, Debug)]
pub struct Card {
    /// The identity the store assigned when the card was created.
    id: CardId,
    /// The card's content.
    content: CardContent,
    /// The card's scheduling state.
    performance: Performance,
}

/// The two faces of a card. Both sides are trimmed and non-empty, and
/// neither changes after creation.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct CardContent {
    front: String,
    back: String,
}

impl Card {
    pub fn new(id: CardId, content: CardContent, performance: Performance) -> Self {
        Self {
            id,
            content,
            performance,
        }
    }

    pub fn id(&self) -> CardId {
        self.id
    }

    pub fn content(&self) -> &CardContent {
        &self.content
    }

    pub fn performance(&self) -> &Performance {
        &self.performance
    }

    pub fn last_reviewed(&self) -> Option<Date> {
        self.performance.last_reviewed()
    }

    pub fn is_due(&self, as_of: Date) -> bool {
        self.performance.is_due(as_of)
    }
}

impl CardContent {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Fallible<Self> {
        let front = front.into().trim().to_string();
        let back = back.into().trim().to_string();
        if front.is_empty() {
            return Err(ErrorReport::invalid_input("card front must not be empty"));
        }
        if back.is_empty() {
            return Err(ErrorReport::invalid_input("card back must not be empty"));
        }
        Ok(Self { front, back })
    }

    pub fn front(&self) -> &str {
        &self.front
    }

    pub fn back(&self) -> &str {
        &self.back
    }
}
