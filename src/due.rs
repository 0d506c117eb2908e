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

use crate::types::card::Card;
use crate::types::date::Date;

/// Select the cards to review on `as_of`: every due card, ordered by last
/// review date ascending with never-reviewed cards first, ties broken by
/// id, truncated to `limit`. Pass `usize::MAX` for all due cards.
pub fn select_due(cards: Vec<Card>, as_of: Date, limit: usize) -> Vec<Card> {
    let mut due: Vec<Card> = cards.into_iter().filter(|card| card.is_due(as_of)).collect();
    due.sort_by_key(|card| (card.last_reviewed(), card.id()));
    due.truncate(limit);
    due
}
