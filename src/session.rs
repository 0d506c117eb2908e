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

/// A review session: the cards picked for review, in order, plus a cursor
/// pointing at the card currently shown. The session never talks to the
/// scheduler or the store; the caller records reviews and tells the session
/// what happened.
pub struct ReviewSession {
    cards: Vec<Card>,
    cursor: usize,
}

impl ReviewSession {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards, cursor: 0 }
    }

    /// The card currently shown, or None once the session is finished.
    pub fn current(&self) -> Option<&Card> {
        self.cards.get(self.cursor)
    }

    /// Drop the current card after its review was recorded. The next card
    /// slides under the cursor; past the end, the cursor wraps to the
    /// front.
    pub fn complete(&mut self) {
        if self.cursor < self.cards.len() {
            self.cards.remove(self.cursor);
        }
        if self.cursor >= self.cards.len() {
            self.cursor = 0;
        }
    }

    /// Move past the current card without reviewing it. The card stays in
    /// the session and comes around again.
    pub fn defer(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.cards.len();
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_finished(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::Fallible;
    use crate::types::card::CardContent;
    use crate::types::card_id::CardId;
    use crate::types::performance::Performance;

    fn card(id: i64) -> Card {
        let content = CardContent::new(format!("front {id}"), format!("back {id}")).unwrap();
        Card::new(CardId::new(id), content, Performance::New)
    }

    fn session() -> ReviewSession {
        ReviewSession::new(vec![card(1), card(2), card(3)])
    }

    fn current_id(session: &ReviewSession) -> Option<i64> {
        session.current().map(|card| card.id().into_inner())
    }

    #[test]
    fn test_empty_session_is_finished() {
        let session = ReviewSession::new(Vec::new());
        assert!(session.is_finished());
        assert!(session.current().is_none());
        assert_eq!(session.remaining(), 0);
    }

    #[test]
    fn test_complete_slides_next_card_under_cursor() {
        let mut session = session();
        assert_eq!(current_id(&session), Some(1));
        session.complete();
        assert_eq!(current_id(&session), Some(2));
        assert_eq!(session.remaining(), 2);
    }

    #[test]
    fn test_complete_at_tail_wraps() {
        let mut session = session();
        session.defer();
        session.defer();
        assert_eq!(current_id(&session), Some(3));
        session.complete();
        assert_eq!(current_id(&session), Some(1));
    }

    #[test]
    fn test_defer_cycles_through_cards() {
        let mut session = session();
        session.defer();
        assert_eq!(current_id(&session), Some(2));
        session.defer();
        assert_eq!(current_id(&session), Some(3));
        session.defer();
        assert_eq!(current_id(&session), Some(1));
        assert_eq!(session.remaining(), 3);
    }

    #[test]
    fn test_defer_single_card() {
        let mut session = ReviewSession::new(vec![card(1)]);
        session.defer();
        assert_eq!(current_id(&session), Some(1));
    }

    #[test]
    fn test_completing_every_card_finishes_the_session() -> Fallible<()> {
        let mut session = session();
        session.complete();
        session.complete();
        session.complete();
        assert!(session.is_finished());
        assert!(session.current().is_none());
        session.complete();
        assert!(session.is_finished());
        Ok(())
    }
}
