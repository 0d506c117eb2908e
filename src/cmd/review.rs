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

use std::io::BufRead;

use crate::collection::Collection;
use crate::due::select_due;
use crate::error::Fallible;
use crate::session::ReviewSession;
use crate::sm2::Quality;
use crate::types::date::Date;

enum Action {
    Grade(Quality),
    Skip,
    Quit,
}

/// Review due cards at the terminal: show the front, reveal the back on
/// enter, then read a quality. Grading a card records the review and drops
/// it from the session; skipping keeps it for later in the same session.
pub fn review_cards(directory: Option<String>, limit: Option<usize>) -> Fallible<()> {
    let mut coll = Collection::new(directory)?;
    let today = Date::today();
    let limit = limit.unwrap_or(coll.config.review_limit);
    let cards = coll.db.all_cards()?;
    let due = select_due(cards, today, limit);
    if due.is_empty() {
        println!("No cards due.");
        return Ok(());
    }
    println!("{} cards to review.", due.len());
    let mut session = ReviewSession::new(due);
    while let Some(card) = session.current().cloned() {
        println!();
        println!("Q: {}", card.content().front());
        println!("[press enter to reveal]");
        wait_for_enter()?;
        println!("A: {}", card.content().back());
        match read_action(&mut std::io::stdin().lock())? {
            Action::Grade(quality) => {
                coll.db.review_card(card.id(), quality, today)?;
                session.complete();
            }
            Action::Skip => session.defer(),
            Action::Quit => break,
        }
    }
    println!();
    if session.is_finished() {
        println!("Session complete.");
    } else {
        println!("Session ended with {} cards left.", session.remaining());
    }
    Ok(())
}

fn wait_for_enter() -> Fallible<()> {
    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(())
}

fn read_action(input: &mut impl BufRead) -> Fallible<Action> {
    loop {
        println!(
            "Quality: (0 = blank, 1 = wrong, 2 = almost, 3 = hard, 4 = good, 5 = easy; s = skip, q = quit)"
        );
        let mut line = String::new();
        // A read of zero bytes means the input is closed.
        if input.read_line(&mut line)? == 0 {
            return Ok(Action::Quit);
        }
        match line.trim() {
            "s" => return Ok(Action::Skip),
            "q" => return Ok(Action::Quit),
            other => match other.parse::<i64>().map(Quality::new) {
                Ok(Ok(quality)) => return Ok(Action::Grade(quality)),
                _ => println!("Invalid input. Please enter a number between 0 and 5."),
            },
        }
    }
}
