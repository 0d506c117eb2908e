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

use crate::collection::Collection;
use crate::due::select_due;
use crate::error::Fallible;
use crate::types::date::Date;
use crate::types::performance::Performance;

/// List the cards due for review today, oldest first.
pub fn print_due_cards(directory: Option<String>, limit: Option<usize>) -> Fallible<()> {
    let coll = Collection::new(directory)?;
    let limit = limit.unwrap_or(coll.config.review_limit);
    let cards = coll.db.all_cards()?;
    let due = select_due(cards, Date::today(), limit);
    if due.is_empty() {
        println!("No cards due.");
        return Ok(());
    }
    for card in &due {
        match card.performance() {
            Performance::New => println!("{}\t{}\t(new)", card.id(), card.content().front()),
            Performance::Reviewed(p) => println!(
                "{}\t{}\t(due {})",
                card.id(),
                card.content().front(),
                p.due_date()
            ),
        }
    }
    Ok(())
}
