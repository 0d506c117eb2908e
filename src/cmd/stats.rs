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

use std::fmt::Display;
use std::fmt::Formatter;

use clap::ValueEnum;
use serde::Serialize;

use crate::collection::Collection;
use crate::due::select_due;
use crate::error::Fallible;
use crate::types::date::Date;

#[derive(ValueEnum, Clone)]
pub enum StatsFormat {
    /// Plain text output.
    Text,
    /// JSON output.
    Json,
}

impl Display for StatsFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsFormat::Text => write!(f, "text"),
            StatsFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Stats {
    card_count: usize,
    new_count: usize,
    due_count: usize,
    today_review_count: usize,
}

pub fn print_stats(directory: Option<String>, format: StatsFormat) -> Fallible<()> {
    let coll = Collection::new(directory)?;
    let today = Date::today();
    let stats = get_stats(&coll, today)?;
    match format {
        StatsFormat::Text => {
            println!("cards:         {}", stats.card_count);
            println!("new:           {}", stats.new_count);
            println!("due today:     {}", stats.due_count);
            println!("reviews today: {}", stats.today_review_count);
        }
        StatsFormat::Json => {
            let json = serde_json::to_string_pretty(&stats)?;
            println!("{json}");
        }
    }
    Ok(())
}

fn get_stats(coll: &Collection, today: Date) -> Fallible<Stats> {
    let cards = coll.db.all_cards()?;
    let new_count = cards
        .iter()
        .filter(|card| card.last_reviewed().is_none())
        .count();
    let due_count = select_due(cards, today, usize::MAX).len();
    Ok(Stats {
        card_count: coll.db.card_count()?,
        new_count,
        due_count,
        today_review_count: coll.db.review_count_on(today)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::tempdir;

    use crate::sm2::Quality;
    use crate::types::card::CardContent;

    #[test]
    fn test_stats_counts() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().display().to_string();
        let mut coll = Collection::new(Some(path))?;
        let today = Date::parse("2026-03-09")?;
        let a = coll.db.insert_card(&CardContent::new("a", "1")?)?;
        coll.db.insert_card(&CardContent::new("b", "2")?)?;
        coll.db.review_card(a.id(), Quality::new(5)?, today)?;
        let stats = get_stats(&coll, today)?;
        assert_eq!(stats.card_count, 2);
        assert_eq!(stats.new_count, 1);
        // Card a was just reviewed with a one day interval; only b is due.
        assert_eq!(stats.due_count, 1);
        assert_eq!(stats.today_review_count, 1);
        Ok(())
    }
}
