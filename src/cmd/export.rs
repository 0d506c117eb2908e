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

use serde::Serialize;

use crate::collection::Collection;
use crate::db::ReviewRow;
use crate::error::Fallible;
use crate::sm2::Quality;
use crate::types::card::Card;
use crate::types::card_id::CardId;
use crate::types::date::Date;
use crate::types::performance::Performance;

/// Dump the collection, cards and review log both, as JSON on stdout.
pub fn export_collection(directory: Option<String>) -> Fallible<()> {
    let coll: Collection = Collection::new(directory)?;
    let export: Export = get_export(&coll)?;
    let json: String = serde_json::to_string_pretty(&export)?;
    println!("{json}");
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Export {
    cards: Vec<CardExport>,
    reviews: Vec<ReviewExport>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CardExport {
    id: CardId,
    front: String,
    back: String,
    performance: Option<PerformanceExport>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PerformanceExport {
    last_reviewed: Date,
    repetitions: u32,
    ease_factor: f64,
    interval_days: u32,
    due_date: Date,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReviewExport {
    card_id: CardId,
    reviewed_on: Date,
    quality: Quality,
    repetitions: u32,
    ease_factor: f64,
    interval_days: u32,
}

fn get_export(coll: &Collection) -> Fallible<Export> {
    let cards: Vec<CardExport> = coll.db.all_cards()?.into_iter().map(card_export).collect();
    let reviews: Vec<ReviewExport> = coll
        .db
        .all_reviews()?
        .into_iter()
        .map(review_export)
        .collect();
    Ok(Export { cards, reviews })
}

fn card_export(card: Card) -> CardExport {
    let performance: Option<PerformanceExport> = match card.performance() {
        Performance::New => None,
        Performance::Reviewed(p) => Some(PerformanceExport {
            last_reviewed: p.last_reviewed,
            repetitions: p.repetitions,
            ease_factor: p.ease_factor,
            interval_days: p.interval_days,
            due_date: p.due_date(),
        }),
    };
    CardExport {
        id: card.id(),
        front: card.content().front().to_owned(),
        back: card.content().back().to_owned(),
        performance,
    }
}

fn review_export(row: ReviewRow) -> ReviewExport {
    ReviewExport {
        card_id: row.card_id,
        reviewed_on: row.reviewed_on,
        quality: row.quality,
        repetitions: row.repetitions,
        ease_factor: row.ease_factor,
        interval_days: row.interval_days,
    }
}
