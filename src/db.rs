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

use rusqlite::Connection;
use rusqlite::Row;
use rusqlite::Transaction;
use rusqlite::config::DbConfig;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::sm2::Quality;
use crate::types::card::Card;
use crate::types::card::CardContent;
use crate::types::card_id::CardId;
use crate::types::date::Date;
use crate::types::performance::Performance;
use crate::types::performance::ReviewedPerformance;
use crate::types::review::update_card;

pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at the given path, creating the schema on first
    /// use. Pass `:memory:` for a throwaway in-memory database.
    pub fn new(database_path: &str) -> Fallible<Self> {
        let mut conn = Connection::open(database_path)?;
        conn.set_db_config(DbConfig::SQLITE_DBCONFIG_ENABLE_FKEY, true)?;
        {
            let tx = conn.transaction()?;
            if !probe_schema_exists(&tx)? {
                tx.execute_batch(include_str!("schema.sql"))?;
                tx.commit()?;
            }
        }
        Ok(Self { conn })
    }

    /// Add a new card. The store assigns the id; scheduling fields start
    /// at their defaults.
    pub fn insert_card(&mut self, content: &CardContent) -> Fallible<Card> {
        let tx = self.conn.transaction()?;
        let card = insert_card(&tx, content)?;
        tx.commit()?;
        log::debug!("Added card {}.", card.id());
        Ok(card)
    }

    #[cfg(test)]
    pub fn get_card(&self, id: CardId) -> Fallible<Card> {
        get_card(&self.conn, id)
    }

    pub fn all_cards(&self) -> Fallible<Vec<Card>> {
        let sql = "select card_id, front, back, repetitions, ease_factor, interval_days, last_reviewed from cards order by card_id;";
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query([])?;
        let mut cards = Vec::new();
        while let Some(row) = rows.next()? {
            cards.push(card_from_row(row)?);
        }
        Ok(cards)
    }

    pub fn card_count(&self) -> Fallible<usize> {
        let sql = "select count(*) from cards;";
        let count: i64 = self.conn.query_row(sql, [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Record a review: load the card, run the scheduler, and write both
    /// the updated card and a row in the review log. The whole
    /// read-compute-write happens in one transaction, so a failed call
    /// writes nothing.
    pub fn review_card(&mut self, id: CardId, quality: Quality, today: Date) -> Fallible<Card> {
        let tx = self.conn.transaction()?;
        let card = get_card(&tx, id)?;
        let performance = update_card(card.performance(), quality, today);
        update_card_row(&tx, id, &performance)?;
        insert_review(
            &tx,
            &InsertReview {
                card_id: id,
                reviewed_on: today,
                quality,
                performance,
            },
        )?;
        tx.commit()?;
        log::debug!(
            "Reviewed card {} q={} ease={:.2} interval={}d due={}.",
            id,
            quality,
            performance.ease_factor,
            performance.interval_days,
            performance.due_date()
        );
        Ok(Card::new(
            id,
            card.content().clone(),
            Performance::Reviewed(performance),
        ))
    }

    pub fn review_count_on(&self, date: Date) -> Fallible<usize> {
        let sql = "select count(*) from reviews where reviewed_on = ?;";
        let count: i64 = self.conn.query_row(sql, [date], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Every review ever recorded, oldest first.
    pub fn all_reviews(&self) -> Fallible<Vec<ReviewRow>> {
        let sql = "select card_id, reviewed_on, quality, repetitions, ease_factor, interval_days from reviews order by review_id;";
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query([])?;
        let mut reviews = Vec::new();
        while let Some(row) = rows.next()? {
            reviews.push(ReviewRow {
                card_id: row.get(0)?,
                reviewed_on: row.get(1)?,
                quality: row.get(2)?,
                repetitions: row.get(3)?,
                ease_factor: row.get(4)?,
                interval_days: row.get(5)?,
            });
        }
        Ok(reviews)
    }
}

/// One row of the append-only review log.
pub struct ReviewRow {
    pub card_id: CardId,
    pub reviewed_on: Date,
    pub quality: Quality,
    pub repetitions: u32,
    pub ease_factor: f64,
    pub interval_days: u32,
}

fn insert_card(tx: &Transaction, content: &CardContent) -> Fallible<Card> {
    let sql = "insert into cards (front, back) values (?, ?) returning card_id;";
    let card_id: CardId = tx.query_row(sql, (content.front(), content.back()), |row| row.get(0))?;
    Ok(Card::new(card_id, content.clone(), Performance::New))
}

fn get_card(conn: &Connection, id: CardId) -> Fallible<Card> {
    let sql = "select card_id, front, back, repetitions, ease_factor, interval_days, last_reviewed from cards where card_id = ?;";
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query([id])?;
    match rows.next()? {
        Some(row) => card_from_row(row),
        None => Err(ErrorReport::not_found(format!("no card with id {id}"))),
    }
}

fn card_from_row(row: &Row) -> Fallible<Card> {
    let id: CardId = row.get(0)?;
    let front: String = row.get(1)?;
    let back: String = row.get(2)?;
    let repetitions: u32 = row.get(3)?;
    let ease_factor: f64 = row.get(4)?;
    let interval_days: u32 = row.get(5)?;
    let last_reviewed: Option<Date> = row.get(6)?;
    let performance = match last_reviewed {
        None => Performance::New,
        Some(last_reviewed) => Performance::Reviewed(ReviewedPerformance {
            last_reviewed,
            repetitions,
            ease_factor,
            interval_days,
        }),
    };
    let content = CardContent::new(front, back)?;
    Ok(Card::new(id, content, performance))
}

fn update_card_row(
    tx: &Transaction,
    id: CardId,
    performance: &ReviewedPerformance,
) -> Fallible<()> {
    let sql = "update cards set repetitions = ?, ease_factor = ?, interval_days = ?, last_reviewed = ? where card_id = ?;";
    tx.execute(
        sql,
        (
            performance.repetitions,
            performance.ease_factor,
            performance.interval_days,
            performance.last_reviewed,
            id,
        ),
    )?;
    Ok(())
}

struct InsertReview {
    card_id: CardId,
    reviewed_on: Date,
    quality: Quality,
    performance: ReviewedPerformance,
}

type ReviewId = i64;

fn insert_review(tx: &Transaction, review: &InsertReview) -> Fallible<ReviewId> {
    let sql = "insert into reviews (card_id, reviewed_on, quality, repetitions, ease_factor, interval_days) values (?, ?, ?, ?, ?, ?) returning review_id;";
    let review_id: ReviewId = tx.query_row(
        sql,
        (
            review.card_id,
            review.reviewed_on,
            review.quality,
            review.performance.repetitions,
            review.performance.ease_factor,
            review.performance.interval_days,
        ),
        |row| row.get(0),
    )?;
    Ok(review_id)
}

fn probe_schema_exists(tx: &Transaction) -> Fallible<bool> {
    let sql = "select count(*) from sqlite_master where type='table' AND name=?;";
    let count: i64 = tx.query_row(sql, ["cards"], |row| row.get(0))?;
    Ok(count > 0)
}
