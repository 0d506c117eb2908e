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

//! The SM-2 scheduling arithmetic.

use std::fmt::Display;
use std::fmt::Formatter;

use rusqlite::ToSql;
use rusqlite::types::FromSql;
use rusqlite::types::FromSqlError;
use rusqlite::types::FromSqlResult;
use rusqlite::types::ToSqlOutput;
use rusqlite::types::ValueRef;
use serde::Serialize;

use crate::error::ErrorReport;
use crate::error::Fallible;

/// The ease factor a card starts with.
pub const DEFAULT_EASE_FACTOR: f64 = 2.5;

/// The floor below which ease factors never drop. Below this, intervals
/// stop growing and cards get stuck in near-daily review.
pub const MIN_EASE_FACTOR: f64 = 1.3;

/// Every review schedules the card at least one day out.
pub const MIN_INTERVAL_DAYS: u32 = 1;

/// Qualities at or above this count as a successful recall.
const PASSING_QUALITY: u8 = 3;

/// How well a card was recalled, from 0 (no recall at all) to 5 (instant,
/// perfect recall).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Quality(u8);

impl Quality {
    pub fn new(value: i64) -> Fallible<Self> {
        if (0..=5).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ErrorReport::invalid_input(format!(
                "quality must be an integer between 0 and 5, got {value}"
            )))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Whether the review counts as a successful recall.
    pub fn is_passing(self) -> bool {
        self.0 >= PASSING_QUALITY
    }
}

impl Display for Quality {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ToSql for Quality {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.0 as i64))
    }
}

impl FromSql for Quality {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let value: i64 = FromSql::column_result(value)?;
        Quality::new(value).map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

impl Serialize for Quality {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.0)
    }
}

/// The ease factor after a review. A failed review leaves the ease factor
/// untouched; a passing review adjusts it by the SM-2 formula and clamps it
/// to the floor.
pub fn next_ease_factor(ease_factor: f64, quality: Quality) -> f64 {
    if !quality.is_passing() {
        return ease_factor;
    }
    let q = quality.value() as f64;
    let ease_factor = ease_factor + (0.1 - (5.0 - q) * (0.08 + (5.0 - q) * 0.02));
    ease_factor.max(MIN_EASE_FACTOR)
}

/// The next interval in days. A failed review brings the card back
/// tomorrow. A passing review keys on the repetition count before this
/// review is counted: the first pass gives one day, the second six, and
/// later passes multiply the current interval by the ease factor after
/// this review.
pub fn next_interval(
    quality: Quality,
    repetitions: u32,
    interval_days: u32,
    ease_factor: f64,
) -> u32 {
    if !quality.is_passing() {
        return MIN_INTERVAL_DAYS;
    }
    match repetitions {
        0 => 1,
        1 => 6,
        _ => ((interval_days as f64) * ease_factor).round() as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::ErrorKind;

    fn q(value: i64) -> Quality {
        Quality::new(value).unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_quality_range() {
        for value in 0..=5 {
            assert!(Quality::new(value).is_ok());
        }
        for value in [-1, 6, 100] {
            let result = Quality::new(value);
            assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidInput);
        }
    }

    #[test]
    fn test_quality_passing() {
        assert!(!q(0).is_passing());
        assert!(!q(2).is_passing());
        assert!(q(3).is_passing());
        assert!(q(5).is_passing());
    }

    #[test]
    fn test_quality_display() {
        assert_eq!(q(4).to_string(), "4");
    }

    #[test]
    fn test_ease_factor_formula() {
        assert_close(next_ease_factor(2.5, q(5)), 2.6);
        assert_close(next_ease_factor(2.5, q(4)), 2.5);
        assert_close(next_ease_factor(2.5, q(3)), 2.36);
    }

    #[test]
    fn test_ease_factor_floor() {
        assert_eq!(next_ease_factor(1.3, q(3)), 1.3);
        assert_eq!(next_ease_factor(1.35, q(3)), 1.3);
    }

    #[test]
    fn test_ease_factor_untouched_on_failure() {
        assert_eq!(next_ease_factor(2.2, q(0)), 2.2);
        assert_eq!(next_ease_factor(2.2, q(1)), 2.2);
        assert_eq!(next_ease_factor(2.2, q(2)), 2.2);
    }

    #[test]
    fn test_ease_factor_monotonic_in_quality() {
        let e3 = next_ease_factor(2.5, q(3));
        let e4 = next_ease_factor(2.5, q(4));
        let e5 = next_ease_factor(2.5, q(5));
        assert!(e3 < e4);
        assert!(e4 < e5);
    }

    #[test]
    fn test_interval_first_pass() {
        assert_eq!(next_interval(q(4), 0, 0, 2.5), 1);
    }

    #[test]
    fn test_interval_second_pass() {
        assert_eq!(next_interval(q(4), 1, 1, 2.5), 6);
    }

    #[test]
    fn test_interval_growth() {
        assert_eq!(next_interval(q(4), 2, 6, 2.5), 15);
        assert_eq!(next_interval(q(5), 2, 6, 2.6), 16);
        assert_eq!(next_interval(q(5), 5, 10, 2.6), 26);
    }

    #[test]
    fn test_interval_on_failure() {
        assert_eq!(next_interval(q(0), 5, 30, 2.5), 1);
        assert_eq!(next_interval(q(2), 1, 6, 2.5), 1);
    }
}
