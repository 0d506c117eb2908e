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

use crate::sm2::DEFAULT_EASE_FACTOR;
use crate::types::date::Date;

/// Represents scheduling state for a card.
#[derive(Clone, PartialEq, Debug)]
pub enum Performance {
    /// The card is new, and has never been reviewed.
    New,
    /// The card has been reviewed at least once.
    Reviewed(ReviewedPerformance),
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ReviewedPerformance {
    /// The date of the most recent review.
    pub last_reviewed: Date,
    /// The number of consecutive successful reviews since the last failure.
    pub repetitions: u32,
    /// The multiplier governing interval growth.
    pub ease_factor: f64,
    /// Days from the last review until the card comes due again.
    pub interval_days: u32,
}

impl Performance {
    pub fn last_reviewed(&self) -> Option<Date> {
        match self {
            Performance::New => None,
            Performance::Reviewed(p) => Some(p.last_reviewed),
        }
    }

    pub fn repetitions(&self) -> u32 {
        match self {
            Performance::New => 0,
            Performance::Reviewed(p) => p.repetitions,
        }
    }

    pub fn ease_factor(&self) -> f64 {
        match self {
            Performance::New => DEFAULT_EASE_FACTOR,
            Performance::Reviewed(p) => p.ease_factor,
        }
    }

    pub fn interval_days(&self) -> u32 {
        match self {
            Performance::New => 0,
            Performance::Reviewed(p) => p.interval_days,
        }
    }

    /// Whether the card should be shown on `as_of`. A new card is always
    /// due; a reviewed card comes due on the boundary day and stays due
    /// after it.
    pub fn is_due(&self, as_of: Date) -> bool {
        match self {
            Performance::New => true,
            Performance::Reviewed(p) => p.due_date() <= as_of,
        }
    }
}

impl ReviewedPerformance {
    pub fn due_date(&self) -> Date {
        self.last_reviewed.plus_days(self.interval_days)
    }
}
