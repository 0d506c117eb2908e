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

use crate::sm2::Quality;
use crate::sm2::next_ease_factor;
use crate::sm2::next_interval;
use crate::types::date::Date;
use crate::types::performance::Performance;
use crate::types::performance::ReviewedPerformance;

/// Compute a card's scheduling state after a review. A passing quality
/// grows the interval and counts a repetition; a failing quality resets the
/// repetition count and brings the card back tomorrow, leaving the ease
/// factor as it was. Pure: the caller persists the result.
pub fn update_card(
    performance: &Performance,
    quality: Quality,
    today: Date,
) -> ReviewedPerformance {
    let ease_factor = next_ease_factor(performance.ease_factor(), quality);
    let interval_days = next_interval(
        quality,
        performance.repetitions(),
        performance.interval_days(),
        ease_factor,
    );
    let repetitions = if quality.is_passing() {
        performance.repetitions() + 1
    } else {
        0
    };
    ReviewedPerformance {
        last_reviewed: today,
        repetitions,
        ease_factor,
        interval_days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::sm2::DEFAULT_EASE_FACTOR;
    use crate::sm2::MIN_EASE_FACTOR;

    fn q(value: i64) -> Quality {
        Quality::new(value).unwrap()
    }

    fn d(s: &str) -> Date {
        Date::parse(s).unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_first_review() {
        let today = d("2026-03-09");
        let result = update_card(&Performance::New, q(4), today);
        assert_eq!(result.repetitions, 1);
        assert_eq!(result.interval_days, 1);
        assert_close(result.ease_factor, 2.5);
        assert_eq!(result.last_reviewed, today);
    }

    #[test]
    fn test_second_review() {
        let today = d("2026-03-10");
        let prior = Performance::Reviewed(ReviewedPerformance {
            last_reviewed: d("2026-03-09"),
            repetitions: 1,
            ease_factor: 2.5,
            interval_days: 1,
        });
        let result = update_card(&prior, q(4), today);
        assert_eq!(result.repetitions, 2);
        assert_eq!(result.interval_days, 6);
        assert_close(result.ease_factor, 2.5);
    }

    #[test]
    fn test_third_review_grows_multiplicatively() {
        let today = d("2026-03-16");
        let prior = Performance::Reviewed(ReviewedPerformance {
            last_reviewed: d("2026-03-10"),
            repetitions: 2,
            ease_factor: 2.5,
            interval_days: 6,
        });
        let result = update_card(&prior, q(5), today);
        assert_eq!(result.repetitions, 3);
        assert_close(result.ease_factor, 2.6);
        assert_eq!(result.interval_days, 16);
    }

    #[test]
    fn test_failure_resets_from_any_state() {
        let today = d("2026-04-01");
        let prior = Performance::Reviewed(ReviewedPerformance {
            last_reviewed: d("2026-03-16"),
            repetitions: 3,
            ease_factor: 2.6,
            interval_days: 16,
        });
        let result = update_card(&prior, q(1), today);
        assert_eq!(result.repetitions, 0);
        assert_eq!(result.interval_days, 1);
        assert_eq!(result.ease_factor, 2.6);
        assert_eq!(result.last_reviewed, today);
    }

    #[test]
    fn test_failure_is_idempotent() {
        let first = update_card(
            &Performance::Reviewed(ReviewedPerformance {
                last_reviewed: d("2026-03-01"),
                repetitions: 7,
                ease_factor: 2.1,
                interval_days: 40,
            }),
            q(0),
            d("2026-03-02"),
        );
        let second = update_card(&Performance::Reviewed(first), q(0), d("2026-03-03"));
        assert_eq!(first.repetitions, 0);
        assert_eq!(first.interval_days, 1);
        assert_eq!(second.repetitions, 0);
        assert_eq!(second.interval_days, 1);
        assert_eq!(second.ease_factor, first.ease_factor);
    }

    #[test]
    fn test_failure_on_new_card_keeps_default_ease() {
        let result = update_card(&Performance::New, q(2), d("2026-03-09"));
        assert_eq!(result.repetitions, 0);
        assert_eq!(result.interval_days, 1);
        assert_eq!(result.ease_factor, DEFAULT_EASE_FACTOR);
    }

    #[test]
    fn test_first_pass_after_reset() {
        let prior = Performance::Reviewed(ReviewedPerformance {
            last_reviewed: d("2026-04-01"),
            repetitions: 0,
            ease_factor: 2.6,
            interval_days: 1,
        });
        let result = update_card(&prior, q(4), d("2026-04-02"));
        assert_eq!(result.repetitions, 1);
        assert_eq!(result.interval_days, 1);
    }

    #[test]
    fn test_repetitions_increment_for_every_passing_quality() {
        for value in 3..=5 {
            let prior = Performance::Reviewed(ReviewedPerformance {
                last_reviewed: d("2026-03-01"),
                repetitions: 4,
                ease_factor: 2.0,
                interval_days: 12,
            });
            let result = update_card(&prior, q(value), d("2026-03-09"));
            assert_eq!(result.repetitions, 5);
        }
    }

    #[test]
    fn test_repetitions_reset_for_every_failing_quality() {
        for value in 0..=2 {
            let prior = Performance::Reviewed(ReviewedPerformance {
                last_reviewed: d("2026-03-01"),
                repetitions: 4,
                ease_factor: 2.0,
                interval_days: 12,
            });
            let result = update_card(&prior, q(value), d("2026-03-09"));
            assert_eq!(result.repetitions, 0);
            assert_eq!(result.interval_days, 1);
            assert_eq!(result.ease_factor, 2.0);
        }
    }

    #[test]
    fn test_ease_floor_holds_for_every_quality() {
        for value in 0..=5 {
            let prior = Performance::Reviewed(ReviewedPerformance {
                last_reviewed: d("2026-03-01"),
                repetitions: 5,
                ease_factor: MIN_EASE_FACTOR,
                interval_days: 20,
            });
            let result = update_card(&prior, q(value), d("2026-03-09"));
            assert!(result.ease_factor >= MIN_EASE_FACTOR);
            assert!(result.interval_days >= 1);
        }
    }

    #[test]
    fn test_interval_growth_ordering() {
        let mut intervals = Vec::new();
        for value in 3..=5 {
            let prior = Performance::Reviewed(ReviewedPerformance {
                last_reviewed: d("2026-03-01"),
                repetitions: 2,
                ease_factor: 2.5,
                interval_days: 10,
            });
            let result = update_card(&prior, q(value), d("2026-03-09"));
            intervals.push(result.interval_days);
        }
        assert_eq!(intervals, vec![24, 25, 26]);
    }
}
