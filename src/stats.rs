//! Batch Aggregation
//!
//! Summary statistics over a user's progress records, for dashboards and
//! study-queue sizing. Aggregation runs in parallel.

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::Serialize;

use crate::schedule::is_due;
use crate::types::{LearningStatus, WordProgress};

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressStats {
    /// Mean mastery score over all records, 0 when empty
    pub average_mastery: f64,
    pub learned_count: u64,
    pub in_progress_count: u64,
    pub difficult_count: u64,
    pub not_started_count: u64,
    /// Records with a scheduled review at or before `now`
    pub due_count: u64,
}

#[derive(Clone, Copy, Default)]
struct Partial {
    mastery_sum: u64,
    learned: u64,
    in_progress: u64,
    difficult: u64,
    not_started: u64,
    due: u64,
}

impl Partial {
    fn merge(self, other: Partial) -> Partial {
        Partial {
            mastery_sum: self.mastery_sum + other.mastery_sum,
            learned: self.learned + other.learned,
            in_progress: self.in_progress + other.in_progress,
            difficult: self.difficult + other.difficult,
            not_started: self.not_started + other.not_started,
            due: self.due + other.due,
        }
    }

    fn add(mut self, progress: &WordProgress, now: DateTime<Utc>) -> Partial {
        self.mastery_sum += progress.mastery_score as u64;
        match progress.learning_status {
            LearningStatus::Learned => self.learned += 1,
            LearningStatus::InProgress => self.in_progress += 1,
            LearningStatus::Difficult => self.difficult += 1,
            LearningStatus::NotStarted => self.not_started += 1,
        }
        if is_due(progress, now) {
            self.due += 1;
        }
        self
    }
}

/// Aggregate a batch of progress records into dashboard statistics.
pub fn aggregate(items: &[WordProgress], now: DateTime<Utc>) -> ProgressStats {
    let partial = items
        .par_iter()
        .fold(Partial::default, |acc, p| acc.add(p, now))
        .reduce(Partial::default, Partial::merge);

    let average_mastery = if items.is_empty() {
        0.0
    } else {
        partial.mastery_sum as f64 / items.len() as f64
    };

    ProgressStats {
        average_mastery,
        learned_count: partial.learned,
        in_progress_count: partial.in_progress,
        difficult_count: partial.difficult,
        not_started_count: partial.not_started,
        due_count: partial.due,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn with_status(status: LearningStatus, mastery: u32) -> WordProgress {
        WordProgress {
            learning_status: status,
            mastery_score: mastery,
            ..Default::default()
        }
    }

    #[test]
    fn empty_batch() {
        let stats = aggregate(&[], now());
        assert_eq!(stats, ProgressStats::default());
    }

    #[test]
    fn counts_per_status() {
        let items = vec![
            with_status(LearningStatus::Learned, 90),
            with_status(LearningStatus::Learned, 100),
            with_status(LearningStatus::Difficult, 20),
            with_status(LearningStatus::InProgress, 50),
            with_status(LearningStatus::NotStarted, 0),
        ];
        let stats = aggregate(&items, now());
        assert_eq!(stats.learned_count, 2);
        assert_eq!(stats.difficult_count, 1);
        assert_eq!(stats.in_progress_count, 1);
        assert_eq!(stats.not_started_count, 1);
        assert!((stats.average_mastery - 52.0).abs() < f64::EPSILON);
    }

    #[test]
    fn due_count_checks_schedule() {
        let mut due = with_status(LearningStatus::InProgress, 40);
        due.next_review_due = Some(now() - Duration::days(1));
        let mut not_due = with_status(LearningStatus::InProgress, 40);
        not_due.next_review_due = Some(now() + Duration::days(1));
        let unscheduled = with_status(LearningStatus::NotStarted, 0);

        let stats = aggregate(&[due, not_due, unscheduled], now());
        assert_eq!(stats.due_count, 1);
    }
}
