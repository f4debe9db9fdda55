//! Spaced-Repetition Scheduling
//!
//! Fixed escalating interval schedule indexed by review count, nudged by
//! recent accuracy: struggling words come back sooner, solid words later.
//! Also carries the due-queue helpers (due check, review priority, batch
//! ranking) used by session controllers to pick what to practice next.

use chrono::{DateTime, Duration, Utc};
use rayon::prelude::*;

use crate::types::WordProgress;

/// Escalating review intervals in days.
pub const REVIEW_INTERVAL_DAYS: [i64; 6] = [1, 3, 7, 14, 30, 60];

/// Below this accuracy the interval steps back one notch.
pub const STEP_BACK_ACCURACY: u32 = 70;
/// At or above this accuracy the interval steps forward one notch.
pub const STEP_FORWARD_ACCURACY: u32 = 90;

const FALLBACK_INTERVAL_DAYS: i64 = 1;
const MS_PER_DAY: f64 = 86_400_000.0;
const MAX_OVERDUE_DAYS: f64 = 8.0;

/// Next due date: `last_review` plus the scheduled interval. The index
/// into the schedule is `min(review_count, 5)`, stepped back one (floor 0)
/// when accuracy is under 70 and forward one (cap 5) at 90 or above.
pub fn calculate_next_review_date(
    review_count: u32,
    accuracy: u32,
    last_review: DateTime<Utc>,
) -> DateTime<Utc> {
    let mut index = (review_count as usize).min(REVIEW_INTERVAL_DAYS.len() - 1);
    if accuracy < STEP_BACK_ACCURACY {
        index = index.saturating_sub(1);
    } else if accuracy >= STEP_FORWARD_ACCURACY {
        index = (index + 1).min(REVIEW_INTERVAL_DAYS.len() - 1);
    }

    let days = REVIEW_INTERVAL_DAYS
        .get(index)
        .copied()
        .unwrap_or(FALLBACK_INTERVAL_DAYS);
    last_review + Duration::days(days)
}

/// A word is due when it has a scheduled review date at or before `now`.
/// Words that were never scheduled are not due.
pub fn is_due(progress: &WordProgress, now: DateTime<Utc>) -> bool {
    progress
        .next_review_due
        .is_some_and(|due| due <= now)
}

/// Review priority for the due queue. Overdue days (capped at 8) weigh 5
/// points each, the error rate contributes up to 30 points, and the gap to
/// full mastery contributes up to 30 more.
pub fn review_priority(progress: &WordProgress, now: DateTime<Utc>) -> f64 {
    let overdue_days = progress
        .next_review_due
        .map(|due| ((now - due).num_milliseconds() as f64 / MS_PER_DAY).max(0.0))
        .unwrap_or(0.0);

    let error_rate = if progress.total_attempts > 0 {
        1.0 - progress.correct_attempts as f64 / progress.total_attempts as f64
    } else {
        0.0
    };
    let error_term = if error_rate > 0.5 {
        30.0
    } else {
        error_rate * 60.0
    };

    overdue_days.min(MAX_OVERDUE_DAYS) * 5.0
        + error_term
        + (100.0 - progress.mastery_score as f64) * 0.3
}

/// Filter a batch down to due entries and sort them by priority, highest
/// first. Priority computation runs in parallel.
pub fn rank_due(items: &[WordProgress], now: DateTime<Utc>) -> Vec<(&WordProgress, f64)> {
    let mut ranked: Vec<(&WordProgress, f64)> = items
        .par_iter()
        .filter(|p| is_due(p, now))
        .map(|p| (p, review_priority(p, now)))
        .collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    ranked
}
