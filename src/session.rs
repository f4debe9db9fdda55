//! Attempt Application
//!
//! Folds one practice attempt into a word's progress record. Pure: takes
//! the current record plus the attempt, returns the updated record and the
//! per-attempt feedback for the UI. The caller persists the result.

use tracing::debug;

use crate::metrics::{calculate_accuracy, calculate_mastery_score};
use crate::schedule::calculate_next_review_date;
use crate::status::determine_learning_status;
use crate::types::{AttemptRecord, WordProgress};
use crate::typing::{check_typing, TypingJudgment, TypingOptions};

/// Apply a single attempt to a progress record.
///
/// Counters update first (streak resets on a miss), then mastery score and
/// status are recomputed from the counters so the stored status can never
/// drift from them. The next review date is scheduled from the attempt
/// timestamp using the review count prior to this attempt, so a word's
/// first review starts at the bottom of the interval schedule.
pub fn apply_attempt(
    progress: &WordProgress,
    attempt: &AttemptRecord,
    options: &TypingOptions,
) -> (WordProgress, TypingJudgment) {
    let feedback = check_typing(&attempt.user_input, &attempt.target_word, options);

    let mut next = progress.clone();
    next.total_attempts = next.total_attempts.saturating_add(1);
    if feedback.is_correct {
        next.correct_attempts = next.correct_attempts.saturating_add(1);
        next.consecutive_correct = next.consecutive_correct.saturating_add(1);
    } else {
        next.consecutive_correct = 0;
    }
    next.average_response_time_ms = running_mean(
        progress.average_response_time_ms,
        progress.total_attempts,
        attempt.response_time_ms,
    );
    next.review_count = next.review_count.saturating_add(1);

    let accuracy = calculate_accuracy(next.correct_attempts, next.total_attempts);
    next.mastery_score = calculate_mastery_score(
        accuracy,
        next.consecutive_correct,
        next.average_response_time_ms,
        next.review_count,
    );
    next.learning_status = determine_learning_status(
        next.correct_attempts,
        next.total_attempts,
        next.consecutive_correct,
        next.mastery_score,
    );
    next.last_reviewed_at = Some(attempt.at);
    next.next_review_due = Some(calculate_next_review_date(
        progress.review_count,
        accuracy,
        attempt.at,
    ));

    if next.learning_status != progress.learning_status {
        debug!(
            target_word = %attempt.target_word,
            from = ?progress.learning_status,
            to = ?next.learning_status,
            mastery_score = next.mastery_score,
            "learning status changed"
        );
    }

    (next, feedback)
}

fn running_mean(mean_ms: f64, count: u32, sample_ms: i64) -> f64 {
    let n = count as f64;
    (mean_ms * n + sample_ms as f64) / (n + 1.0)
}
