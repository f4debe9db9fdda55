//! Learning Status Decision List
//!
//! Ordered rules mapping attempt counters to a [`LearningStatus`]. The
//! order is load-bearing: both learned rules are checked before the
//! difficult rule, so a word that clears a learned threshold is never
//! reported as difficult no matter how many attempts it took to get there.

use crate::metrics::calculate_accuracy;
use crate::types::LearningStatus;

/// Rule 1: top-tier mastery path.
pub const LEARNED_MASTERY_SCORE: u32 = 85;
pub const LEARNED_MASTERY_STREAK: u32 = 5;

/// Rule 2: standard learned path.
pub const LEARNED_MIN_CORRECT: u32 = 3;
pub const LEARNED_MIN_ACCURACY: u32 = 80;
pub const LEARNED_MIN_STREAK: u32 = 2;

/// Rule 3: difficult thresholds.
pub const DIFFICULT_WRONG_ATTEMPTS: u32 = 3;
pub const DIFFICULT_ACCURACY_CEILING: u32 = 40;

/// First matching rule wins. Pure function of the counters: repeated calls
/// with the same inputs always return the same status.
pub fn determine_learning_status(
    correct_attempts: u32,
    total_attempts: u32,
    consecutive_correct: u32,
    mastery_score: u32,
) -> LearningStatus {
    let accuracy = calculate_accuracy(correct_attempts, total_attempts);

    if mastery_score >= LEARNED_MASTERY_SCORE && consecutive_correct >= LEARNED_MASTERY_STREAK {
        return LearningStatus::Learned;
    }
    if correct_attempts >= LEARNED_MIN_CORRECT
        && accuracy >= LEARNED_MIN_ACCURACY
        && consecutive_correct >= LEARNED_MIN_STREAK
    {
        return LearningStatus::Learned;
    }
    // the accuracy ceiling only applies once there is at least one attempt;
    // untouched words fall through to NotStarted
    if total_attempts.saturating_sub(correct_attempts) >= DIFFICULT_WRONG_ATTEMPTS
        || (total_attempts > 0 && accuracy <= DIFFICULT_ACCURACY_CEILING)
    {
        return LearningStatus::Difficult;
    }
    if total_attempts > 0 {
        return LearningStatus::InProgress;
    }
    LearningStatus::NotStarted
}
