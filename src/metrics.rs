//! Accuracy and Mastery Scoring
//!
//! Pure arithmetic over attempt counters. All functions are total: no
//! panics, no validation of caller-supplied counters.

/// Streak bonus: 2 points per consecutive correct answer, capped at 10.
pub const STREAK_BONUS_PER_CORRECT: u32 = 2;
pub const STREAK_BONUS_CAP: u32 = 10;

/// Speed bonus: flat 5 points when the running average response time
/// stays at or under 10 seconds.
pub const SPEED_BONUS: f64 = 5.0;
pub const SPEED_BONUS_THRESHOLD_MS: f64 = 10_000.0;

/// Review-frequency bonus: 0.5 points per review, capped at 5.
pub const REVIEW_BONUS_PER_REVIEW: f64 = 0.5;
pub const REVIEW_BONUS_CAP: f64 = 5.0;

/// Percentage of attempts that were correct, rounded to the nearest
/// integer. Zero attempts yields 0, not a division error.
pub fn calculate_accuracy(correct_attempts: u32, total_attempts: u32) -> u32 {
    if total_attempts == 0 {
        return 0;
    }
    ((100.0 * correct_attempts as f64) / total_attempts as f64).round() as u32
}

/// Composite 0-100 score: accuracy plus capped bonuses for streak, speed
/// and review frequency. Each bonus is capped individually so no single
/// factor can dominate the score.
pub fn calculate_mastery_score(
    accuracy: u32,
    consecutive_correct: u32,
    avg_response_time_ms: f64,
    review_count: u32,
) -> u32 {
    let streak_bonus = consecutive_correct
        .saturating_mul(STREAK_BONUS_PER_CORRECT)
        .min(STREAK_BONUS_CAP) as f64;
    let speed_bonus = if avg_response_time_ms <= SPEED_BONUS_THRESHOLD_MS {
        SPEED_BONUS
    } else {
        0.0
    };
    let review_bonus = (review_count as f64 * REVIEW_BONUS_PER_REVIEW).min(REVIEW_BONUS_CAP);

    let score = accuracy as f64 + streak_bonus + speed_bonus + review_bonus;
    score.round().min(100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accuracy_zero_attempts() {
        assert_eq!(calculate_accuracy(0, 0), 0);
    }

    #[test]
    fn accuracy_rounds_to_nearest() {
        assert_eq!(calculate_accuracy(3, 10), 30);
        assert_eq!(calculate_accuracy(1, 3), 33);
        assert_eq!(calculate_accuracy(2, 3), 67);
    }

    #[test]
    fn accuracy_all_correct_is_100() {
        for total in [1, 7, 500] {
            assert_eq!(calculate_accuracy(total, total), 100);
        }
    }

    #[test]
    fn mastery_caps_each_bonus() {
        // streak bonus saturates at 10 regardless of streak length
        let base = calculate_mastery_score(50, 5, 20_000.0, 0);
        assert_eq!(base, 60);
        assert_eq!(calculate_mastery_score(50, 50, 20_000.0, 0), 60);

        // review bonus saturates at 5
        assert_eq!(calculate_mastery_score(50, 0, 20_000.0, 10), 55);
        assert_eq!(calculate_mastery_score(50, 0, 20_000.0, 100), 55);
    }

    #[test]
    fn mastery_speed_bonus_threshold() {
        assert_eq!(calculate_mastery_score(50, 0, 10_000.0, 0), 55);
        assert_eq!(calculate_mastery_score(50, 0, 10_001.0, 0), 50);
    }

    #[test]
    fn mastery_never_exceeds_100() {
        assert_eq!(calculate_mastery_score(100, 50, 1_000.0, 100), 100);
        assert_eq!(calculate_mastery_score(95, 10, 1_000.0, 20), 100);
    }
}
