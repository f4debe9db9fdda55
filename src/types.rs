//! Common Types and Constants
//!
//! Shared data structures used across all engine modules. Persisted records
//! serialize with camelCase field names for the JS frontend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==================== Learning Status ====================

/// Per-word learning status, always re-derivable from the counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LearningStatus {
    /// No attempts recorded yet
    #[default]
    NotStarted,
    /// Attempted but below every learned threshold
    InProgress,
    /// Repeated misses or low accuracy
    Difficult,
    /// Cleared one of the learned rules
    Learned,
}

// ==================== Records ====================

/// One practice interaction, supplied by the session controller.
///
/// Correctness is derived from the input/target pair, never stored here.
/// `at` is the caller's clock so the engine stays free of wall-clock reads.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptRecord {
    pub user_input: String,
    pub target_word: String,
    pub response_time_ms: i64,
    pub at: DateTime<Utc>,
}

/// Per-user-per-word progress counters, owned by the persistence layer.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordProgress {
    pub correct_attempts: u32,
    pub total_attempts: u32,
    /// Reset to 0 on any incorrect attempt
    pub consecutive_correct: u32,
    /// Composite score in 0-100
    pub mastery_score: u32,
    pub review_count: u32,
    /// Cumulative mean over all attempts, feeds the mastery speed bonus
    pub average_response_time_ms: f64,
    pub last_reviewed_at: Option<DateTime<Utc>>,
    pub next_review_due: Option<DateTime<Utc>>,
    pub learning_status: LearningStatus,
}

impl Default for WordProgress {
    fn default() -> Self {
        Self {
            correct_attempts: 0,
            total_attempts: 0,
            consecutive_correct: 0,
            mastery_score: 0,
            review_count: 0,
            average_response_time_ms: 0.0,
            last_reviewed_at: None,
            next_review_due: None,
            learning_status: LearningStatus::NotStarted,
        }
    }
}

impl WordProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Boundary check for counters arriving from storage. The scoring
    /// functions themselves never validate; persistence callers that cannot
    /// trust their rows opt in here before applying attempts.
    pub fn validate(&self) -> Result<(), ProgressError> {
        if self.correct_attempts > self.total_attempts {
            return Err(ProgressError::Validation(format!(
                "correctAttempts {} exceeds totalAttempts {}",
                self.correct_attempts, self.total_attempts
            )));
        }
        if self.mastery_score > 100 {
            return Err(ProgressError::Validation(format!(
                "masteryScore {} outside 0-100",
                self.mastery_score
            )));
        }
        if !self.average_response_time_ms.is_finite() || self.average_response_time_ms < 0.0 {
            return Err(ProgressError::Validation(format!(
                "averageResponseTime {} is not a non-negative finite number",
                self.average_response_time_ms
            )));
        }
        Ok(())
    }
}

// ==================== Errors ====================

#[derive(Debug, thiserror::Error)]
pub enum ProgressError {
    #[error("validation error: {0}")]
    Validation(String),
}
