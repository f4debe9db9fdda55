//! Typing Similarity
//!
//! Positional character comparison between the user's input and the target
//! word. This is intentionally not an edit-distance alignment: insertions
//! and deletions cascade mismatches past the divergence point, so a
//! transposition like "hte"/"the" scores low. Product has so far preferred
//! the simpler positional rule.

use serde::{Deserialize, Serialize};

pub const DEFAULT_TOLERANCE_PERCENTAGE: u32 = 10;
const PARTIAL_CREDIT_ACCURACY_FLOOR: u32 = 50;
const PARTIAL_CREDIT_MIN_CHARS: usize = 3;

/// Tuning knobs for the typing judgment.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypingOptions {
    /// Accepted as correct when accuracy >= 100 - tolerance
    pub tolerance_percentage: u32,
    pub allow_partial_credit: bool,
}

impl Default for TypingOptions {
    fn default() -> Self {
        Self {
            tolerance_percentage: DEFAULT_TOLERANCE_PERCENTAGE,
            allow_partial_credit: true,
        }
    }
}

/// Per-attempt feedback returned to the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypingJudgment {
    pub is_correct: bool,
    /// Positional match percentage, 0-100
    pub accuracy: u32,
    pub partial_credit: bool,
}

/// Judge a typed answer against the target word. Both strings are trimmed
/// and lowercased first; comparison is per Unicode scalar value at the same
/// index, with out-of-range positions counted as mismatches.
pub fn check_typing(user_input: &str, target_word: &str, options: &TypingOptions) -> TypingJudgment {
    let input = normalize(user_input);
    let target = normalize(target_word);

    if input == target {
        return TypingJudgment {
            is_correct: true,
            accuracy: 100,
            partial_credit: false,
        };
    }

    let input_chars: Vec<char> = input.chars().collect();
    let target_chars: Vec<char> = target.chars().collect();
    let max_len = input_chars.len().max(target_chars.len());

    let matching = (0..max_len)
        .filter(|&i| match (input_chars.get(i), target_chars.get(i)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        })
        .count();

    let accuracy = ((100.0 * matching as f64) / max_len as f64).round() as u32;
    let is_correct = accuracy >= 100u32.saturating_sub(options.tolerance_percentage);
    let partial_credit = options.allow_partial_credit
        && accuracy >= PARTIAL_CREDIT_ACCURACY_FLOOR
        && input_chars.len() >= PARTIAL_CREDIT_MIN_CHARS;

    TypingJudgment {
        is_correct,
        accuracy,
        partial_credit,
    }
}

fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}
