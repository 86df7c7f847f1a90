// Paste-ratio calculation.
//
// ratio = paste_count / total_characters, rounded to hundredths, with zero
// characters defined as a zero ratio. Submissions above the threshold are
// flagged for a closer look.

use crate::models::IntegrityMetadata;

/// Configurable threshold for the paste-ratio flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegrityThresholds {
    /// Ratios strictly above this are flagged (default 0.5).
    pub flag_threshold: f64,
}

impl Default for IntegrityThresholds {
    fn default() -> Self {
        Self {
            flag_threshold: 0.5,
        }
    }
}

/// Compute paste ratio and flag for one submission.
///
/// Inputs are not validated. Negative counts produce a negative ratio.
pub fn calculate_integrity(
    paste_count: i64,
    total_characters: i64,
    thresholds: &IntegrityThresholds,
) -> IntegrityMetadata {
    let raw_ratio = if total_characters > 0 {
        paste_count as f64 / total_characters as f64
    } else {
        0.0
    };

    // Round half away from zero at the hundredths place
    let paste_ratio = (raw_ratio * 100.0).round() / 100.0;

    IntegrityMetadata {
        paste_count,
        total_characters,
        paste_ratio,
        is_flagged: paste_ratio > thresholds.flag_threshold,
    }
}
