// ============================================================
// ANALYSIS CONFIGURATION
// ============================================================
// Limits and schema policy for keyword analysis

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Configuration for keyword analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Number of keywords reported in `top_keywords` (default: 20)
    #[validate(range(min = 1))]
    pub top_k: usize,

    /// Vocabulary cap of the advanced strategy (default: 100)
    #[validate(range(min = 1, max = 100_000))]
    pub max_features: usize,

    /// Reject rows lacking the column instead of skipping them (default: false)
    /// The first row is always checked
    pub require_column_in_every_row: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            top_k: 20,
            max_features: 100,
            require_column_in_every_row: false,
        }
    }
}
