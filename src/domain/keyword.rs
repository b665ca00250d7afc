use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::AnalysisError;

/// Keyword analysis strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Exact counting over every token
    #[default]
    Simple,
    /// Capped-vocabulary counting with per-entry statistics
    Advanced,
}

impl Algorithm {
    /// Human-readable method label echoed in responses
    pub fn method_label(self) -> &'static str {
        match self {
            Algorithm::Simple => "Simple word frequency count",
            Algorithm::Advanced => "Advanced vectorized word frequency analysis",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Simple => "simple",
            Algorithm::Advanced => "advanced",
        }
    }

    /// Resolve an optional strategy name, defaulting to `Simple`.
    pub fn resolve(name: Option<&str>) -> Result<Self, AnalysisError> {
        match name {
            None => Ok(Algorithm::default()),
            Some(name) => name.parse(),
        }
    }
}

impl FromStr for Algorithm {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simple" => Ok(Algorithm::Simple),
            "advanced" => Ok(Algorithm::Advanced),
            _ => Err(AnalysisError::UnsupportedAlgorithm {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A ranked keyword
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordStat {
    pub word: String,
    pub count: usize,
    /// Share of the counted total, only reported by the advanced strategy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f64>,
}

impl KeywordStat {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
            frequency: None,
        }
    }

    pub fn with_frequency(mut self, frequency: f64) -> Self {
        self.frequency = Some(frequency);
        self
    }
}

/// Whitespace-segment statistics over the analyzed entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvancedStats {
    pub average_words_per_entry: f64,
    pub longest_entry_words: usize,
}

/// Output of either strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub total_words: usize,
    pub unique_words: usize,
    /// Descending by count
    pub top_keywords: Vec<KeywordStat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advanced_stats: Option<AdvancedStats>,
}

impl AnalysisResult {
    pub fn empty() -> Self {
        Self {
            total_words: 0,
            unique_words: 0,
            top_keywords: Vec::new(),
            advanced_stats: None,
        }
    }
}
