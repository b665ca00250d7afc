//! Column keyword frequency analysis.
//!
//! Extractor -> tokenizer -> one of two strategies:
//! - **simple**: exact counts over every token, first-seen tie order
//! - **advanced**: counts over a capped vocabulary, alphabetical tie order,
//!   plus whitespace word statistics per entry
//!
//! Everything here is a pure function of its inputs.

pub mod extractor;
pub mod simple;
pub mod tokenizer;
pub mod vectorized;

pub use extractor::extract_column;
pub use tokenizer::tokenize;
pub use vectorized::Vocabulary;

use crate::domain::analysis_config::AnalyzerConfig;
use crate::domain::error::AnalysisError;
use crate::domain::keyword::{Algorithm, AnalysisResult};

impl Algorithm {
    /// Analyze column values produced by [`extract_column`] with this strategy.
    pub fn analyze(
        self,
        texts: &[String],
        config: &AnalyzerConfig,
    ) -> Result<AnalysisResult, AnalysisError> {
        match self {
            Algorithm::Simple => Ok(simple::analyze(texts, config)),
            Algorithm::Advanced => vectorized::analyze(texts, config),
        }
    }
}
