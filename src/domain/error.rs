use serde::{Deserialize, Serialize};
use std::fmt;

/// Failures of a single keyword analysis.
///
/// These are reported to the caller inside the response envelope, never
/// raised as transport faults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisError {
    EmptyDataset,
    MissingColumn { column: String },
    /// Only produced when every row is required to carry the column.
    MissingColumnInRow { column: String, row: usize },
    UnsupportedAlgorithm { name: String },
    EmptyTextSequence,
    EmptyVocabulary,
}

impl AnalysisError {
    /// Stable machine-readable tag for the failure.
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::EmptyDataset => "empty_dataset",
            AnalysisError::MissingColumn { .. } => "missing_column",
            AnalysisError::MissingColumnInRow { .. } => "missing_column_in_row",
            AnalysisError::UnsupportedAlgorithm { .. } => "unsupported_algorithm",
            AnalysisError::EmptyTextSequence => "empty_text_sequence",
            AnalysisError::EmptyVocabulary => "empty_vocabulary",
        }
    }
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::EmptyDataset => write!(f, "Table data is empty"),
            AnalysisError::MissingColumn { column } => {
                write!(f, "Column '{}' does not exist", column)
            }
            AnalysisError::MissingColumnInRow { column, row } => {
                write!(f, "Column '{}' is missing from row {}", column, row)
            }
            AnalysisError::UnsupportedAlgorithm { name } => {
                write!(f, "Unsupported algorithm: {}", name)
            }
            AnalysisError::EmptyTextSequence => write!(
                f,
                "No non-null values to analyze; word count statistics need at least one entry"
            ),
            AnalysisError::EmptyVocabulary => write!(
                f,
                "Empty vocabulary; the column values contain no words"
            ),
        }
    }
}

impl std::error::Error for AnalysisError {}

/// Process-level failures: configuration, I/O and server startup.
#[derive(Debug, Serialize, Deserialize)]
pub enum AppError {
    ConfigError(String),
    ValidationError(String),
    IoError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ConfigError(msg) => write!(f, "Config error: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

impl From<figment::Error> for AppError {
    fn from(err: figment::Error) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
