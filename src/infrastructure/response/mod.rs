use serde::{Deserialize, Serialize};

use crate::domain::error::AnalysisError;
use crate::domain::keyword::AnalysisResult;

/// Successful keyword statistics response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordStatsReport {
    pub success: bool,
    pub table_name: String,
    pub column_analyzed: String,
    pub method: String,
    pub result: AnalysisResult,
}

/// Failure response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub success: bool,
    pub error: String,
    pub error_kind: String,
}

impl ErrorReport {
    pub fn new(kind: &str, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: message.into(),
            error_kind: kind.to_string(),
        }
    }
}

impl From<&AnalysisError> for ErrorReport {
    fn from(err: &AnalysisError) -> Self {
        Self::new(err.kind(), err.to_string())
    }
}

/// Uniform `{success, ...}` envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiResponse {
    Success(KeywordStatsReport),
    Failure(ErrorReport),
}

impl From<std::result::Result<KeywordStatsReport, AnalysisError>> for ApiResponse {
    fn from(outcome: std::result::Result<KeywordStatsReport, AnalysisError>) -> Self {
        match outcome {
            Ok(report) => ApiResponse::Success(report),
            Err(err) => ApiResponse::Failure(ErrorReport::from(&err)),
        }
    }
}
