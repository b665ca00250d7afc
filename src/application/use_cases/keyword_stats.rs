use std::time::Instant;

use tracing::{debug, info, warn};

use super::keyword_analysis::extract_column;
use crate::domain::analysis_config::AnalyzerConfig;
use crate::domain::error::AnalysisError;
use crate::domain::keyword::Algorithm;
use crate::domain::table::KeywordStatsRequest;
use crate::infrastructure::response::{ApiResponse, KeywordStatsReport};

pub struct KeywordStatsUseCase {
    config: AnalyzerConfig,
}

impl KeywordStatsUseCase {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Validate the request, run the selected strategy and build the report.
    ///
    /// Schema errors are reported before an unknown algorithm name, so the
    /// column is extracted first; `extract_column` owns the schema checks.
    pub fn analyze(
        &self,
        request: &KeywordStatsRequest,
    ) -> Result<KeywordStatsReport, AnalysisError> {
        let texts = extract_column(&request.data, &request.column, &self.config)?;
        let algorithm = Algorithm::resolve(request.algorithm.as_deref())?;

        debug!(
            table = %request.table_name,
            column = %request.column,
            algorithm = %algorithm,
            rows = request.data.len(),
            entries = texts.len(),
            "Running keyword analysis"
        );

        let result = algorithm.analyze(&texts, &self.config)?;

        Ok(KeywordStatsReport {
            success: true,
            table_name: request.table_name.clone(),
            column_analyzed: request.column.clone(),
            method: algorithm.method_label().to_string(),
            result,
        })
    }

    /// Same as [`analyze`](Self::analyze), with failures folded into the envelope.
    pub fn execute(&self, request: &KeywordStatsRequest) -> ApiResponse {
        let started = Instant::now();
        let outcome = self.analyze(request);
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &outcome {
            Ok(report) => info!(
                table = %report.table_name,
                column = %report.column_analyzed,
                total_words = report.result.total_words,
                unique_words = report.result.unique_words,
                elapsed_ms,
                "Keyword analysis complete"
            ),
            Err(err) => warn!(
                table = %request.table_name,
                column = %request.column,
                kind = err.kind(),
                elapsed_ms,
                "Keyword analysis failed: {}",
                err
            ),
        }

        outcome.into()
    }
}

impl Default for KeywordStatsUseCase {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}
