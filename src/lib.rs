pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

mod app;

pub use app::run;
pub use application::use_cases::keyword_analysis::{extract_column, tokenize};
pub use application::KeywordStatsUseCase;
pub use domain::analysis_config::AnalyzerConfig;
pub use domain::error::{AnalysisError, AppError};
pub use domain::keyword::{AdvancedStats, Algorithm, AnalysisResult, KeywordStat};
pub use domain::table::{Dataset, KeywordStatsRequest, Row};
pub use infrastructure::response::ApiResponse;
