pub mod use_cases;

pub use use_cases::keyword_stats::KeywordStatsUseCase;
