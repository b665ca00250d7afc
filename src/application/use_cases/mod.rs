pub mod keyword_analysis;
pub mod keyword_stats;
