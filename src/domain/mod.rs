pub mod analysis_config;
pub mod error;
pub mod keyword;
pub mod table;
