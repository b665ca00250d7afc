use std::path::PathBuf;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::analysis_config::AnalyzerConfig;
use crate::domain::error::Result;

pub const CONFIG_FILE: &str = "keyword-stats.toml";
pub const CONFIG_PATH_VAR: &str = "KEYWORD_STATS_CONFIG";
pub const ENV_PREFIX: &str = "KEYWORD_STATS_";
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ServerConfig {
    #[validate(length(min = 1))]
    pub host: String,
    #[validate(range(min = 1))]
    pub port: u16,
    pub permissive_cors: bool,
    /// Upper bound on a JSON request body, in bytes
    #[validate(range(min = 1))]
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            permissive_cors: true,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AppConfig {
    #[validate(nested)]
    pub server: ServerConfig,
    #[validate(nested)]
    pub analysis: AnalyzerConfig,
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            analysis: AnalyzerConfig::default(),
            log_filter: "info".to_string(),
        }
    }
}

pub struct ConfigService;

impl ConfigService {
    /// Defaults, then the TOML file, then `KEYWORD_STATS_*` variables.
    pub fn load() -> Result<AppConfig> {
        let _ = dotenvy::dotenv();

        let path = std::env::var(CONFIG_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(CONFIG_FILE));

        Self::extract(
            Self::base()
                .merge(Toml::file(path))
                .merge(Env::prefixed(ENV_PREFIX).split("__")),
        )
    }

    /// Compiled defaults only.
    pub fn base() -> Figment {
        Figment::from(Serialized::defaults(AppConfig::default()))
    }

    pub fn extract(figment: Figment) -> Result<AppConfig> {
        let config: AppConfig = figment.extract()?;
        config.validate()?;
        Ok(config)
    }
}
