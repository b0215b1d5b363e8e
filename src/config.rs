use crate::models::{
    MatchConfig, DEFAULT_MATCH_COUNT, DEFAULT_MATCH_THRESHOLD, DEFAULT_PARALLEL_THRESHOLD,
};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use validator::Validate;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
    pub acquire_timeout_secs: Option<u64>,
    pub idle_timeout_secs: Option<u64>,
}

/// Where breed profiles come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSource {
    #[default]
    Postgres,
    File,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSettings {
    #[serde(default)]
    pub source: CatalogSource,
    /// Catalog file for the `file` source (.toml or .json)
    pub path: Option<String>,
}

/// Tunables for ranking matches
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct MatchingSettings {
    #[validate(range(min = 0.0))]
    pub match_threshold: Option<f64>,
    pub match_count: Option<usize>,
    pub parallel_threshold: Option<usize>,
}

impl MatchingSettings {
    /// Minimum match score (0-1) to make it to the list
    pub fn match_threshold(&self) -> f64 {
        self.match_threshold.unwrap_or(DEFAULT_MATCH_THRESHOLD)
    }

    /// Maximum number of breeds on the list, 0 for unlimited
    pub fn match_count(&self) -> usize {
        self.match_count.unwrap_or(DEFAULT_MATCH_COUNT)
    }

    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold.unwrap_or(DEFAULT_PARALLEL_THRESHOLD)
    }
}

impl From<&MatchingSettings> for MatchConfig {
    fn from(settings: &MatchingSettings) -> Self {
        MatchConfig::new(settings.match_threshold(), settings.match_count())
            .with_parallel_threshold(settings.parallel_threshold())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with IDEALDOG_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., IDEALDOG__MATCHING__MATCH_COUNT -> matching.match_count
            .add_source(
                Environment::with_prefix("IDEALDOG")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        apply_env_overrides(settings)?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("IDEALDOG")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply the conventional unprefixed environment variables on top
///
/// `DATABASE_URL`, `LOG_LEVEL` and `LOG_FORMAT` win over everything else
/// when set.
fn apply_env_overrides(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    for (var, key) in [
        ("DATABASE_URL", "database.url"),
        ("LOG_LEVEL", "logging.level"),
        ("LOG_FORMAT", "logging.format"),
    ] {
        if let Ok(value) = env::var(var) {
            builder = builder.set_override(key, value)?;
        }
    }

    builder.build()
}
