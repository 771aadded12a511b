use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use gapchef_recipe::MatchOptions;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    pub matching: MatchingConfig,
    #[serde(default)]
    pub recognizer: RecognizerConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    /// JSON catalog on disk. The embedded catalog is used when unset.
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MatchingConfig {
    pub min_match_threshold: f64,
    pub max_results: usize,
}

impl MatchingConfig {
    pub fn options(&self) -> MatchOptions {
        MatchOptions {
            min_match: self.min_match_threshold,
            max_results: self.max_results,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct RecognizerConfig {
    #[serde(default = "default_mock_ingredients")]
    pub mock_ingredients: Vec<String>,
    #[serde(default = "default_fallback_ingredients")]
    pub fallback_ingredients: Vec<String>,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            mock_ingredients: default_mock_ingredients(),
            fallback_ingredients: default_fallback_ingredients(),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_mock_ingredients() -> Vec<String> {
    to_strings(&[
        "chicken",
        "pasta",
        "tomatoes",
        "garlic",
        "olive oil",
        "onion",
        "eggs",
        "cheese",
        "butter",
        "milk",
    ])
}

fn default_fallback_ingredients() -> Vec<String> {
    to_strings(&[
        "chicken",
        "rice",
        "vegetables",
        "garlic",
        "onion",
        "soy sauce",
    ])
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (GAPCHEF__SERVER__PORT, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("matching.min_match_threshold", 0.2)?
            .set_default("matching.max_results", 50)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("GAPCHEF")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if !(0.0..=1.0).contains(&self.matching.min_match_threshold) {
            return Err("Matching min_match_threshold must be between 0.0 and 1.0".to_string());
        }
        if self.matching.max_results < 1 {
            return Err("Matching max_results must be at least 1".to_string());
        }
        if self.recognizer.fallback_ingredients.is_empty() {
            return Err("Recognizer fallback_ingredients must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            catalog: CatalogConfig::default(),
            matching: MatchingConfig {
                min_match_threshold: 0.2,
                max_results: 50,
            },
            recognizer: RecognizerConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_validation_zero_port() {
        let mut config = valid_config();
        config.server.port = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_threshold_out_of_range() {
        let mut config = valid_config();
        config.matching.min_match_threshold = 1.5;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_max_results() {
        let mut config = valid_config();
        config.matching.max_results = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_empty_fallback() {
        let mut config = valid_config();
        config.recognizer.fallback_ingredients.clear();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_matching_options() {
        let options = valid_config().matching.options();

        assert_eq!(options, MatchOptions::default());
    }
}
