//! Server configuration loading.
//!
//! Engine tuning can be supplied as a TOML file; command line flags take
//! precedence over file values in the binary.

use std::path::Path;

use chill_core::EngineConfig;
use serde::Deserialize;

/// Complete server configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Engine tuning parameters
    pub engine: EngineConfig,
}

impl ServerConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::IoError)?;
        Self::from_str(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::TomlError)
    }
}

/// Errors that can occur during configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading config file
    IoError(std::io::Error),
    /// Error parsing TOML config
    TomlError(toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::TomlError(e) => write!(f, "TOML parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError(e) => Some(e),
            ConfigError::TomlError(e) => Some(e),
        }
    }
}

/// Generates a default configuration file content.
pub fn default_config_toml() -> String {
    r#"# Break server configuration

[engine]
# Probability (0-100) that the boss notices each break
boss_alertness = 35
# Seconds of sustained quiet per one-step alert decay (0 disables decay)
boss_alertness_cooldown = 120
# Stress gained per minute without a break
stress_increase_rate = 1.0
# Uncomment for reproducible sessions
# rng_seed = 42
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();

        assert_eq!(config.engine.boss_alertness, 35);
        assert_eq!(config.engine.boss_alertness_cooldown, 120);
    }

    #[test]
    fn test_parse_config_from_toml() {
        let toml = r#"
            [engine]
            boss_alertness = 80
            boss_alertness_cooldown = 30
            stress_increase_rate = 4.5
            rng_seed = 7
        "#;

        let config = ServerConfig::from_str(toml).unwrap();

        assert_eq!(config.engine.boss_alertness, 80);
        assert_eq!(config.engine.boss_alertness_cooldown, 30);
        assert_eq!(config.engine.stress_increase_rate, 4.5);
        assert_eq!(config.engine.rng_seed, Some(7));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let toml = r#"
            [engine]
            boss_alertness = 80
        "#;

        let config = ServerConfig::from_str(toml).unwrap();

        assert_eq!(config.engine.boss_alertness, 80);
        // Default values
        assert_eq!(config.engine.boss_alertness_cooldown, 120);
        assert_eq!(config.engine.stress_increase_rate, 1.0);
    }

    #[test]
    fn test_default_config_toml_parses() {
        let toml = default_config_toml();
        let config = ServerConfig::from_str(&toml).unwrap();

        assert_eq!(config.engine.boss_alertness, 35);
        assert!(config.engine.rng_seed.is_none());
    }

    #[test]
    fn test_invalid_toml_rejected() {
        let result = ServerConfig::from_str("[engine]\nboss_alertness = \"loud\"");
        assert!(matches!(result, Err(ConfigError::TomlError(_))));
    }
}
