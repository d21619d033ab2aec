use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::game::{BotLevel, GameMode};

const MAX_BOT_DELAY_MS: u64 = 10_000;
const DEFAULT_BOT_DELAY_MS: u64 = 500;

/// Engine configuration, loaded from YAML. Missing fields and a missing
/// file both fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub mode: GameMode,
    pub difficulty: BotLevel,
    pub bot_delay_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::Single,
            difficulty: BotLevel::Medium,
            bot_delay_ms: DEFAULT_BOT_DELAY_MS,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.bot_delay_ms > MAX_BOT_DELAY_MS {
            return Err(format!(
                "Bot delay {} ms exceeds maximum of {} ms",
                self.bot_delay_ms, MAX_BOT_DELAY_MS
            ));
        }
        Ok(())
    }

    pub fn from_yaml(content: &str) -> Result<Self, String> {
        let config: Self = serde_yaml_ng::from_str(content)
            .map_err(|e| format!("Failed to deserialize config: {}", e))?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, String> {
        serde_yaml_ng::to_string(self).map_err(|e| format!("Failed to serialize config: {}", e))
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {}: {}", path.display(), e))?;
        Self::from_yaml(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();

        assert_eq!(config.mode, GameMode::Single);
        assert_eq!(config.difficulty, BotLevel::Medium);
        assert_eq!(config.bot_delay_ms, 500);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_lowercase_names_in_yaml() {
        let config = EngineConfig {
            mode: GameMode::Multi,
            difficulty: BotLevel::Expert,
            bot_delay_ms: 250,
        };

        let yaml = config.to_yaml().unwrap();

        assert!(yaml.contains("mode: multi"));
        assert!(yaml.contains("difficulty: expert"));
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = EngineConfig {
            mode: GameMode::Multi,
            difficulty: BotLevel::Hard,
            bot_delay_ms: 100,
        };

        let parsed = EngineConfig::from_yaml(&config.to_yaml().unwrap()).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let parsed = EngineConfig::from_yaml("difficulty: easy\n").unwrap();

        assert_eq!(parsed.difficulty, BotLevel::Easy);
        assert_eq!(parsed.mode, GameMode::Single);
        assert_eq!(parsed.bot_delay_ms, 500);
    }

    #[test]
    fn test_invalid_difficulty_rejected() {
        assert!(EngineConfig::from_yaml("difficulty: impossible\n").is_err());
    }

    #[test]
    fn test_excessive_delay_rejected() {
        let config = EngineConfig {
            bot_delay_ms: 60_000,
            ..EngineConfig::default()
        };

        assert!(config.validate().is_err());
        assert!(EngineConfig::from_yaml("bot_delay_ms: 60000\n").is_err());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = EngineConfig::load_from_file("does-not-exist.yaml").unwrap();

        assert_eq!(config, EngineConfig::default());
    }
}
