use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use snake_engine::RoundSettings;
use snake_engine::config::Validate;

const CONFIG_FILE_NAME: &str = "snake_config.yaml";

/// Config file lives next to the binary when the executable path is
/// known, in the working directory otherwise.
pub fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeedPreset {
    Slow,
    Medium,
    Fast,
}

impl SpeedPreset {
    pub fn tick_rate(self) -> i32 {
        match self {
            SpeedPreset::Slow => 5,
            SpeedPreset::Medium => 10,
            SpeedPreset::Fast => 15,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridPreset {
    Small,
    Medium,
    Large,
}

impl GridPreset {
    pub fn grid_size(self) -> i32 {
        match self {
            GridPreset::Small => 10,
            GridPreset::Medium => 20,
            GridPreset::Large => 30,
        }
    }
}

/// The settings surface: what the menu screen would produce.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub wrap: bool,
    pub cheats: bool,
    pub speed: SpeedPreset,
    pub grid: GridPreset,
    #[serde(default = "default_starting_length")]
    pub starting_length: i32,
    #[serde(default = "default_high_score_path")]
    pub high_score_path: String,
}

fn default_starting_length() -> i32 {
    1
}

fn default_high_score_path() -> String {
    "high-score".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            wrap: false,
            cheats: false,
            speed: SpeedPreset::Medium,
            grid: GridPreset::Medium,
            starting_length: default_starting_length(),
            high_score_path: default_high_score_path(),
        }
    }
}

impl AppConfig {
    pub fn round_settings(&self) -> RoundSettings {
        RoundSettings {
            grid_size: self.grid.grid_size(),
            tick_rate: self.speed.tick_rate(),
            starting_length: self.starting_length,
            wrap: self.wrap,
            cheats: self.cheats,
        }
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<(), String> {
        if self.high_score_path.is_empty() {
            return Err("high_score_path must not be empty".to_string());
        }
        self.round_settings().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_round_settings() {
        let settings = AppConfig::default().round_settings();
        assert_eq!(settings.grid_size, 20);
        assert_eq!(settings.tick_rate, 10);
        assert_eq!(settings.starting_length, 1);
        assert!(!settings.wrap);
        assert!(!settings.cheats);
    }

    #[test]
    fn test_presets_map_to_values() {
        assert_eq!(SpeedPreset::Slow.tick_rate(), 5);
        assert_eq!(SpeedPreset::Fast.tick_rate(), 15);
        assert_eq!(GridPreset::Small.grid_size(), 10);
        assert_eq!(GridPreset::Large.grid_size(), 30);
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = AppConfig {
            wrap: true,
            cheats: true,
            speed: SpeedPreset::Fast,
            grid: GridPreset::Small,
            starting_length: 3,
            high_score_path: "scores/best".to_string(),
        };
        let yaml = serde_yaml_ng::to_string(&config).unwrap();
        let parsed: AppConfig = serde_yaml_ng::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_yaml_uses_field_defaults() {
        let yaml = "wrap: true\ncheats: false\nspeed: slow\ngrid: large\n";
        let parsed: AppConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(parsed.starting_length, 1);
        assert_eq!(parsed.high_score_path, "high-score");
        assert_eq!(parsed.speed, SpeedPreset::Slow);
    }

    #[test]
    fn test_invalid_starting_length_rejected() {
        let config = AppConfig {
            starting_length: 0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
