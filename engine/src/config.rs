use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// Reads a YAML config file. A missing file is not an error: the caller
/// falls back to its defaults. Anything else (unreadable file, bad YAML,
/// failed validation) is reported.
pub fn load_yaml_config<T>(path: &Path) -> Result<Option<T>, String>
where
    T: DeserializeOwned + Validate,
{
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(format!("Failed to read config file: {}", err)),
    };

    let config: T = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("Failed to deserialize config: {}", e))?;

    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;

    Ok(Some(config))
}

pub fn save_yaml_config<T>(path: &Path, config: &T) -> Result<(), String>
where
    T: Serialize + Validate,
{
    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;

    let content =
        serde_yaml_ng::to_string(config).map_err(|e| format!("Failed to serialize config: {}", e))?;

    std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {}", e))
}
