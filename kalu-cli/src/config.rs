//! CLI configuration: flags and env (via clap), then `config.json`, then defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use kalu_client::ClientConfig;
use kalu_types::ConfigError;

const CONFIG_FILE: &str = "config.json";

/// Contents of `config.json`. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FileConfig {
    pub api_url: Option<String>,
    pub token: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Values given on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_url: Option<String>,
    pub token: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// `<config dir>/kalu/config.json`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("kalu").join(CONFIG_FILE))
}

/// Load a config file. A missing file yields the empty config.
pub fn load_file_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(FileConfig::default());
        },
        Err(e) => return Err(ConfigError::from_io_error(path, &e)),
    };
    serde_json::from_str(&content).map_err(|e| ConfigError::from_json_error(&e))
}

/// Merge overrides over the file config over defaults, and validate.
pub fn resolve(overrides: Overrides, file: FileConfig) -> Result<ClientConfig, ConfigError> {
    let defaults = ClientConfig::default();
    let config = ClientConfig {
        base_url: overrides.api_url.or(file.api_url).unwrap_or(defaults.base_url),
        token: overrides.token.or(file.token).filter(|t| !t.is_empty()),
        timeout_secs: overrides.timeout_secs.or(file.timeout_secs).unwrap_or(defaults.timeout_secs),
    };

    if let Err(e) = url::Url::parse(&config.base_url) {
        return Err(ConfigError::ValidationError {
            field: "api_url".to_string(),
            message: format!("{}: {}", config.base_url, e),
        });
    }
    if config.timeout_secs == 0 {
        return Err(ConfigError::ValidationError {
            field: "timeout_secs".to_string(),
            message: "must be at least 1".to_string(),
        });
    }
    Ok(config)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_file_config(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_partial_file_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, r#"{"api_url": "https://kalu.example"}"#).unwrap();

        let config = load_file_config(&path).unwrap();
        assert_eq!(config.api_url.as_deref(), Some("https://kalu.example"));
        assert!(config.token.is_none());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "{ api_url: nope").unwrap();

        let err = load_file_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_overrides_win_over_file() {
        let file = FileConfig {
            api_url: Some("https://file.example".to_string()),
            token: Some("file-token".to_string()),
            timeout_secs: Some(10),
        };
        let overrides =
            Overrides { api_url: Some("https://flag.example".to_string()), ..Default::default() };

        let config = resolve(overrides, file).unwrap();
        assert_eq!(config.base_url, "https://flag.example");
        assert_eq!(config.token.as_deref(), Some("file-token"));
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_defaults_apply() {
        let config = resolve(Overrides::default(), FileConfig::default()).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let bad_url = Overrides { api_url: Some("not a url".to_string()), ..Default::default() };
        assert!(matches!(
            resolve(bad_url, FileConfig::default()),
            Err(ConfigError::ValidationError { ref field, .. }) if field == "api_url"
        ));

        let zero = Overrides { timeout_secs: Some(0), ..Default::default() };
        assert!(matches!(
            resolve(zero, FileConfig::default()),
            Err(ConfigError::ValidationError { ref field, .. }) if field == "timeout_secs"
        ));
    }
}
