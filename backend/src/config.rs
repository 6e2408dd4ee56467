//! Host configuration read from the environment (and `.env`, when present).
//!
//! | Env Var               | Default     |
//! |-----------------------|-------------|
//! | `AURORA_HOST`         | `127.0.0.1` |
//! | `AURORA_PORT`         | `8080`      |
//! | `AURORA_OPEN_BROWSER` | `true`      |

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a port number, got '{value}'")]
    InvalidPort { key: &'static str, value: String },
    #[error("{key} must be a boolean (true/false/1/0/yes/no), got '{value}'")]
    InvalidBool { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Launch the default browser once the server is listening.
    pub open_browser: bool,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("AURORA_HOST").unwrap_or_else(|| "127.0.0.1".into());

        let port = match lookup("AURORA_PORT") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidPort {
                key: "AURORA_PORT",
                value,
            })?,
            None => 8080,
        };

        let open_browser = match lookup("AURORA_OPEN_BROWSER") {
            Some(value) => parse_bool(&value).ok_or(ConfigError::InvalidBool {
                key: "AURORA_OPEN_BROWSER",
                value,
            })?,
            None => true,
        };

        Ok(Self {
            host,
            port,
            open_browser,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(config.open_browser);
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn reads_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("AURORA_HOST", "0.0.0.0"),
            ("AURORA_PORT", " 9000 "),
            ("AURORA_OPEN_BROWSER", "No"),
        ]))
        .unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert!(!config.open_browser);
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            ServerConfig::from_lookup(lookup_from(&[("AURORA_PORT", "eighty")])).unwrap_err(),
            ConfigError::InvalidPort {
                key: "AURORA_PORT",
                value: "eighty".into()
            }
        );
        assert!(matches!(
            ServerConfig::from_lookup(lookup_from(&[("AURORA_OPEN_BROWSER", "maybe")])),
            Err(ConfigError::InvalidBool { .. })
        ));
    }
}
