use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Signing secret used when none is configured.
///
/// This mirrors the fallback of the deployment this backend models and is
/// NOT safe for production: anyone who knows it can mint valid tokens.
/// Set `DATACHAT_AUTH_SECRET` (or `auth.secret` in `datachat.toml`).
pub const DEFAULT_SECRET: &str = "SUPER_SECRET";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Token signing secret. Falls back to [`DEFAULT_SECRET`] when unset.
    #[serde(default = "default_secret")]
    pub secret: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_secret() -> String {
    DEFAULT_SECRET.to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    9000
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret: default_secret(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            auth: AuthConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()?;

        config.try_deserialize()
    }

    /// Load configuration from datachat.toml in the current directory
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_file("datachat.toml")
    }

    /// Load configuration with environment variable overrides
    /// Environment variables should be prefixed with DATACHAT_
    /// Example: DATACHAT_AUTH_SECRET, DATACHAT_SERVER_PORT
    ///
    /// Returns the config and a list of environment variable overrides
    pub fn load_with_env() -> Result<(Self, Vec<String>), ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name("datachat").required(false))
            .add_source(Environment::with_prefix("DATACHAT").separator("_"))
            .build()?;

        // Detect which values were overridden by environment
        let mut overrides = Vec::new();

        let env_vars = [
            ("DATACHAT_AUTH_SECRET", "auth.secret"),
            ("DATACHAT_SERVER_HOST", "server.host"),
            ("DATACHAT_SERVER_PORT", "server.port"),
        ];

        for (env_var, config_key) in env_vars {
            if std::env::var(env_var).is_ok() {
                overrides.push(config_key.to_string());
            }
        }

        let app_config = config.try_deserialize()?;
        Ok((app_config, overrides))
    }

    /// True when the process is running on the built-in signing secret.
    pub fn is_default_secret(&self) -> bool {
        self.auth.secret == DEFAULT_SECRET
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        assert_eq!(default_secret(), "SUPER_SECRET");
        assert_eq!(default_host(), "0.0.0.0");
        assert_eq!(default_port(), 9000);
    }

    #[test]
    fn test_defaulted_config_flags_insecure_secret() {
        let config = AppConfig::default();
        assert!(config.is_default_secret());

        let configured = AppConfig {
            auth: AuthConfig {
                secret: "rotated".to_string(),
            },
            ..AppConfig::default()
        };
        assert!(!configured.is_default_secret());
    }
}
