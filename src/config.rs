//! Configuration file parsing and validation.
//!
//! This module handles loading the optional TOML configuration file and
//! resolving it, together with CLI flags and environment overrides, into
//! the [`Settings`] a run uses.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::cli::Commands;
use crate::constants;
use crate::errors::ConfigError;
use crate::filter::AllowListPolicy;

/// Configuration file structure. Every key is optional.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Path of the `.env` file to read secrets from.
    #[serde(default)]
    pub env_file: Option<PathBuf>,
    /// Hub base URL.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Target Space.
    #[serde(default)]
    pub space: Option<SpaceConfig>,
    /// Allow-list overrides.
    #[serde(default)]
    pub filter: Option<FilterConfig>,
}

/// `[space]` table.
#[derive(Debug, Deserialize, Clone)]
pub struct SpaceConfig {
    /// Space id in the form `owner/name`.
    pub id: String,
}

/// `[filter]` table. A missing list keeps the built-in one.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct FilterConfig {
    #[serde(default)]
    pub important_keys: Option<Vec<String>>,
    #[serde(default)]
    pub api_prefixes: Option<Vec<String>>,
}

/// Values that take precedence over the config file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub env_file: Option<PathBuf>,
    pub space: Option<String>,
    pub endpoint: Option<String>,
    /// Selects the built-in important-key list when `[filter]` has none.
    pub command: Commands,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub env_file: PathBuf,
    pub space_id: String,
    pub endpoint: String,
    pub policy: AllowListPolicy,
}

impl Settings {
    /// Web page where the Space's secrets are managed and the Space restarted.
    pub fn settings_url(&self) -> String {
        format!(
            "{}/spaces/{}/settings",
            self.endpoint.trim_end_matches('/'),
            self.space_id
        )
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            env_file: PathBuf::from(constants::source::DEFAULT_ENV_FILE),
            space_id: constants::space::DEFAULT_SPACE_ID.to_string(),
            endpoint: constants::api::DEFAULT_ENDPOINT.to_string(),
            policy: AllowListPolicy::for_upload(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(format!("{}: {}", path.display(), e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(e.to_string()))
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Load the config file at `explicit`, or the first one found on the
    /// lookup path. No file at all means built-in defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match crate::paths::find_config_file() {
            Some(path) => Self::from_file(&path),
            None => {
                debug!("no config file found, using built-in defaults");
                Ok(Self::default())
            }
        }
    }

    /// Source `.env` path: the CLI value, then the config file, then the built-in one.
    pub fn source_env_file(&self, cli_env_file: Option<&Path>) -> PathBuf {
        cli_env_file
            .or(self.env_file.as_deref())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(constants::source::DEFAULT_ENV_FILE))
    }

    /// Merge with `overrides` and built-in defaults, then validate.
    ///
    /// Without `[filter].important_keys`, uploads keep only the upload list
    /// while instructions also list config values such as `NODE_ENV`.
    pub fn resolve(self, overrides: Overrides) -> Result<Settings> {
        let defaults = Settings::default();

        let env_file = self.source_env_file(overrides.env_file.as_deref());
        let space_id = overrides
            .space
            .or(self.space.map(|s| s.id))
            .unwrap_or(defaults.space_id);
        let endpoint = overrides
            .endpoint
            .filter(|e| !e.trim().is_empty())
            .or(self.endpoint)
            .unwrap_or(defaults.endpoint);

        let filter = self.filter.unwrap_or_default();
        let important_keys = filter.important_keys.unwrap_or_else(|| {
            let builtin = match overrides.command {
                Commands::Upload => constants::filter::UPLOAD_IMPORTANT_KEYS,
                Commands::Instructions => constants::filter::INSTRUCTIONS_IMPORTANT_KEYS,
            };
            builtin
                .iter()
                .map(|k| k.to_string())
                .collect()
        });
        let api_prefixes = filter.api_prefixes.unwrap_or_else(|| {
            constants::filter::API_PREFIXES
                .iter()
                .map(|p| p.to_string())
                .collect()
        });

        crate::validation::validate_space_id(&space_id).context("Invalid target Space")?;
        for key in &important_keys {
            crate::validation::validate_secret_key(key)
                .with_context(|| format!("Invalid entry in filter.important_keys: '{}'", key))?;
        }
        if let Some(prefix) = api_prefixes.iter().find(|p| p.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "filter.api_prefixes contains an empty prefix: '{}'",
                prefix
            ))
            .into());
        }
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(ConfigError::Invalid(format!(
                "endpoint must be an http(s) URL, got '{}'",
                endpoint
            ))
            .into());
        }

        Ok(Settings {
            env_file,
            space_id,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            policy: AllowListPolicy::new(important_keys, api_prefixes),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_resolve() {
        let settings = Config::default().resolve(Overrides::default()).unwrap();
        assert_eq!(settings.space_id, "sharry121/baatcheet");
        assert_eq!(settings.endpoint, "https://huggingface.co");
        assert_eq!(
            settings.env_file,
            PathBuf::from(constants::source::DEFAULT_ENV_FILE)
        );
        assert_eq!(settings.policy, AllowListPolicy::for_upload());
    }

    #[test]
    fn test_builtin_important_keys_follow_command() {
        let upload = Config::default().resolve(Overrides::default()).unwrap();
        assert!(upload.policy.retains("JWT_SECRET"));
        assert!(!upload.policy.retains("NODE_ENV"));
        assert!(!upload.policy.retains("DATABASE_URL"));

        let instructions = Config::default()
            .resolve(Overrides {
                command: Commands::Instructions,
                ..Default::default()
            })
            .unwrap();
        assert_eq!(instructions.policy, AllowListPolicy::for_instructions());
        assert!(instructions.policy.retains("NODE_ENV"));
        assert!(instructions.policy.retains("DATABASE_URL"));
    }

    #[test]
    fn test_configured_important_keys_apply_to_both_commands() {
        let filter = FilterConfig {
            important_keys: Some(vec!["NODE_ENV".to_string()]),
            api_prefixes: None,
        };
        for command in [Commands::Upload, Commands::Instructions] {
            let config = Config {
                filter: Some(filter.clone()),
                ..Default::default()
            };
            let settings = config
                .resolve(Overrides {
                    command,
                    ..Default::default()
                })
                .unwrap();
            assert!(settings.policy.retains("NODE_ENV"));
            assert!(!settings.policy.retains("JWT_SECRET"));
        }
    }

    #[test]
    fn test_source_env_file_precedence() {
        let config = Config {
            env_file: Some(PathBuf::from("/from/config")),
            ..Default::default()
        };
        assert_eq!(
            config.source_env_file(Some(Path::new("/from/cli"))),
            PathBuf::from("/from/cli")
        );
        assert_eq!(config.source_env_file(None), PathBuf::from("/from/config"));
        assert_eq!(
            Config::default().source_env_file(None),
            PathBuf::from(constants::source::DEFAULT_ENV_FILE)
        );
    }

    #[test]
    fn test_settings_url() {
        let settings = Settings::default();
        assert_eq!(
            settings.settings_url(),
            "https://huggingface.co/spaces/sharry121/baatcheet/settings"
        );
    }

    #[test]
    fn test_config_from_file_full() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let config_content = r#"
env_file = "/srv/app/.env"
endpoint = "https://hub.example.com/"

[space]
id = "acme/chat"

[filter]
important_keys = ["JWT_SECRET"]
api_prefixes = ["OPENAI_API_KEY"]
"#;
        fs::write(&config_path, config_content).unwrap();

        let settings = Config::from_file(&config_path)
            .unwrap()
            .resolve(Overrides::default())
            .unwrap();
        assert_eq!(settings.env_file, PathBuf::from("/srv/app/.env"));
        assert_eq!(settings.endpoint, "https://hub.example.com");
        assert_eq!(settings.space_id, "acme/chat");
        assert!(settings.policy.retains("JWT_SECRET"));
        assert!(settings.policy.retains("OPENAI_API_KEY_2"));
        assert!(!settings.policy.retains("GROQ_API_KEY"));
    }

    #[test]
    fn test_overrides_win_over_file() {
        let config = Config {
            env_file: Some(PathBuf::from("/from/config")),
            endpoint: Some("https://config.example.com".to_string()),
            space: Some(SpaceConfig {
                id: "config/space".to_string(),
            }),
            filter: None,
        };
        let settings = config
            .resolve(Overrides {
                env_file: Some(PathBuf::from("/from/cli")),
                space: Some("cli/space".to_string()),
                endpoint: Some("http://127.0.0.1:9999".to_string()),
                command: Commands::Upload,
            })
            .unwrap();
        assert_eq!(settings.env_file, PathBuf::from("/from/cli"));
        assert_eq!(settings.space_id, "cli/space");
        assert_eq!(settings.endpoint, "http://127.0.0.1:9999");
    }

    #[test]
    fn test_invalid_space_id_rejected() {
        let result = Config::default().resolve(Overrides {
            space: Some("not-a-space-id".to_string()),
            ..Default::default()
        });
        assert!(result.is_err());
        assert!(
            crate::error::format_error_chain(&result.unwrap_err()).contains("Space id validation failed")
        );
    }

    #[test]
    fn test_invalid_important_key_rejected() {
        let config = Config {
            filter: Some(FilterConfig {
                important_keys: Some(vec!["BAD-KEY".to_string()]),
                api_prefixes: None,
            }),
            ..Default::default()
        };
        assert!(config.resolve(Overrides::default()).is_err());
    }

    #[test]
    fn test_empty_prefix_rejected() {
        let config = Config {
            filter: Some(FilterConfig {
                important_keys: None,
                api_prefixes: Some(vec!["".to_string()]),
            }),
            ..Default::default()
        };
        assert!(config.resolve(Overrides::default()).is_err());
    }

    #[test]
    fn test_config_from_file_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "space = [").unwrap();

        let result = Config::from_file(&config_path);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_from_missing_file() {
        let result = Config::from_file(Path::new("/definitely/not/here.toml"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to read config file"));
    }
}
