use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{EnvReleaseError, Result};
use crate::version;

/// Represents the complete configuration for env-release.
///
/// Contains the branch-to-version map and default runtime settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_branches")]
    pub branches: HashMap<String, String>,

    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Returns the built-in branch-to-version map.
///
/// Each release branch maps to the version string the env file should carry
/// once that branch is the release target.
fn default_branches() -> HashMap<String, String> {
    let mut map = HashMap::new();
    map.insert("master".to_string(), "3.0.0-SNAPSHOT".to_string());
    map.insert("ranger-2.4".to_string(), "2.4.1-SNAPSHOT".to_string());
    map.insert("ranger-2.5".to_string(), "2.5.1-SNAPSHOT".to_string());
    map.insert("ranger-2.6".to_string(), "2.6.0".to_string());
    map
}

/// Default runtime settings.
///
/// Controls which branch the env file is assumed to reflect when none is
/// given, and which file is updated when no path is passed.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DefaultsConfig {
    #[serde(default = "default_branch")]
    pub branch: String,

    #[serde(default = "default_env_file")]
    pub env_file: String,
}

fn default_branch() -> String {
    "master".to_string()
}

fn default_env_file() -> String {
    ".env".to_string()
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        DefaultsConfig {
            branch: default_branch(),
            env_file: default_env_file(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            branches: default_branches(),
            defaults: DefaultsConfig::default(),
        }
    }
}

impl Config {
    /// Looks up the version string a branch maps to.
    ///
    /// # Returns
    /// * `Ok(&str)` - The configured version string
    /// * `Err` - `UnknownBranch` listing the configured branch names
    pub fn version_for(&self, branch: &str) -> Result<&str> {
        self.branches
            .get(branch)
            .map(String::as_str)
            .ok_or_else(|| EnvReleaseError::unknown_branch(branch, self.branches.keys()))
    }

    /// Checks that every configured version string is a valid semantic
    /// version.
    pub fn validate(&self) -> Result<()> {
        for (branch, raw) in &self.branches {
            version::parse_version(raw).map_err(|_| {
                EnvReleaseError::version(format!(
                    "branch '{}' maps to invalid version '{}'",
                    branch, raw
                ))
            })?;
        }
        Ok(())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `envrelease.toml` in current directory
/// 3. `~/.config/.envrelease.toml` in user config directory
/// 4. Default configuration if no file found
///
/// The loaded configuration is validated before it is returned: every
/// branch must map to a parseable semantic version.
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read, parsed, or validated
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        Some(fs::read_to_string(path)?)
    } else if Path::new("./envrelease.toml").exists() {
        Some(fs::read_to_string("./envrelease.toml")?)
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".envrelease.toml");
        if config_path.exists() {
            Some(fs::read_to_string(config_path)?)
        } else {
            None
        }
    } else {
        None
    };

    let config = match config_str {
        Some(raw) => toml::from_str(&raw)
            .map_err(|e| EnvReleaseError::config(format!("Failed to parse config: {}", e)))?,
        None => Config::default(),
    };

    config.validate()?;
    Ok(config)
}
