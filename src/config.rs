use crate::domain::VersionBump;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File name looked up in the current directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "strict-semver.toml";

/// Represents the complete configuration for the strict-semver CLI.
///
/// Contains input parsing options, output options and bump defaults.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub parsing: ParsingConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub bump: BumpConfig,
}

/// Returns the default list of tag prefixes stripped from inputs.
fn default_tag_prefixes() -> Vec<String> {
    vec!["v".to_string(), "V".to_string()]
}

fn default_color() -> bool {
    true
}

fn default_bump_level() -> VersionBump {
    VersionBump::Patch
}

/// Configuration for how CLI inputs are read before validation.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ParsingConfig {
    #[serde(default = "default_tag_prefixes")]
    pub tag_prefixes: Vec<String>,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        ParsingConfig {
            tag_prefixes: default_tag_prefixes(),
        }
    }
}

/// Configuration for CLI output.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            color: default_color(),
        }
    }
}

/// Configuration for the `bump` command.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BumpConfig {
    #[serde(default = "default_bump_level")]
    pub default: VersionBump,
}

impl Default for BumpConfig {
    fn default() -> Self {
        BumpConfig {
            default: default_bump_level(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `strict-semver.toml` in current directory
/// 3. `strict-semver.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config, ConfigError> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);

    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if local.exists() {
        fs::read_to_string(local)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            tracing::debug!("no configuration file found, using defaults");
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}
