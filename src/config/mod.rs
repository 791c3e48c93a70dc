// ABOUTME: Configuration types and parsing for rollout.yml.
// ABOUTME: Handles YAML parsing, token resolution, and config file scaffolding.

mod env_value;

pub use env_value::EnvValue;

use crate::deploy::PollPolicy;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const CONFIG_FILENAME: &str = "rollout.yml";
pub const CONFIG_FILENAME_ALT: &str = "rollout.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".rollout/config.yml";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub platform: PlatformConfig,

    #[serde(default)]
    pub poll: PollPolicy,
}

/// Connection settings for the container platform API.
#[derive(Debug, Clone, Deserialize)]
pub struct PlatformConfig {
    /// Base URL of the platform API.
    pub endpoint: String,

    /// API token, literal or resolved from the environment.
    pub token: EnvValue,

    /// Per-request timeout; a single call never blocks longer than this.
    #[serde(default = "default_request_timeout", with = "humantime_serde")]
    pub request_timeout: Duration,
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(5)
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(Error::from)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn discover(dir: &Path) -> Result<Self> {
        let candidates = [
            dir.join(CONFIG_FILENAME),
            dir.join(CONFIG_FILENAME_ALT),
            dir.join(CONFIG_FILENAME_DIR),
        ];

        for path in &candidates {
            if path.exists() {
                return Self::load(path);
            }
        }

        Err(Error::ConfigNotFound(dir.to_path_buf()))
    }

    pub fn template() -> Self {
        Config {
            platform: PlatformConfig {
                endpoint: "https://api.platform.example.com".to_string(),
                token: EnvValue::FromEnv {
                    var: "ROLLOUT_TOKEN".to_string(),
                    default: None,
                },
                request_timeout: default_request_timeout(),
            },
            poll: PollPolicy::default(),
        }
    }
}

pub fn init_config(dir: &Path, endpoint: Option<&str>, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() && !force {
        return Err(Error::AlreadyExists(config_path));
    }

    let mut config = Config::template();

    if let Some(e) = endpoint {
        if e.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "platform endpoint cannot be empty".to_string(),
            ));
        }
        config.platform.endpoint = e.to_string();
    }

    let yaml = generate_template_yaml(&config);
    std::fs::write(&config_path, yaml)?;

    Ok(())
}

fn generate_template_yaml(config: &Config) -> String {
    format!(
        r#"platform:
  endpoint: {}
  # API token for the platform, read from the environment at run time
  token:
    env: ROLLOUT_TOKEN
  # Per-request timeout for platform calls
  # request_timeout: 5s

# Bounds on status polling after a deployment is submitted
# poll:
#   interval: 1s
#   deadline: 10m
#   not_found_limit: 5
"#,
        config.platform.endpoint
    )
}
