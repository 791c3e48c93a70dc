// ABOUTME: Application-wide error types for rollout.
// ABOUTME: Uses thiserror for ergonomic error handling.

use crate::api::ApiError;
use crate::deploy::RolloutError;
use crate::types::ServiceNameError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("file already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("configuration file not found in {0}")]
    ConfigNotFound(PathBuf),

    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid service name: {0}")]
    InvalidServiceName(#[from] ServiceNameError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("platform call failed: {0}")]
    Api(#[from] ApiError),

    #[error("deploy failed: {0}")]
    Rollout(#[from] RolloutError),
}

pub type Result<T> = std::result::Result<T, Error>;
