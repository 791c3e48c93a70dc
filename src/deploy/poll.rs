// ABOUTME: Status polling for a submitted deployment.
// ABOUTME: Defines the poll policy and the bounded wait-for-terminal-state loop.

use crate::api::{DeploymentApi, DeploymentState};
use crate::types::{ServiceName, Version};
use serde::Deserialize;
use std::time::Duration;

use super::error::RolloutError;

/// Bounds on the status polling loop.
#[derive(Debug, Clone, Deserialize)]
pub struct PollPolicy {
    /// Time between history fetches while the deployment is activating.
    #[serde(default = "default_interval", with = "humantime_serde")]
    pub interval: Duration,

    /// Overall time budget for reaching a terminal state.
    #[serde(default = "default_deadline", with = "humantime_serde")]
    pub deadline: Duration,

    /// Consecutive fetches tolerated without the submitted version showing
    /// up, before the wait fails. Fresh deployments can lag the create call.
    #[serde(default = "default_not_found_limit")]
    pub not_found_limit: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        PollPolicy {
            interval: default_interval(),
            deadline: default_deadline(),
            not_found_limit: default_not_found_limit(),
        }
    }
}

fn default_interval() -> Duration {
    Duration::from_secs(1)
}

fn default_deadline() -> Duration {
    Duration::from_secs(600)
}

fn default_not_found_limit() -> u32 {
    5
}

/// Poll the deployment history until `version` reaches a terminal state.
///
/// Dropping the returned future cancels the wait at the next await point;
/// the submitted deployment itself keeps activating on the platform.
pub(crate) async fn wait_for_version<A: DeploymentApi>(
    api: &A,
    service: &ServiceName,
    version: Version,
    policy: &PollPolicy,
) -> Result<(), RolloutError> {
    let start = std::time::Instant::now();
    let mut misses = 0;

    while start.elapsed() < policy.deadline {
        let deployments = api.list_deployments(service).await?;

        match deployments.iter().find(|d| d.version == version) {
            None => {
                misses += 1;
                if misses > policy.not_found_limit {
                    return Err(RolloutError::VersionNotFound { version });
                }
            }
            Some(found) => {
                misses = 0;
                match found.state {
                    DeploymentState::Activating => {}
                    DeploymentState::Active => return Ok(()),
                    DeploymentState::Failed => {
                        return Err(RolloutError::DeploymentFailed {
                            version,
                            reason: found
                                .state_reason
                                .clone()
                                .unwrap_or_else(|| "no reason reported".to_string()),
                        });
                    }
                    DeploymentState::Inactive => {
                        return Err(RolloutError::DeploymentSuperseded { version });
                    }
                    DeploymentState::Unknown => {
                        return Err(RolloutError::UnexpectedState { version });
                    }
                }
            }
        }

        tokio::time::sleep(policy.interval).await;
    }

    Err(RolloutError::DeadlineExceeded {
        version,
        deadline: policy.deadline,
    })
}
