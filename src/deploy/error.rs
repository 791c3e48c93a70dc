// ABOUTME: Error types for the rollout workflow.
// ABOUTME: Covers locating, resolving, submitting, and polling failures.

use crate::api::ApiError;
use crate::types::Version;
use std::time::Duration;

/// Errors that can occur during rollout stage transitions.
#[derive(Debug, thiserror::Error)]
pub enum RolloutError {
    /// The service has never been deployed.
    #[error("no deployments for service, create the first one manually")]
    NoDeployments,

    /// The history has entries but none is in the active state.
    #[error("no deployment in the service history is active")]
    NoActiveDeployment,

    /// A container in the active deployment has no resolved image.
    #[error("no registry image found for container {container}")]
    NoImageForContainer { container: String },

    /// The submitted deployment reached the failed state.
    #[error("deployment {version} failed: {reason}")]
    DeploymentFailed { version: Version, reason: String },

    /// The submitted version stayed absent from the history.
    #[error("deployment {version} never appeared in the deployment history")]
    VersionNotFound { version: Version },

    /// Another deployment replaced the submitted one before it went active.
    #[error("deployment {version} was superseded before becoming active")]
    DeploymentSuperseded { version: Version },

    /// The platform reported a state this client does not recognize.
    #[error("deployment {version} entered an unrecognized state")]
    UnexpectedState { version: Version },

    /// The poll deadline elapsed without a terminal state.
    #[error("deployment {version} did not reach a terminal state within {deadline:?}")]
    DeadlineExceeded { version: Version, deadline: Duration },

    /// A platform call failed or timed out.
    #[error("platform call failed: {0}")]
    Api(#[from] ApiError),
}
