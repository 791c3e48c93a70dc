// ABOUTME: Stage transition methods for the rollout workflow.
// ABOUTME: Each method consumes self and returns the next stage on success.

use crate::api::{DeploymentApi, DeploymentRequest, DeploymentState, ImageApi};

use super::Rollout;
use super::carryover::carryover;
use super::error::RolloutError;
use super::poll::{PollPolicy, wait_for_version};
use super::resolver::newest_images;
use super::state::{Completed, Initialized, Located, Resolved, Submitted};

// =============================================================================
// Initialized -> Located
// =============================================================================

impl Rollout<Initialized> {
    /// Locate the active deployment in the service's history.
    ///
    /// # Errors
    ///
    /// Returns `RolloutError::NoDeployments` if the service has never been
    /// deployed, and `RolloutError::NoActiveDeployment` if the history has
    /// entries but none is in the active state.
    #[must_use = "rollout stage must be used"]
    pub async fn locate<A: DeploymentApi>(
        self,
        api: &A,
    ) -> Result<Rollout<Located>, RolloutError> {
        let deployments = api.list_deployments(&self.service).await?;
        if deployments.is_empty() {
            return Err(RolloutError::NoDeployments);
        }

        let active = deployments
            .into_iter()
            .find(|d| d.state == DeploymentState::Active)
            .ok_or(RolloutError::NoActiveDeployment)?;

        Ok(Rollout {
            service: self.service,
            state: Located { active },
        })
    }
}

// =============================================================================
// Located -> Resolved
// =============================================================================

impl Rollout<Located> {
    /// Resolve the newest registry image for each container name.
    ///
    /// The feed is newest-first, so the first image seen per logical name
    /// wins. Scanning stops once every container in the active deployment is
    /// covered.
    ///
    /// # Errors
    ///
    /// Returns the underlying error if the image feed cannot be fetched.
    #[must_use = "rollout stage must be used"]
    pub async fn resolve_images<A: ImageApi>(
        self,
        api: &A,
    ) -> Result<Rollout<Resolved>, RolloutError> {
        let feed = api.list_images(&self.service).await?;
        let active = self.state.active;
        let images = newest_images(&feed, active.containers.keys().map(String::as_str));

        Ok(Rollout {
            service: self.service,
            state: Resolved { active, images },
        })
    }
}

// =============================================================================
// Resolved -> Submitted
// =============================================================================

impl Rollout<Resolved> {
    /// Submit a new deployment carrying the active configuration over onto
    /// the resolved images.
    ///
    /// The public endpoint is reused verbatim; only the image field of each
    /// container changes.
    ///
    /// # Errors
    ///
    /// Returns `RolloutError::NoImageForContainer` before anything is
    /// submitted if a container has no resolved image, or the platform's
    /// rejection if the create call fails.
    #[must_use = "rollout stage must be used"]
    pub async fn submit<A: DeploymentApi>(
        self,
        api: &A,
    ) -> Result<Rollout<Submitted>, RolloutError> {
        let containers = carryover(&self.state.active, &self.state.images)?;
        let request = DeploymentRequest {
            containers,
            public_endpoint: self.state.active.public_endpoint.clone(),
        };

        let version = api.create_deployment(&self.service, &request).await?;

        Ok(Rollout {
            service: self.service,
            state: Submitted { version },
        })
    }
}

// =============================================================================
// Submitted -> Completed
// =============================================================================

impl Rollout<Submitted> {
    /// Poll the deployment history until the submitted version reaches a
    /// terminal state, bounded by the poll policy's deadline.
    ///
    /// # Errors
    ///
    /// Returns `RolloutError::DeploymentFailed` with the platform's reason if
    /// activation fails, and distinct errors for a superseded, unrecognized,
    /// or never-appearing version. `RolloutError::DeadlineExceeded` bounds
    /// the wait overall.
    #[must_use = "rollout stage must be used"]
    pub async fn wait_active<A: DeploymentApi>(
        self,
        api: &A,
        policy: &PollPolicy,
    ) -> Result<Rollout<Completed>, RolloutError> {
        let version = self.state.version;
        wait_for_version(api, &self.service, version, policy).await?;

        Ok(Rollout {
            service: self.service,
            state: Completed { version },
        })
    }
}
