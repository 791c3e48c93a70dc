// ABOUTME: Generic rollout struct parameterized by stage type.
// ABOUTME: Stage types carry their own data for compile-time guarantees.

use crate::api::Deployment;
use crate::types::{ServiceName, Version};
use std::collections::BTreeMap;

use super::state::{Completed, Initialized, Located, Resolved, Submitted};

/// A redeployment in progress, parameterized by its current stage.
///
/// The stage type parameter `S` carries stage-specific data (the located
/// deployment, the resolved image map, the assigned version) directly in the
/// stage type. This enforces at compile time that each transition only runs
/// once its inputs exist.
#[derive(Debug)]
pub struct Rollout<S> {
    pub(crate) service: ServiceName,
    pub(crate) state: S,
}

impl Rollout<Initialized> {
    /// Start a rollout for the given service.
    pub fn new(service: ServiceName) -> Self {
        Rollout {
            service,
            state: Initialized,
        }
    }
}

impl<S> Rollout<S> {
    /// Get the service this rollout targets.
    pub fn service(&self) -> &ServiceName {
        &self.service
    }
}

// Stage-specific accessors

impl Rollout<Located> {
    /// Get the active deployment found in the service history.
    pub fn active(&self) -> &Deployment {
        &self.state.active
    }

    /// Get the version of the active deployment.
    pub fn active_version(&self) -> Version {
        self.state.active.version
    }
}

impl Rollout<Resolved> {
    /// Get the active deployment the new configuration is built from.
    pub fn active(&self) -> &Deployment {
        &self.state.active
    }

    /// Get the newest image resolved per logical container name.
    pub fn images(&self) -> &BTreeMap<String, String> {
        &self.state.images
    }
}

impl Rollout<Submitted> {
    /// Get the version the platform assigned to the new deployment.
    pub fn version(&self) -> Version {
        self.state.version
    }
}

impl Rollout<Completed> {
    /// Get the version that reached the active state.
    pub fn version(&self) -> Version {
        self.state.version
    }
}
