// ABOUTME: Capability traits for the container platform API.
// ABOUTME: Deployment history, deployment creation, and registry image listing.

use super::error::ApiError;
use super::types::{Deployment, DeploymentRequest, RegistryImage};
use crate::types::{ServiceName, Version};
use async_trait::async_trait;

/// Deployment operations on a container service.
///
/// Implemented by [`HttpPlatform`](super::HttpPlatform) in production and by
/// scripted fakes in tests.
#[async_trait]
pub trait DeploymentApi: Send + Sync {
    /// Fetch the service's deployment history. Order is not guaranteed.
    async fn list_deployments(&self, service: &ServiceName) -> Result<Vec<Deployment>, ApiError>;

    /// Create a new deployment and return the version the platform assigned.
    async fn create_deployment(
        &self,
        service: &ServiceName,
        request: &DeploymentRequest,
    ) -> Result<Version, ApiError>;
}

/// Registry image operations on a container service.
#[async_trait]
pub trait ImageApi: Send + Sync {
    /// List images pushed for the service, newest first.
    async fn list_images(&self, service: &ServiceName) -> Result<Vec<RegistryImage>, ApiError>;
}
