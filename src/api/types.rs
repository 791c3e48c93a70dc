// ABOUTME: Wire model for the container platform API.
// ABOUTME: Deployments, container specs, registry images, and create requests.

use crate::types::Version;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One revision in a service's deployment history.
///
/// Immutable snapshot once fetched; the platform owns all lifecycle
/// transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    /// Version number assigned by the platform, increasing per service.
    pub version: Version,
    /// Lifecycle state of this revision.
    pub state: DeploymentState,
    /// Containers launched by this revision, keyed by logical name.
    pub containers: BTreeMap<String, ContainerSpec>,
    /// Public endpoint routing, if the service is exposed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_endpoint: Option<PublicEndpoint>,
    /// When the platform recorded this revision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Platform diagnostic, populated for failed revisions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_reason: Option<String>,
}

/// Lifecycle state of a deployment revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentState {
    /// Containers are starting; the revision is not serving yet.
    Activating,
    /// Serving traffic.
    Active,
    /// Superseded by a newer revision.
    Inactive,
    /// Activation failed.
    Failed,
    /// A state string this client does not recognize.
    #[serde(other)]
    Unknown,
}

impl DeploymentState {
    /// Whether the platform will not change this state any further.
    pub fn is_terminal(self) -> bool {
        !matches!(self, DeploymentState::Activating)
    }
}

impl fmt::Display for DeploymentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DeploymentState::Activating => "activating",
            DeploymentState::Active => "active",
            DeploymentState::Inactive => "inactive",
            DeploymentState::Failed => "failed",
            DeploymentState::Unknown => "unknown",
        })
    }
}

/// Per-container settings within a deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerSpec {
    /// Registry image reference to run.
    pub image: String,
    /// Launch command. Empty means the image default.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub command: Vec<String>,
    /// Environment variables.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub environment: BTreeMap<String, String>,
    /// Open ports, keyed by container port.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub ports: BTreeMap<u16, Protocol>,
}

/// Protocol served on an open container port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Http,
    Https,
    Tcp,
    Udp,
}

/// Public endpoint routing for a deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicEndpoint {
    /// Container that receives public traffic.
    pub container_name: String,
    /// Port on that container.
    pub container_port: u16,
    /// Health check probing the endpoint container.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_check: Option<HealthCheck>,
}

/// Health check settings on a public endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheck {
    /// Path probed on the endpoint container.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Status codes counted as healthy, e.g. "200-499".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_codes: Option<String>,
    /// Seconds between probes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_seconds: Option<u32>,
    /// Seconds before a probe times out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u32>,
    /// Consecutive successes before the endpoint counts as healthy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub healthy_threshold: Option<u32>,
    /// Consecutive failures before the endpoint counts as unhealthy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unhealthy_threshold: Option<u32>,
}

/// An image pushed to the service's registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryImage {
    /// Reference the image is stored under.
    pub image: String,
    /// Content digest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
    /// Push time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Request body for creating a deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentRequest {
    /// Containers for the new revision, keyed by logical name.
    pub containers: BTreeMap<String, ContainerSpec>,
    /// Public endpoint, carried over from the previous revision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_endpoint: Option<PublicEndpoint>,
}
