// ABOUTME: Scripted in-memory platform API for workflow tests.
// ABOUTME: Replays queued responses and records every call it receives.

use async_trait::async_trait;
use rollout::api::{
    ApiError, ContainerSpec, Deployment, DeploymentApi, DeploymentRequest, DeploymentState,
    HealthCheck, ImageApi, Protocol, PublicEndpoint, RegistryImage,
};
use rollout::types::{ServiceName, Version};
use std::collections::{BTreeMap, VecDeque};
use std::sync::Mutex;

/// One call received by the scripted platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    ListDeployments,
    ListImages,
    CreateDeployment,
}

/// Platform fake that replays scripted responses in order.
///
/// Each API call pops the next queued response for that operation and panics
/// if the queue is empty, so a test that makes more calls than it scripted
/// fails loudly instead of hanging.
#[derive(Default)]
pub struct ScriptedPlatform {
    deployments: Mutex<VecDeque<Result<Vec<Deployment>, ApiError>>>,
    images: Mutex<VecDeque<Result<Vec<RegistryImage>, ApiError>>>,
    creates: Mutex<VecDeque<Result<Version, ApiError>>>,
    calls: Mutex<Vec<Call>>,
    submitted: Mutex<Vec<DeploymentRequest>>,
}

impl ScriptedPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the response for the next `list_deployments` call.
    pub fn script_deployments(&self, response: Result<Vec<Deployment>, ApiError>) {
        self.deployments.lock().unwrap().push_back(response);
    }

    /// Queue the response for the next `list_images` call.
    pub fn script_images(&self, response: Result<Vec<RegistryImage>, ApiError>) {
        self.images.lock().unwrap().push_back(response);
    }

    /// Queue the response for the next `create_deployment` call.
    pub fn script_create(&self, response: Result<Version, ApiError>) {
        self.creates.lock().unwrap().push_back(response);
    }

    /// Every call received so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Requests passed to `create_deployment`, in order.
    pub fn submitted(&self) -> Vec<DeploymentRequest> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl DeploymentApi for ScriptedPlatform {
    async fn list_deployments(&self, _service: &ServiceName) -> Result<Vec<Deployment>, ApiError> {
        self.calls.lock().unwrap().push(Call::ListDeployments);
        self.deployments
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted response left for list_deployments")
    }

    async fn create_deployment(
        &self,
        _service: &ServiceName,
        request: &DeploymentRequest,
    ) -> Result<Version, ApiError> {
        self.calls.lock().unwrap().push(Call::CreateDeployment);
        self.submitted.lock().unwrap().push(request.clone());
        self.creates
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted response left for create_deployment")
    }
}

#[async_trait]
impl ImageApi for ScriptedPlatform {
    async fn list_images(&self, _service: &ServiceName) -> Result<Vec<RegistryImage>, ApiError> {
        self.calls.lock().unwrap().push(Call::ListImages);
        self.images
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted response left for list_images")
    }
}

// =============================================================================
// Fixtures
// =============================================================================

/// A service name that passes validation.
pub fn service(name: &str) -> ServiceName {
    ServiceName::new(name).expect("valid service name")
}

/// A container spec with distinctive non-image fields, so carryover
/// assertions can check they survive untouched.
pub fn spec(image: &str) -> ContainerSpec {
    ContainerSpec {
        image: image.to_string(),
        command: vec!["./serve".to_string(), "--config=/etc/app.yml".to_string()],
        environment: BTreeMap::from([
            ("APP_ENV".to_string(), "production".to_string()),
            ("PORT".to_string(), "8080".to_string()),
        ]),
        ports: BTreeMap::from([(8080, Protocol::Http)]),
    }
}

/// A deployment revision with the given per-container images.
pub fn deployment(version: u64, state: DeploymentState, containers: &[(&str, &str)]) -> Deployment {
    Deployment {
        version: Version::from(version),
        state,
        containers: containers
            .iter()
            .map(|(name, image)| (name.to_string(), spec(image)))
            .collect(),
        public_endpoint: Some(endpoint()),
        created_at: None,
        state_reason: None,
    }
}

/// A public endpoint with a full health check, as the platform reports it.
pub fn endpoint() -> PublicEndpoint {
    PublicEndpoint {
        container_name: "web".to_string(),
        container_port: 8080,
        health_check: Some(HealthCheck {
            path: Some("/healthz".to_string()),
            success_codes: Some("200-399".to_string()),
            interval_seconds: Some(10),
            timeout_seconds: Some(2),
            healthy_threshold: Some(2),
            unhealthy_threshold: Some(3),
        }),
    }
}

/// A registry feed entry.
pub fn image(reference: &str) -> RegistryImage {
    RegistryImage {
        image: reference.to_string(),
        digest: None,
        created_at: None,
    }
}
