// ABOUTME: HTTP implementation of the platform API traits.
// ABOUTME: JSON over HTTPS with bearer auth and per-request timeouts.

use super::error::ApiError;
use super::traits::{DeploymentApi, ImageApi};
use super::types::{Deployment, DeploymentRequest, RegistryImage};
use crate::types::{ServiceName, Version};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, header};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// JSON-over-HTTP client for the container platform.
pub struct HttpPlatform {
    client: Client,
    base_url: String,
    token: String,
}

impl HttpPlatform {
    /// Build a client for the given endpoint.
    ///
    /// Every request is bounded by `request_timeout`; a call that exceeds it
    /// fails instead of hanging the workflow.
    pub fn new(
        endpoint: &str,
        token: String,
        request_timeout: Duration,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|source| ApiError::Transport {
                url: endpoint.to_string(),
                source,
            })?;

        Ok(Self {
            client,
            base_url: endpoint.trim_end_matches('/').to_string(),
            token,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        service: &ServiceName,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
            .send()
            .await
            .map_err(|e| map_send_error(e, &url))?;

        let response = check_status(response, service).await?;
        response
            .json()
            .await
            .map_err(|source| ApiError::Decode { url, source })
    }

    async fn post_json<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        service: &ServiceName,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
            .json(body)
            .send()
            .await
            .map_err(|e| map_send_error(e, &url))?;

        let response = check_status(response, service).await?;
        response
            .json()
            .await
            .map_err(|source| ApiError::Decode { url, source })
    }
}

// =============================================================================
// Error Mapping Helpers
// =============================================================================

fn map_send_error(e: reqwest::Error, url: &str) -> ApiError {
    if e.is_timeout() {
        ApiError::Timeout {
            url: url.to_string(),
        }
    } else {
        ApiError::Transport {
            url: url.to_string(),
            source: e,
        }
    }
}

async fn check_status(response: Response, service: &ServiceName) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    Err(match status {
        StatusCode::NOT_FOUND => ApiError::ServiceNotFound {
            service: service.to_string(),
        },
        s if s.is_client_error() => ApiError::Rejected {
            status: s.as_u16(),
            message,
        },
        s => ApiError::Server {
            status: s.as_u16(),
            message,
        },
    })
}

// =============================================================================
// Wire Envelopes
// =============================================================================

#[derive(Deserialize)]
struct DeploymentsResponse {
    deployments: Vec<Deployment>,
}

#[derive(Deserialize)]
struct ImagesResponse {
    images: Vec<RegistryImage>,
}

#[derive(Deserialize)]
struct CreateResponse {
    service: ServiceSnapshot,
}

#[derive(Deserialize)]
struct ServiceSnapshot {
    #[serde(default)]
    next_deployment: Option<NextDeployment>,
}

#[derive(Deserialize)]
struct NextDeployment {
    version: Version,
}

// =============================================================================
// Trait Implementations
// =============================================================================

#[async_trait]
impl DeploymentApi for HttpPlatform {
    async fn list_deployments(&self, service: &ServiceName) -> Result<Vec<Deployment>, ApiError> {
        let path = format!("/v1/services/{}/deployments", service);
        let body: DeploymentsResponse = self.get_json(&path, service).await?;
        Ok(body.deployments)
    }

    async fn create_deployment(
        &self,
        service: &ServiceName,
        request: &DeploymentRequest,
    ) -> Result<Version, ApiError> {
        let path = format!("/v1/services/{}/deployments", service);
        let body: CreateResponse = self.post_json(&path, service, request).await?;
        let next = body.service.next_deployment.ok_or(ApiError::Contract {
            field: "service.next_deployment",
        })?;
        Ok(next.version)
    }
}

#[async_trait]
impl ImageApi for HttpPlatform {
    async fn list_images(&self, service: &ServiceName) -> Result<Vec<RegistryImage>, ApiError> {
        let path = format!("/v1/services/{}/images", service);
        let body: ImagesResponse = self.get_json(&path, service).await?;
        Ok(body.images)
    }
}
