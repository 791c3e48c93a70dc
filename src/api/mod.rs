// ABOUTME: Container platform API surface.
// ABOUTME: Capability traits, wire model, unified errors, and the HTTP client.

mod error;
mod http;
mod traits;
mod types;

pub use error::{ApiError, ApiErrorKind};
pub use http::HttpPlatform;
pub use traits::{DeploymentApi, ImageApi};
pub use types::{
    ContainerSpec, Deployment, DeploymentRequest, DeploymentState, HealthCheck, Protocol,
    PublicEndpoint, RegistryImage,
};
