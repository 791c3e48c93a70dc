// ABOUTME: Validated domain types shared across the crate.
// ABOUTME: Service names, deployment versions, and stored image references.

mod image_ref;
mod service_name;
mod version;

pub use image_ref::stored_container_name;
pub use service_name::{ServiceName, ServiceNameError};
pub use version::Version;
