// ABOUTME: Rollout stage types for the type state pattern.
// ABOUTME: Each stage carries the data produced by the transition that reached it.

use crate::api::Deployment;
use crate::types::Version;
use std::collections::BTreeMap;

/// Initial stage: nothing fetched yet.
/// Available actions: `locate()`
#[derive(Debug, Clone, Copy, Default)]
pub struct Initialized;

/// Active deployment located in the service history.
/// Available actions: `resolve_images()`
#[derive(Debug, Clone)]
pub struct Located {
    pub(crate) active: Deployment,
}

/// Newest registry image resolved for each container name seen in the feed.
/// Available actions: `submit()`
#[derive(Debug, Clone)]
pub struct Resolved {
    pub(crate) active: Deployment,
    pub(crate) images: BTreeMap<String, String>,
}

/// New deployment submitted; the platform assigned it a version.
/// Available actions: `wait_active()`
#[derive(Debug, Clone)]
pub struct Submitted {
    pub(crate) version: Version,
}

/// Terminal stage: the submitted deployment reached the active state.
#[derive(Debug, Clone)]
pub struct Completed {
    pub(crate) version: Version,
}
