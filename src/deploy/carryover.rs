// ABOUTME: Container configuration carryover for the new deployment.
// ABOUTME: Copies everything except the image field, which takes the resolved newest image.

use crate::api::{ContainerSpec, Deployment};
use std::collections::BTreeMap;

use super::error::RolloutError;

/// Build the container map for the new deployment from the active one.
///
/// Command, environment, and ports are copied unchanged for every container;
/// only the image field is replaced. The output key set always equals the
/// active deployment's key set.
///
/// # Errors
///
/// Returns `RolloutError::NoImageForContainer` if a container in the active
/// deployment has no resolved image, so an empty image reference is never
/// submitted.
pub(crate) fn carryover(
    active: &Deployment,
    images: &BTreeMap<String, String>,
) -> Result<BTreeMap<String, ContainerSpec>, RolloutError> {
    let mut containers = BTreeMap::new();
    for (name, spec) in &active.containers {
        let image = images
            .get(name)
            .ok_or_else(|| RolloutError::NoImageForContainer {
                container: name.clone(),
            })?;

        containers.insert(
            name.clone(),
            ContainerSpec {
                image: image.clone(),
                command: spec.command.clone(),
                environment: spec.environment.clone(),
                ports: spec.ports.clone(),
            },
        );
    }

    Ok(containers)
}
