// ABOUTME: Deploy command implementation.
// ABOUTME: Drives the rollout state machine and reports stage progress.

use super::connection::connect;
use rollout::config::Config;
use rollout::deploy::Rollout;
use rollout::error::Result;
use rollout::output::Output;
use rollout::types::ServiceName;

/// Redeploy a service onto its newest registry images.
pub async fn deploy(config: &Config, service: ServiceName, output: &mut Output) -> Result<()> {
    output.start_timer();
    let platform = connect(config)?;

    output.progress(&format!("Deploying {service}"));
    let located = Rollout::new(service).locate(&platform).await?;
    output.progress(&format!(
        "Active deployment is version {}",
        located.active_version()
    ));

    let resolved = located.resolve_images(&platform).await?;
    let images = resolved
        .images()
        .iter()
        .map(|(name, image)| format!("{name}={image}"))
        .collect::<Vec<_>>()
        .join(", ");
    output.progress(&format!("New container images: {images}"));

    let submitted = resolved.submit(&platform).await?;
    output.progress(&format!("Deploying version {}", submitted.version()));

    let completed = submitted.wait_active(&platform, &config.poll).await?;
    output.deployed(completed.service().as_str(), completed.version());

    Ok(())
}
