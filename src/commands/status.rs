// ABOUTME: Status command implementation.
// ABOUTME: Shows the deployment history for a service, newest first.

use super::connection::connect;
use rollout::api::{DeploymentApi, DeploymentState};
use rollout::config::Config;
use rollout::error::Result;
use rollout::output::{Output, OutputMode};
use rollout::types::ServiceName;

/// Show the deployment history for a service.
///
/// Quiet mode prints only the active version, for scripting.
pub async fn status(config: &Config, service: ServiceName, output: &Output) -> Result<()> {
    let platform = connect(config)?;

    let mut deployments = platform.list_deployments(&service).await?;
    deployments.sort_by(|a, b| b.version.cmp(&a.version));

    match output.mode() {
        OutputMode::Json => {
            if let Ok(json) = serde_json::to_string(&deployments) {
                println!("{json}");
            }
        }
        OutputMode::Quiet => {
            if let Some(active) = deployments
                .iter()
                .find(|d| d.state == DeploymentState::Active)
            {
                println!("{}", active.version);
            }
        }
        OutputMode::Normal => {
            println!("{:<10}{:<13}{}", "VERSION", "STATE", "CREATED");
            for d in &deployments {
                let created = d
                    .created_at
                    .map(|t| t.to_rfc3339())
                    .unwrap_or_else(|| "-".to_string());
                println!("{:<10}{:<13}{}", d.version, d.state, created);
                if let Some(reason) = &d.state_reason {
                    println!("          reason: {reason}");
                }
            }
        }
    }

    Ok(())
}
