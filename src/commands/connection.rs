// ABOUTME: Shared helper for connecting to the container platform API.
// ABOUTME: Eliminates duplication across deploy and status commands.

use rollout::api::HttpPlatform;
use rollout::config::Config;
use rollout::error::Result;

/// Build the platform client from the loaded configuration.
///
/// This handles the common pattern of:
/// 1. Resolving the API token (literal or from the environment)
/// 2. Constructing the HTTP client with the per-request timeout
pub fn connect(config: &Config) -> Result<HttpPlatform> {
    let token = config.platform.token.resolve()?;
    let platform = HttpPlatform::new(
        &config.platform.endpoint,
        token,
        config.platform.request_timeout,
    )?;

    Ok(platform)
}
