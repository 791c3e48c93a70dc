// ABOUTME: Library root for rollout - exposes the redeploy workflow for the CLI and tests.
// ABOUTME: The main binary is in main.rs.

pub mod api;
pub mod config;
pub mod deploy;
pub mod error;
pub mod output;
pub mod types;
