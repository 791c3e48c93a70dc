// ABOUTME: Rollout orchestration using the type state pattern.
// ABOUTME: Exports stage types and the Rollout struct for compile-time safe redeployments.

mod carryover;
mod error;
mod poll;
mod resolver;
mod rollout;
mod state;
mod transitions;

pub use error::RolloutError;
pub use poll::PollPolicy;
pub use rollout::Rollout;
pub use state::{Completed, Initialized, Located, Resolved, Submitted};
