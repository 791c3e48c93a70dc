// ABOUTME: Test support utilities.
// ABOUTME: Provides the scripted platform fake and deployment fixtures.

// Each test binary only uses some of these modules, so allow dead_code.
#[allow(dead_code)]
pub mod platform;
