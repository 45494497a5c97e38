//! Backend test support utilities
//!
//! Idempotent test logging and assertions for the JSON error envelope,
//! shared by the backend's integration test binaries.

pub mod envelope;
pub mod logging;

pub use envelope::assert_error_envelope;
