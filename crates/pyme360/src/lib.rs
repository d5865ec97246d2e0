//! Credit and trust scoring for the PyME360 SME platform.
//!
//! The [`scoring`] module owns the pure scoring engine together with the service, store seam,
//! and HTTP router that expose it. Configuration, telemetry, and error plumbing are shared
//! with the `pyme360-api` service crate.

pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;
