//! Key material lifecycle.
//!
//! This module provides:
//! - The hex line file format shared by both artifacts (`artifact`)
//! - Bundle generation and persistence (`generator`)
//! - Cross-location integrity verification (`verifier`)

pub mod artifact;
pub mod generator;
pub mod verifier;

pub use artifact::ArtifactKind;
pub use generator::generate;
pub use verifier::{verify, IntegrityFailure, Outcome};
