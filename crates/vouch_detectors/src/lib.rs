//! Credential detectors for vouch.
//!
//! Each detector implements the [`vouch_core::Detector`] contract: locate
//! candidate secrets for one credential family in a chunk of bytes and,
//! optionally, verify them against the issuing service.
//!
//! # Feature Flags
//!
//! - `tracing`: emit `tracing` events for pre-filter skips, matches, and
//!   probe outcomes. Off by default; installing a subscriber is the host's
//!   concern.

/// Version control system credential detectors.
pub mod vcs;

pub use vcs::{GitLabConfig, GitLabDetector};
