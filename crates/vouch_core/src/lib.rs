//! Detector contract and verification primitives for vouch.
//!
//! This crate defines the plugin surface that credential detectors implement
//! and the shared pieces every detector needs: the tri-state verification
//! verdict and its fold, the HTTP client factory, the false-positive store,
//! and the keyword-context pattern helper.
//!
//! # Main Types
//!
//! - [`Detector`] - The plugin contract hosts drive scans through
//! - [`DetectionResult`] - A detected credential with its verification flag
//! - [`Verdict`] - The outcome of probing one verifier endpoint
//! - [`FalsePositives`] - Known-noise filter for unverified candidates
//!
//! # Error Handling
//!
//! This crate uses [`thiserror`] for structured, typed errors that library
//! consumers can match on. Every failure is construction-time
//! ([`DetectorError`]); a running scan degrades rather than fails.

/// The detector plugin contract and credential family tags.
pub mod detector;
/// Error types for detector construction.
pub mod error;
/// Known-noise filtering for unverified candidates.
pub mod false_positives;
/// Shared HTTP client construction for verification probes.
pub mod http;
/// Regex fragment helpers shared by detector patterns.
pub mod pattern;
/// Detection results produced by scans.
pub mod result;
/// Verification verdicts and the rules for combining them.
pub mod verify;

pub use detector::{BoxFuture, Detector, DetectorType};
pub use error::DetectorError;
pub use false_positives::FalsePositives;
pub use http::verification_client;
pub use result::DetectionResult;
pub use verify::{Verdict, fold_verdicts};
