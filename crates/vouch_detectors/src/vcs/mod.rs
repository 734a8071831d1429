//! Detectors for version control system credentials.

mod gitlab;

pub use gitlab::{Candidate, GitLabConfig, GitLabDetector};
