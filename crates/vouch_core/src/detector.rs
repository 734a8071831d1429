use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::error::DetectorError;
use crate::result::DetectionResult;

/// A pinned, boxed, `Send` future used as the return type for async detection.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Identifies the credential family a detector (and its results) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectorType {
    /// GitLab personal access tokens.
    GitLab,
}

impl DetectorType {
    /// Returns the human-readable display name for this credential family.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::GitLab => "GitLab",
        }
    }

    /// Returns the lowercase string identifier used for result tagging.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GitLab => "gitlab",
        }
    }
}

impl std::fmt::Display for DetectorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A detector for one credential family.
///
/// Each detector locates candidate secrets in a chunk of bytes and optionally
/// verifies them against the issuing service. Implementations hold only
/// read-only configuration fixed at construction, so a single instance can
/// serve concurrent scans.
pub trait Detector: Send + Sync {
    /// Returns the literal keywords a chunk must contain for this detector to
    /// possibly match. Hosts use these for cheap pre-filtering before calling
    /// [`Detector::from_data`].
    fn keywords(&self) -> &'static [&'static str];

    /// Scans `data` for candidate secrets, verifying each against the issuing
    /// service when `verify` is `true`.
    ///
    /// With `verify` set to `false`, no network I/O is performed and every
    /// result carries `verified = false`. Dropping the returned future cancels
    /// any in-flight verification request.
    fn from_data<'a>(
        &'a self,
        verify: bool,
        data: &'a [u8],
    ) -> BoxFuture<'a, Result<Vec<DetectionResult>, DetectorError>>;

    /// Returns the credential family this detector reports under.
    fn detector_type(&self) -> DetectorType;

    /// Returns the version of this detector's matching logic, used by hosts
    /// for staged rollout of detection changes.
    fn version(&self) -> u32 {
        1
    }
}
