use std::borrow::Cow;
use std::fmt;

use crate::detector::DetectorType;

/// Secrets shorter than this are fully masked in debug output.
const FULL_MASK_THRESHOLD: usize = 8;

/// Mask shown in place of (or inside) a secret.
const MASK_DOTS: &str = "••••••••";

/// A single detected credential, optionally verified against its service.
///
/// Results are created in match order during a scan and are not mutated after
/// the verification stage has run. `raw` holds the normalized secret bytes;
/// the `Debug` impl masks it so results can be logged safely.
#[derive(Clone, PartialEq, Eq)]
pub struct DetectionResult {
    /// The credential family that produced this result.
    pub detector_type: DetectorType,
    /// The normalized secret, as raw bytes.
    pub raw: Box<[u8]>,
    /// Whether a verifier endpoint confirmed the credential is accepted.
    pub verified: bool,
}

impl DetectionResult {
    /// Creates an unverified result for a candidate secret.
    #[must_use]
    pub fn new(detector_type: DetectorType, raw: &[u8]) -> Self {
        Self {
            detector_type,
            raw: raw.into(),
            verified: false,
        }
    }

    /// Returns the raw secret as text, replacing invalid UTF-8.
    #[must_use]
    pub fn raw_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.raw)
    }
}

impl fmt::Debug for DetectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DetectionResult")
            .field("detector_type", &self.detector_type)
            .field("raw", &mask_raw(&self.raw_lossy()))
            .field("verified", &self.verified)
            .finish()
    }
}

fn mask_raw(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    if chars.len() < FULL_MASK_THRESHOLD {
        return MASK_DOTS.to_string();
    }

    // Show 2-character bookends
    let prefix: String = chars[..2].iter().collect();
    let suffix: String = chars[chars.len() - 2..].iter().collect();
    format!("{prefix}{MASK_DOTS}{suffix}")
}
