use serde::{Deserialize, Serialize};

/// The outcome of probing a single verifier endpoint with a candidate secret.
///
/// A probe either proves the credential is accepted, proves it is rejected, or
/// proves nothing at all (timeouts, unexpected statuses, transport failures).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// The endpoint authenticated the credential, even if scope-restricted.
    ConfirmedValid,
    /// The endpoint affirmatively rejected the credential.
    ConfirmedInvalid,
    /// The probe could not determine the credential's status.
    Inconclusive,
}

impl Verdict {
    /// Returns `true` if this verdict proves the credential is accepted.
    #[must_use]
    pub const fn confirms(self) -> bool {
        matches!(self, Self::ConfirmedValid)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConfirmedValid => write!(f, "confirmed_valid"),
            Self::ConfirmedInvalid => write!(f, "confirmed_invalid"),
            Self::Inconclusive => write!(f, "inconclusive"),
        }
    }
}

/// Combines per-endpoint verdicts into a single verified flag.
///
/// A credential counts as verified when any endpoint confirmed it; rejections
/// and inconclusive probes carry no weight, so absence of confirmation is the
/// only way to end up unverified. The fold is commutative: the order the
/// endpoints were probed in never changes the outcome.
#[must_use]
pub fn fold_verdicts<I>(verdicts: I) -> bool
where
    I: IntoIterator<Item = Verdict>,
{
    verdicts.into_iter().any(Verdict::confirms)
}
