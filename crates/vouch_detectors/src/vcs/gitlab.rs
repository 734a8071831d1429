//! GitLab personal access token detection and verification.

use std::fmt;

use aho_corasick::AhoCorasick;
use regex::Regex;
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

use vouch_core::pattern::keyword_context;
use vouch_core::{
    BoxFuture, DetectionResult, Detector, DetectorError, DetectorType, FalsePositives, Verdict,
    fold_verdicts, verification_client,
};

/// Base URL probed when the configuration enables the built-in default.
const DEFAULT_BASE_URL: &str = "https://gitlab.com";

/// Identity endpoint used for verification probes. Reachable under the
/// broadest token scopes but not all of them, hence the 403 handling below.
const IDENTITY_PATH: &str = "/api/v4/user";

/// Marker GitLab has prefixed personal access tokens with since 13.x.
/// Older installations issued bare token bodies, so the pattern treats it
/// as optional.
const TOKEN_MARKER: &str = "glpat";

/// Keywords a chunk must contain before the pattern is worth running.
const KEYWORDS: &[&str] = &["gitlab"];

/// Configuration for [`GitLabDetector`].
///
/// The default configuration probes only the public `https://gitlab.com`
/// API. Self-managed installations add their base URLs through
/// `verifier_urls`; air-gapped hosts disable the built-in default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitLabConfig {
    /// Additional base URLs probed during verification, without a trailing
    /// slash (e.g. `"https://gitlab.example.com"`).
    pub verifier_urls: Vec<String>,
    /// Whether to also probe the built-in `https://gitlab.com`.
    pub include_default_url: bool,
}

impl Default for GitLabConfig {
    fn default() -> Self {
        Self {
            verifier_urls: Vec::new(),
            include_default_url: true,
        }
    }
}

/// A matched token pending verification, borrowed from the scanned text.
#[derive(Clone, Copy)]
pub struct Candidate<'t> {
    raw: &'t str,
    secret: &'t str,
}

impl<'t> Candidate<'t> {
    /// Returns the substring the token pattern captured, before normalization.
    #[must_use]
    pub const fn raw(&self) -> &'t str {
        self.raw
    }

    /// Returns the normalized secret value: whitespace-trimmed, marker
    /// prefix stripped.
    #[must_use]
    pub const fn secret(&self) -> &'t str {
        self.secret
    }
}

impl fmt::Debug for Candidate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Candidate")
            .field("len", &self.secret.len())
            .finish_non_exhaustive()
    }
}

/// Detects GitLab personal access tokens and verifies them against one or
/// more GitLab installations.
///
/// All state is fixed at construction: the compiled pattern, the keyword
/// pre-filter, the endpoint list, the shared HTTP client, and the
/// false-positive store. A single instance can serve concurrent scans.
pub struct GitLabDetector {
    pattern: Regex,
    prefilter: Option<AhoCorasick>,
    verifier_urls: Vec<String>,
    client: reqwest::Client,
    false_positives: FalsePositives,
}

impl fmt::Debug for GitLabDetector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitLabDetector")
            .field("verifier_urls", &self.verifier_urls)
            .finish_non_exhaustive()
    }
}

impl GitLabDetector {
    /// Creates a detector from `config`.
    ///
    /// Compiles the token pattern, builds the keyword pre-filter, and
    /// constructs the shared HTTP client. No network I/O happens here.
    /// Explicitly configured base URLs are probed before the built-in
    /// default, though verification never depends on probe order.
    pub fn new(config: GitLabConfig) -> Result<Self, DetectorError> {
        let context = keyword_context(KEYWORDS);
        let pattern = format!(r"{context}\b((?:{TOKEN_MARKER}|)[a-zA-Z0-9\-=_]{{20,22}})\b");
        let pattern = Regex::new(&pattern).map_err(|source| DetectorError::InvalidPattern {
            id: DetectorType::GitLab.as_str().to_string(),
            source,
        })?;

        let prefilter = AhoCorasick::builder().ascii_case_insensitive(true).build(KEYWORDS).ok();

        let mut verifier_urls = config.verifier_urls;
        if config.include_default_url {
            verifier_urls.push(DEFAULT_BASE_URL.to_string());
        }

        Ok(Self {
            pattern,
            prefilter,
            verifier_urls,
            client: verification_client()?,
            false_positives: FalsePositives::default(),
        })
    }

    /// Replaces the known-noise store consulted for unverified candidates.
    #[must_use]
    pub fn with_false_positives(mut self, false_positives: FalsePositives) -> Self {
        self.false_positives = false_positives;
        self
    }

    /// Returns the base URLs probed during verification.
    #[must_use]
    pub fn verifier_urls(&self) -> &[String] {
        &self.verifier_urls
    }

    /// Extracts candidate tokens from `text` in match order.
    ///
    /// The iterator is lazy and allocation-free; both parts of each
    /// [`Candidate`] borrow from `text`. Duplicate values are kept, as
    /// deduplication is a caller concern.
    pub fn extract<'t>(&self, text: &'t str) -> impl Iterator<Item = Candidate<'t>> {
        self.pattern.captures_iter(text).filter_map(|caps| {
            let full = caps.get(0)?.as_str();
            let capture = caps.get(1)?.as_str();

            Some(Candidate {
                raw: capture,
                secret: normalize(full, capture),
            })
        })
    }

    /// Verifies `secret` against every configured base URL.
    ///
    /// Returns `true` when any installation confirms the token. An empty
    /// endpoint list verifies nothing and returns `false`. Transport
    /// failures and unexpected statuses never abort the remaining probes;
    /// dropping the future cancels an in-flight probe.
    pub async fn verify(&self, secret: &str) -> bool {
        let mut verdicts = Vec::with_capacity(self.verifier_urls.len());

        for base_url in &self.verifier_urls {
            let verdict = self.probe(base_url, secret).await;

            #[cfg(feature = "tracing")]
            debug!(%base_url, %verdict, "probe finished");

            verdicts.push(verdict);
        }

        fold_verdicts(verdicts)
    }

    /// Issues one authenticated identity request against `base_url`.
    async fn probe(&self, base_url: &str, secret: &str) -> Verdict {
        let request = self
            .client
            .get(format!("{base_url}{IDENTITY_PATH}"))
            .header("Authorization", format!("Bearer {secret}"));

        let response = match request.send().await {
            Ok(response) => response,
            Err(_err) => {
                #[cfg(feature = "tracing")]
                debug!(%base_url, error = %_err, "probe failed");
                return Verdict::Inconclusive;
            }
        };

        let status = response.status();
        // Drain the body so the pooled connection can be reused.
        let _body = response.bytes().await;

        classify_status(status.as_u16())
    }

    async fn scan(&self, verify: bool, data: &[u8]) -> Vec<DetectionResult> {
        let text = String::from_utf8_lossy(data);

        if let Some(prefilter) = &self.prefilter
            && !prefilter.is_match(text.as_ref())
        {
            #[cfg(feature = "tracing")]
            debug!("keyword absent, skipping chunk");
            return Vec::new();
        }

        let candidates: Vec<Candidate<'_>> = self.extract(&text).collect();

        #[cfg(feature = "tracing")]
        trace!(candidates = candidates.len(), size = data.len(), "scanning chunk");

        let mut results = Vec::with_capacity(candidates.len());

        for candidate in candidates {
            let mut result =
                DetectionResult::new(DetectorType::GitLab, candidate.secret().as_bytes());

            if verify {
                result.verified = self.verify(candidate.secret()).await;
            }

            if !result.verified && self.false_positives.is_known(candidate.secret(), true) {
                #[cfg(feature = "tracing")]
                debug!("dropping unverified known false positive");
                continue;
            }

            results.push(result);
        }

        results
    }
}

impl Detector for GitLabDetector {
    fn keywords(&self) -> &'static [&'static str] {
        KEYWORDS
    }

    fn from_data<'a>(
        &'a self,
        verify: bool,
        data: &'a [u8],
    ) -> BoxFuture<'a, Result<Vec<DetectionResult>, DetectorError>> {
        Box::pin(async move { Ok(self.scan(verify, data).await) })
    }

    fn detector_type(&self) -> DetectorType {
        DetectorType::GitLab
    }
}

/// Applies the normalization the token pattern requires.
///
/// The capture is whitespace-trimmed. When the overall match contains the
/// `glpat` marker the capture may have bitten off the wrong end of the
/// match, so the value is recomputed as the last whitespace-delimited token
/// of the full match. A surviving marker prefix is then stripped, leaving
/// the bare token body.
fn normalize<'t>(full_match: &'t str, capture: &'t str) -> &'t str {
    let mut value = capture.trim();

    if full_match.contains(TOKEN_MARKER) {
        value = full_match.split_whitespace().next_back().unwrap_or(value);
    }

    if let Some(stripped) = value.strip_prefix(TOKEN_MARKER) {
        value = stripped.strip_prefix('-').unwrap_or(stripped);
    }

    value
}

/// Maps an identity-probe status code onto a verification verdict.
///
/// `200` proves the token works. `403` means the server authenticated the
/// token but its scope cannot read the identity endpoint, which still
/// proves the credential is live. `401` is an affirmative rejection.
/// Everything else proves nothing.
const fn classify_status(status: u16) -> Verdict {
    match status {
        200 | 403 => Verdict::ConfirmedValid,
        401 => Verdict::ConfirmedInvalid,
        _ => Verdict::Inconclusive,
    }
}
