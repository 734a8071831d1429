use std::time::Duration;

use crate::error::DetectorError;

/// HTTP `User-Agent` header sent on every verification request.
const USER_AGENT: &str = concat!("vouch-secret-scanner/", env!("CARGO_PKG_VERSION"));

/// Upper bound on any single verification request.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Builds the shared HTTP client used for credential verification.
///
/// The client enforces a five-second request timeout and identifies itself
/// with the crate's user agent. Detectors build one client at construction
/// and reuse its connection pool across every probe.
pub fn verification_client() -> Result<reqwest::Client, DetectorError> {
    reqwest::Client::builder()
        .timeout(DEFAULT_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| DetectorError::ClientInit(e.to_string()))
}
