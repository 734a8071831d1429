use thiserror::Error;

/// Errors that can occur when constructing a detector.
#[derive(Debug, Error)]
pub enum DetectorError {
    /// The detector's secret-matching regular expression failed to compile.
    #[error("invalid regex in detector '{id}': {source}")]
    InvalidPattern {
        /// Identifier of the detector whose pattern failed (e.g. `"gitlab"`).
        id: String,
        /// The underlying regex compilation error.
        #[source]
        source: regex::Error,
    },

    /// The shared HTTP client used for verification could not be initialised.
    #[error("failed to initialize HTTP client: {0}")]
    ClientInit(String),
}
