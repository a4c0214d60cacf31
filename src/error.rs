//! Crate-wide error type and `Result` alias.
//!
//! Nothing in this crate recovers from a failure locally: a broken fixture
//! directory or an undecodable fixture is a test-environment bug, so every
//! error surfaces to the calling test unmodified.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GeoreplayError>;

/// All failure modes of the replay cache.
#[derive(Debug, Error)]
pub enum GeoreplayError {
    /// The delegate transport failed (network, DNS, TLS). Propagated
    /// verbatim and never retried.
    #[error("transport error: {0}")]
    Transport(String),

    /// Reading or writing a cache file failed for a reason other than the
    /// file not existing. Fatal: the fixture directory is misconfigured.
    #[error("cache I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A cache file exists and is readable but its contents cannot be
    /// decoded. Fatal by design: silently re-fetching would mask fixture
    /// corruption.
    #[error("corrupt fixture at {}: {reason}", path.display())]
    CorruptFixture { path: PathBuf, reason: String },

    /// The request URL could not be parsed, so no host segment or cache key
    /// can be derived from it.
    #[error("invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
