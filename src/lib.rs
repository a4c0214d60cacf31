//! Record/replay cache for outbound HTTP requests in geocoding integration
//! tests.
//!
//! First run against a real provider, the [`CachedClient`] forwards each
//! request to its delegate transport and records the response body under
//! `{cache_dir}/{host}_{sha1(redacted material)}`. Every later run replays
//! the recorded body with no network traffic, so test suites are fast,
//! deterministic, and safe to commit: the configured API key is replaced by
//! a placeholder before the cache key is hashed, so fixtures survive
//! credential rotation and never embed a secret in their name.
//!
//! ```no_run
//! use georeplay::{CachedClient, HttpTransport, Redactor, Request, ReqwestTransport};
//!
//! # fn main() -> georeplay::Result<()> {
//! let client = CachedClient::new(
//!     ReqwestTransport::new(),
//!     "tests/.cached_responses",
//!     Redactor::api_key(std::env::var("GEOCODER_API_KEY").ok().as_deref()),
//! );
//! let response = client.send(&Request::get(
//!     "https://example.com/geocode?q=Paris",
//! ))?;
//! assert_eq!(response.status, 200);
//! # Ok(())
//! # }
//! ```
//!
//! Not a general-purpose HTTP cache: no TTL, no invalidation, no
//! caching-header semantics. A fixture stays authoritative until its file is
//! deleted by hand.

pub mod cache;
pub mod error;
pub mod transport;

pub use cache::{derive, CacheKey, CachedClient, Redactor};
pub use error::{GeoreplayError, Result};
pub use transport::{HttpTransport, Method, Request, ReqwestTransport, Response};
