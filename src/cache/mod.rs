//! Fixture caching: key derivation, on-disk envelope, record/replay client.

pub mod fixture;
pub mod key;
pub mod response_cache;

pub use key::{derive, CacheKey, Redactor, API_KEY_PLACEHOLDER, APP_CODE_PLACEHOLDER};
pub use response_cache::CachedClient;
