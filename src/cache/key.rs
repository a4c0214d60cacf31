//! Cache key derivation and secret redaction.
//!
//! A request is fingerprinted into `{host}_{sha1(material)}` where the
//! material is the full URL (plus the raw body for POST requests) with every
//! configured secret replaced by a fixed placeholder BEFORE hashing. Redact,
//! then hash: a fixture recorded under one API key replays under the next
//! one, and the key material checked into version control never contains a
//! live credential.

use aho_corasick::{AhoCorasick, MatchKind};
use sha1::{Digest, Sha1};
use url::Url;

use crate::error::Result;
use crate::transport::{Method, Request};

/// Placeholder substituted for the API key by [`Redactor::api_key`].
pub const API_KEY_PLACEHOLDER: &str = "[apikey]";

/// Placeholder substituted for the application code by [`Redactor::api_key_and_app_code`].
pub const APP_CODE_PLACEHOLDER: &str = "[appCode]";

/// Substitutes configured secrets with fixed placeholders in key material.
///
/// Holds an ordered list of secret/placeholder pairs compiled into a single
/// multi-pattern matcher at construction. Empty secrets are dropped, so an
/// unset token makes redaction a no-op rather than an error.
pub struct Redactor {
    matcher: Option<AhoCorasick>,
    placeholders: Vec<Vec<u8>>,
}

impl Redactor {
    /// A redactor with the given secret/placeholder pairs.
    ///
    /// Overlapping secrets are resolved leftmost-longest, so a secret that
    /// is a prefix of another never shadows it.
    pub fn new<S, P>(pairs: impl IntoIterator<Item = (S, P)>) -> Self
    where
        S: Into<String>,
        P: Into<String>,
    {
        let (secrets, placeholders): (Vec<String>, Vec<Vec<u8>>) = pairs
            .into_iter()
            .map(|(s, p)| (s.into(), p.into().into_bytes()))
            .filter(|(s, _)| !s.is_empty())
            .unzip();
        if secrets.is_empty() {
            return Self::none();
        }
        let matcher = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&secrets)
            .expect("literal secret patterns fit automaton limits");
        Self {
            matcher: Some(matcher),
            placeholders,
        }
    }

    /// No redaction: the key material is hashed as-is.
    pub fn none() -> Self {
        Self {
            matcher: None,
            placeholders: Vec::new(),
        }
    }

    /// The common single-secret case: one API key, placeholder `[apikey]`.
    ///
    /// `None` or an empty string disables redaction.
    pub fn api_key(key: Option<&str>) -> Self {
        match key {
            Some(k) if !k.is_empty() => Self::new([(k, API_KEY_PLACEHOLDER)]),
            _ => Self::none(),
        }
    }

    /// API key plus application code, as some providers authenticate with
    /// both. Placeholders `[apikey]` and `[appCode]`.
    pub fn api_key_and_app_code(key: Option<&str>, app_code: Option<&str>) -> Self {
        let mut pairs = Vec::new();
        if let Some(k) = key.filter(|k| !k.is_empty()) {
            pairs.push((k, API_KEY_PLACEHOLDER));
        }
        if let Some(c) = app_code.filter(|c| !c.is_empty()) {
            pairs.push((c, APP_CODE_PLACEHOLDER));
        }
        Self::new(pairs)
    }

    /// Replace every occurrence of every configured secret in `material`.
    pub fn redact(&self, material: &[u8]) -> Vec<u8> {
        match &self.matcher {
            Some(matcher) => matcher.replace_all_bytes(material, &self.placeholders),
            None => material.to_vec(),
        }
    }
}

/// A derived cache key: human-readable host prefix plus content digest.
///
/// Uniqueness rests entirely on `digest`; `host` only makes the fixture
/// directory scannable by eye.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheKey {
    pub host: String,
    pub digest: String,
}

impl CacheKey {
    /// On-disk file name, `{host}_{digest}`.
    pub fn file_name(&self) -> String {
        format!("{}_{}", self.host, self.digest)
    }
}

/// Derive the cache key for a request.
///
/// Key material is the full URL string; for POST requests the raw body bytes
/// are appended. Bodies on any other method are deliberately ignored, so two
/// GET requests with the same URL always share a key — a historical contract
/// that keeps previously recorded fixtures valid.
///
/// Pure and deterministic: no disk, no network, identical inputs give an
/// identical key.
pub fn derive(request: &Request, redactor: &Redactor) -> Result<CacheKey> {
    let parsed = Url::parse(&request.url)?;
    let host = parsed.host_str().unwrap_or_default().to_string();

    let mut material = request.url.clone().into_bytes();
    if request.method == Method::Post {
        if let Some(body) = &request.body {
            material.extend_from_slice(body);
        }
    }
    let material = redactor.redact(&material);
    let digest = hex::encode(Sha1::digest(&material));

    Ok(CacheKey { host, digest })
}
