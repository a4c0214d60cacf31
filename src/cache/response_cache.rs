//! Record/replay transport: serve fixtures from disk, record on miss.
//!
//! `CachedClient` wraps any [`HttpTransport`] and guarantees at most one real
//! network call per distinct (method, URL, POST body) pattern for the
//! lifetime of its cache directory. First matching request: forwarded to the
//! delegate, body persisted to `{cache_dir}/{host}_{digest}`, live response
//! returned untouched. Every later match: the stored body comes back as a
//! synthesized `200` with no headers and no network traffic.
//!
//! There is no TTL, no invalidation, and no freshness check — a fixture is
//! authoritative until the operator deletes the file to force re-recording.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;

use super::fixture;
use super::key::{derive, Redactor};
use crate::error::{GeoreplayError, Result};
use crate::transport::{HttpTransport, Request, Response};

/// Caching wrapper around a delegate transport.
///
/// Implements [`HttpTransport`] itself, so it drops in anywhere the delegate
/// would. Configuration is fixed at construction: the delegate, the fixture
/// directory (which must already exist and be writable — this component
/// never creates it), and the secret redactor.
///
/// Concurrent callers racing on the same key may each hit the network and
/// overwrite each other's file; last writer wins. Accepted for the
/// low-concurrency test harnesses this is built for.
pub struct CachedClient<T: HttpTransport> {
    delegate: T,
    cache_dir: PathBuf,
    redactor: Redactor,
}

impl<T: HttpTransport> CachedClient<T> {
    pub fn new(delegate: T, cache_dir: impl Into<PathBuf>, redactor: Redactor) -> Self {
        Self {
            delegate,
            cache_dir: cache_dir.into(),
            redactor,
        }
    }

    /// The fixture path a request maps to. Handy for operators deleting a
    /// single entry to force re-recording.
    pub fn entry_path(&self, request: &Request) -> Result<PathBuf> {
        let key = derive(request, &self.redactor)?;
        Ok(self.cache_dir.join(key.file_name()))
    }
}

impl<T: HttpTransport> HttpTransport for CachedClient<T> {
    /// Serve from the fixture cache, or delegate and record.
    ///
    /// Failure semantics: delegate errors and cache I/O errors propagate
    /// verbatim, and a readable-but-undecodable fixture is fatal rather than
    /// a silent re-fetch. Nothing is retried.
    fn send(&self, request: &Request) -> Result<Response> {
        let key = derive(request, &self.redactor)?;
        let path = self.cache_dir.join(key.file_name());

        match fs::read(&path) {
            Ok(raw) => {
                debug!(
                    host = %key.host,
                    digest = %&key.digest[..8.min(key.digest.len())],
                    "serving recorded fixture"
                );
                let body = fixture::decode(&raw, &path)?;
                return Ok(Response::replayed(body));
            }
            // Missing or unreadable counts as not recorded; anything else is
            // a broken fixture directory.
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::PermissionDenied) => {}
            Err(e) => return Err(GeoreplayError::Io { path, source: e }),
        }

        debug!(
            host = %key.host,
            digest = %&key.digest[..8.min(key.digest.len())],
            method = %request.method,
            "fixture miss, forwarding to delegate"
        );
        let response = self.delegate.send(request)?;
        // Full overwrite, so a partial prior write cannot survive.
        fs::write(&path, fixture::encode(&response.body))
            .map_err(|e| GeoreplayError::Io { path, source: e })?;

        Ok(response)
    }
}
