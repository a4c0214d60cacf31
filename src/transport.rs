//! HTTP transport seam: request/response model, the `HttpTransport` trait,
//! and the production `reqwest`-backed delegate.
//!
//! The trait is the single point of polymorphism in the crate. The replay
//! cache consumes it (as its delegate) and implements it (so it can be
//! plugged in anywhere a transport is expected), and test stubs implement it
//! too. Everything is synchronous and blocking: each `send` completes fully
//! before returning.

use reqwest::blocking::Client;

use crate::error::{GeoreplayError, Result};

/// HTTP methods the geocoding providers use.
///
/// Only `Get` and `Post` carry cache-key semantics (POST bodies participate
/// in key derivation, GET bodies do not); the rest exist so a provider test
/// can still issue them through the same transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Wire-format name, e.g. `"GET"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An outbound HTTP request. Immutable once built.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    /// Full URL: scheme, host, path, query.
    pub url: String,
    /// Raw body bytes, if any.
    pub body: Option<Vec<u8>>,
}

impl Request {
    pub fn new(method: Method, url: impl Into<String>, body: Option<Vec<u8>>) -> Self {
        Self {
            method,
            url: url.into(),
            body,
        }
    }

    /// A body-less GET request.
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url, None)
    }

    /// A POST request with the given body.
    pub fn post(url: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self::new(Method::Post, url, Some(body.into()))
    }
}

/// An HTTP response as the transport produced it.
///
/// Headers are plain name/value pairs: this crate never interprets them, it
/// only passes them through (and synthesizes an empty list on replay).
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Response {
    /// The response shape served on a cache hit: 200, no headers, stored body.
    pub fn replayed(body: Vec<u8>) -> Self {
        Self {
            status: 200,
            headers: Vec::new(),
            body,
        }
    }
}

/// A blocking HTTP transport: one operation, attempted exactly once.
///
/// Implementors must be `Send + Sync` so a transport can be shared across
/// test threads. The trait is object-safe; `Box<dyn HttpTransport>` works
/// wherever a concrete type is inconvenient.
pub trait HttpTransport: Send + Sync {
    /// Send the request and return the response, or a transport error.
    ///
    /// No retries, no status interpretation: a non-2xx response is a
    /// successful `send` whose status the caller inspects.
    fn send(&self, request: &Request) -> Result<Response>;
}

/// Production delegate over `reqwest`'s blocking client (rustls, no OpenSSL).
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Wrap an already-configured blocking client (custom timeouts, proxies).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for ReqwestTransport {
    fn send(&self, request: &Request) -> Result<Response> {
        let method = reqwest::Method::from_bytes(request.method.as_str().as_bytes())
            .map_err(|e| GeoreplayError::Transport(e.to_string()))?;
        let mut builder = self.client.request(method, &request.url);
        // The body goes on the wire whenever present; only key derivation
        // ignores GET bodies.
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }
        let response = builder
            .send()
            .map_err(|e| GeoreplayError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response
            .bytes()
            .map_err(|e| GeoreplayError::Transport(e.to_string()))?
            .to_vec();

        Ok(Response {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Verify the transport trait is object-safe (usable as `dyn HttpTransport`).
    #[test]
    fn test_transport_trait_object_safety() {
        fn _assert_object_safe(_t: &dyn HttpTransport) {}
        // If this compiles, the trait is object-safe
    }

    #[test]
    fn test_method_wire_names() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Post.as_str(), "POST");
        assert_eq!(Method::Put.to_string(), "PUT");
        assert_eq!(Method::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_get_constructor_has_no_body() {
        let req = Request::get("https://example.com/geocode?q=Paris");
        assert_eq!(req.method, Method::Get);
        assert!(req.body.is_none());
    }

    #[test]
    fn test_post_constructor_keeps_body_bytes() {
        let req = Request::post("https://example.com/geocode", &b"q=Paris"[..]);
        assert_eq!(req.method, Method::Post);
        assert_eq!(req.body.as_deref(), Some(&b"q=Paris"[..]));
    }

    #[test]
    fn test_replayed_response_shape() {
        let resp = Response::replayed(b"Paris,FR".to_vec());
        assert_eq!(resp.status, 200);
        assert!(resp.headers.is_empty());
        assert_eq!(resp.body, b"Paris,FR");
    }
}
