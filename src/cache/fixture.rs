//! On-disk fixture envelope.
//!
//! A fixture file holds a JSON object `{"body": "<base64>"}`. Base64 keeps
//! binary response bodies byte-exact inside a text file, and the envelope
//! gives corruption somewhere to fail: a truncated or hand-mangled fixture
//! decodes to an error instead of silently becoming a different body.

use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::{GeoreplayError, Result};

#[derive(Serialize, Deserialize)]
struct Envelope {
    body: String,
}

/// Serialize a response body into fixture-file bytes.
pub fn encode(body: &[u8]) -> Vec<u8> {
    let envelope = Envelope {
        body: BASE64.encode(body),
    };
    // A single ASCII string field cannot fail to serialize.
    serde_json::to_vec(&envelope).expect("fixture envelope serializes")
}

/// Decode fixture-file bytes back into the response body.
///
/// Any failure — invalid JSON, wrong shape, bad base64 — is fixture
/// corruption and carries the offending path.
pub fn decode(raw: &[u8], path: &Path) -> Result<Vec<u8>> {
    let envelope: Envelope =
        serde_json::from_slice(raw).map_err(|e| GeoreplayError::CorruptFixture {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    BASE64
        .decode(&envelope.body)
        .map_err(|e| GeoreplayError::CorruptFixture {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn path() -> PathBuf {
        PathBuf::from("/fixtures/example.com_deadbeef")
    }

    #[test]
    fn test_round_trip_text_body() {
        let body = b"Paris,FR";
        assert_eq!(decode(&encode(body), &path()).unwrap(), body);
    }

    #[test]
    fn test_round_trip_binary_body() {
        // Non-UTF8 bytes, embedded NUL, high bit set.
        let body = [0u8, 159, 146, 150, 255, 10, 0];
        assert_eq!(decode(&encode(&body), &path()).unwrap(), body);
    }

    #[test]
    fn test_round_trip_empty_body() {
        assert_eq!(decode(&encode(b""), &path()).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_garbage_is_corrupt() {
        let err = decode(b"\xff\xfenot a fixture", &path()).unwrap_err();
        assert!(matches!(err, GeoreplayError::CorruptFixture { .. }));
        assert!(err.to_string().contains("example.com_deadbeef"));
    }

    #[test]
    fn test_bad_base64_is_corrupt() {
        let err = decode(br#"{"body":"!!not base64!!"}"#, &path()).unwrap_err();
        assert!(matches!(err, GeoreplayError::CorruptFixture { .. }));
    }

    #[test]
    fn test_wrong_shape_is_corrupt() {
        let err = decode(br#"{"payload":"UGFyaXM="}"#, &path()).unwrap_err();
        assert!(matches!(err, GeoreplayError::CorruptFixture { .. }));
    }
}
