//! Test vector types for envelope decryption tests.
//!
//! The vectors in `envelope.json` were produced by an independent
//! implementation (Python `cryptography`), so they only exercise the
//! decrypt side: encryption is randomized and cannot be reproduced.

// Some fields are required for deserialization but not directly used in tests
#![allow(dead_code)]

use std::path::PathBuf;

use serde::Deserialize;

/// A test vector suite (top-level JSON structure).
#[derive(Debug, Deserialize)]
pub struct TestVectorSuite<T> {
    pub name: String,
    pub tests: Vec<T>,
}

/// Test vector for opening an envelope.
#[derive(Debug, Deserialize)]
pub struct EnvelopeTestVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    #[serde(default)]
    pub comment: Option<String>,
    /// Fixture file name of the recipient private key
    #[serde(rename = "recipient-key")]
    pub recipient_key: String,
    /// OAEP label, as UTF-8 text
    pub label: String,
    /// Plaintext encoding name ("utf-8" or "utf-16le")
    pub encoding: String,
    /// Expected plaintext (null for fail tests)
    pub plaintext: Option<String>,
    /// Standard base64 of the envelope bytes
    pub envelope: String,
    /// Expected error kind (null for success tests)
    pub error: Option<String>,
}

/// Decode a hex string to bytes.
pub fn hex_decode(s: &str) -> Option<Vec<u8>> {
    hex::decode(s).ok()
}

/// Path to a file under `tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Read a fixture file as text.
pub fn load_fixture(name: &str) -> String {
    let path = fixture_path(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {e}", path.display()))
}

/// Load a test vector suite from a JSON file.
pub fn load_vectors<T: serde::de::DeserializeOwned>(path: &str) -> TestVectorSuite<T> {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read test vector file {path}: {e}"));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse test vector file {path}: {e}"))
}
