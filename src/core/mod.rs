//! Core envelope types and operations.
//!
//! This module provides the fundamental building blocks:
//!
//! - [`error`] - Error types for envelope operations
//! - [`encoding`] - Plaintext text encodings
//! - [`framing`] - Length-prefix framing of the wire format
//! - [`armor`] - PEM armor decoding
//! - [`types`] - Keys, session keys and the envelope itself
//! - [`operations`] - Cryptographic operations (AEAD, OAEP, hybrid)
//! - [`provider`] - Pluggable cryptographic backend
//! - [`sealer`] - Text-oriented sealing front end

pub mod armor;
pub mod encoding;
pub mod error;
pub mod framing;
pub mod operations;
pub mod provider;
pub mod sealer;
pub mod types;

// Re-export commonly used items
pub use encoding::PlaintextEncoding;
pub use error::{EnvelopeError, EnvelopeResult};
