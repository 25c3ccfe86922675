//! Error types for envelope operations.
//!
//! This module provides a unified error type for all envelope operations.
//! Error messages are intentionally vague for decryption and authentication
//! failures to avoid leaking information that could aid padding-oracle or
//! tampering attacks.

use thiserror::Error;

use crate::core::encoding::PlaintextEncoding;

/// Errors that can occur when sealing or opening envelopes.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// The key material could not be imported (bad PEM, base64, DER, or not RSA).
    #[error("Key import failed: {0}")]
    KeyImport(String),

    /// The RSA ciphertext does not fit in the 16-bit length prefix.
    #[error("RSA ciphertext of {len} bytes exceeds the 16-bit length prefix")]
    SizeOverflow {
        /// Length that was requested to be framed.
        len: usize,
    },

    /// The buffer is too short for the frame it declares.
    #[error("Malformed envelope: need {needed} bytes, got {actual}")]
    MalformedEnvelope {
        /// Minimum number of bytes the frame requires.
        needed: usize,
        /// Number of bytes actually available.
        actual: usize,
    },

    /// RSA-OAEP decryption failed (wrong key, wrong label, or corrupted data).
    /// Intentionally vague for security.
    #[error("Decryption failed")]
    DecryptionFailed,

    /// AES-GCM tag verification failed.
    /// Intentionally vague for security.
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// The opened payload is not valid text in the configured encoding.
    #[error("Plaintext is not valid {0}")]
    InvalidPlaintext(PlaintextEncoding),

    /// The plaintext encoding name is not recognised.
    #[error("Unsupported plaintext encoding: {0}")]
    UnsupportedEncoding(String),

    /// Base64 decoding error.
    #[error("Base64 decode error: {0}")]
    Base64Decode(#[from] base64::DecodeError),

    /// Generic cryptographic error.
    /// Intentionally vague for security.
    #[error("Cryptographic operation failed")]
    CryptoError,
}

/// Result type alias for envelope operations.
pub type EnvelopeResult<T> = Result<T, EnvelopeError>;
