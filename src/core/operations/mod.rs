//! Cryptographic operations for envelopes.
//!
//! - [`aead`] - AES-256-GCM under single-use session keys
//! - [`oaep`] - RSA-OAEP/SHA-256 key wrapping
//! - [`hybrid`] - Envelope encryption and decryption

pub mod aead;
pub mod hybrid;
pub mod oaep;
