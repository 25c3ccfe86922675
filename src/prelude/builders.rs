//! Builder patterns for envelope sealing.
//!
//! This module provides a fluent builder for [`Sealer`] with preset
//! plaintext profiles.
//!
//! # Profiles
//!
//! | Profile | Plaintext encoding | Use Case |
//! |---------|--------------------|----------|
//! | `sealed_secrets()` | UTF-8 | Kubernetes sealed-secrets controllers (default) |
//! | `legacy_web_crypto()` | UTF-16LE | Envelopes from two-bytes-per-character browser encoders |
//!
//! # Example
//!
//! ```rust
//! use sealed_envelope::prelude::*;
//!
//! // Use a preset profile
//! let sealer = SealerBuilder::sealed_secrets().build();
//! assert_eq!(sealer.encoding(), PlaintextEncoding::Utf8);
//!
//! // Or customize
//! let sealer = SealerBuilder::new()
//!     .encoding(PlaintextEncoding::Utf16Le)
//!     .provider(RustCryptoProvider)
//!     .build();
//! assert_eq!(sealer.encoding(), PlaintextEncoding::Utf16Le);
//! ```

use crate::core::encoding::PlaintextEncoding;
use crate::core::provider::{CryptoProvider, RustCryptoProvider};
use crate::core::sealer::Sealer;

/// Builder for [`Sealer`].
#[derive(Debug, Clone, Copy)]
pub struct SealerBuilder<P: CryptoProvider = RustCryptoProvider> {
    provider: P,
    encoding: PlaintextEncoding,
}

impl Default for SealerBuilder {
    fn default() -> Self {
        Self::sealed_secrets()
    }
}

impl SealerBuilder {
    /// Creates a new builder with the `sealed_secrets` profile.
    #[must_use]
    pub const fn new() -> Self {
        Self::sealed_secrets()
    }

    /// Sealed-secrets profile: UTF-8 plaintexts, the default provider.
    ///
    /// This matches what a sealed-secrets controller expects to unseal.
    #[must_use]
    pub const fn sealed_secrets() -> Self {
        Self {
            provider: RustCryptoProvider,
            encoding: PlaintextEncoding::Utf8,
        }
    }

    /// Legacy profile: UTF-16LE plaintexts, the default provider.
    ///
    /// Use this only to interoperate with envelopes whose plaintext was
    /// encoded as two bytes per UTF-16 code unit.
    #[must_use]
    pub const fn legacy_web_crypto() -> Self {
        Self {
            provider: RustCryptoProvider,
            encoding: PlaintextEncoding::Utf16Le,
        }
    }
}

impl<P: CryptoProvider> SealerBuilder<P> {
    /// Sets the plaintext encoding.
    ///
    /// # Arguments
    ///
    /// * `encoding` - How text is turned into bytes before sealing
    #[must_use]
    pub fn encoding(mut self, encoding: PlaintextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Replaces the cryptographic backend.
    #[must_use]
    pub fn provider<Q: CryptoProvider>(self, provider: Q) -> SealerBuilder<Q> {
        SealerBuilder {
            provider,
            encoding: self.encoding,
        }
    }

    /// Returns the configured plaintext encoding.
    #[must_use]
    pub const fn get_encoding(&self) -> PlaintextEncoding {
        self.encoding
    }

    /// Builds the sealer.
    #[must_use]
    pub fn build(self) -> Sealer<P> {
        Sealer::with_provider(self.provider, self.encoding)
    }
}
