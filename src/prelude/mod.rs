//! Ergonomic layer for envelope sealing.
//!
//! The prelude module provides the sealer builder, sealing scopes, and
//! re-exports of the types most callers need.
//!
//! # Usage
//!
//! ```rust
//! use sealed_envelope::prelude::*;
//! ```

mod builders;
mod scope;

pub use builders::SealerBuilder;
pub use scope::SealingScope;

// Re-export core types for convenience
pub use crate::core::encoding::PlaintextEncoding;
pub use crate::core::error::{EnvelopeError, EnvelopeResult};
pub use crate::core::provider::{CryptoProvider, RustCryptoProvider};
pub use crate::core::sealer::Sealer;
pub use crate::core::types::{Envelope, EnvelopePrivateKey, EnvelopePublicKey, KeyFingerprint};
