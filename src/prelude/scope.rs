//! Sealing scopes and their OAEP labels.
//!
//! A scope decides where a sealed value may be opened. The label derived
//! from it is bound into the RSA-OAEP padding, so an envelope sealed for
//! one scope fails to open under another.

use core::fmt::{self, Display};

/// Where a sealed value is allowed to be unsealed.
///
/// # Example
///
/// ```rust
/// use sealed_envelope::prelude::SealingScope;
///
/// let scope = SealingScope::strict("sample-next-app", "app-sealed-secret-js");
/// assert_eq!(scope.label(), "sample-next-app/app-sealed-secret-js");
///
/// assert_eq!(SealingScope::namespace_wide("sample-next-app").label(), "sample-next-app");
/// assert!(SealingScope::ClusterWide.label().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SealingScope {
    /// Bound to one namespace and one secret name.
    Strict {
        /// Namespace of the secret.
        namespace: String,
        /// Name of the secret.
        name: String,
    },
    /// Bound to a namespace; the secret may be renamed.
    NamespaceWide {
        /// Namespace of the secret.
        namespace: String,
    },
    /// Openable anywhere the private key is available.
    ClusterWide,
}

impl SealingScope {
    /// Creates a strict scope.
    #[must_use]
    pub fn strict(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Strict {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Creates a namespace-wide scope.
    #[must_use]
    pub fn namespace_wide(namespace: impl Into<String>) -> Self {
        Self::NamespaceWide {
            namespace: namespace.into(),
        }
    }

    /// Returns the scope name ("strict", "namespace-wide" or "cluster-wide").
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strict { .. } => "strict",
            Self::NamespaceWide { .. } => "namespace-wide",
            Self::ClusterWide => "cluster-wide",
        }
    }

    /// Returns the OAEP label for this scope.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Strict { namespace, name } => format!("{namespace}/{name}"),
            Self::NamespaceWide { namespace } => namespace.clone(),
            Self::ClusterWide => String::new(),
        }
    }
}

impl Display for SealingScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{EnvelopeError, EnvelopeResult};
    use crate::core::sealer::Sealer;
    use crate::core::types::EnvelopePrivateKey;

    #[test]
    fn test_labels() {
        assert_eq!(SealingScope::strict("ns", "name").label(), "ns/name");
        assert_eq!(SealingScope::namespace_wide("ns").label(), "ns");
        assert_eq!(SealingScope::ClusterWide.label(), "");
    }

    #[test]
    fn test_display() {
        assert_eq!(SealingScope::strict("a", "b").to_string(), "strict");
        assert_eq!(SealingScope::namespace_wide("a").to_string(), "namespace-wide");
        assert_eq!(SealingScope::ClusterWide.to_string(), "cluster-wide");
    }

    #[test]
    fn test_scope_binds_envelope() -> EnvelopeResult<()> {
        let secret =
            EnvelopePrivateKey::from_pem(include_str!("../../tests/fixtures/recipient_pkcs8.pem"))?;
        let sealer = Sealer::new();
        let strict = SealingScope::strict("ns", "db-password");

        let envelope = sealer.encrypt(&secret.public_key(), "hunter2", &strict.label())?;
        assert_eq!(sealer.decrypt(&secret, &envelope, &strict.label())?, "hunter2");

        let renamed = SealingScope::strict("ns", "other");
        let result = sealer.decrypt(&secret, &envelope, &renamed.label());
        assert!(matches!(result, Err(EnvelopeError::DecryptionFailed)));

        let result = sealer.decrypt(&secret, &envelope, &SealingScope::ClusterWide.label());
        assert!(matches!(result, Err(EnvelopeError::DecryptionFailed)));
        Ok(())
    }
}
