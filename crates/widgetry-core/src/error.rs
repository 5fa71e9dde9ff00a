//! Error types for widgetry-core.
//!
//! Creating a product or invoking its behavior never fails. Errors only
//! exist around the edges: picking a family by identifier, verifying that a
//! factory is consistent, validating configuration, and writing output.

use crate::family::{Family, ProductKind};

/// Result type alias for factory operations.
pub type Result<T> = std::result::Result<T, FactoryError>;

/// Errors raised while selecting, verifying, or driving factories.
#[derive(Debug, thiserror::Error)]
pub enum FactoryError {
    /// Identifier does not name any known family.
    #[error("unknown family: {0}")]
    UnknownFamily(String),

    /// Family is known but no factory constructor is registered for it.
    #[error("no factory registered for family: {0}")]
    NotRegistered(Family),

    /// A factory produced a product belonging to another family.
    #[error("family mismatch: {kind} from {expected} factory belongs to {found}")]
    FamilyMismatch {
        /// Product kind that leaked.
        kind: ProductKind,
        /// Family of the factory.
        expected: Family,
        /// Family reported by the product.
        found: Family,
    },

    /// A product emits something other than its canonical caption.
    #[error("caption mismatch: expected {expected:?}, found {found:?}")]
    CaptionMismatch {
        /// Canonical caption for the family and kind.
        expected: String,
        /// Caption the product actually emits.
        found: String,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error while writing product output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FactoryError {
    /// Creates an unknown family error.
    #[must_use]
    pub fn unknown_family(id: impl Into<String>) -> Self {
        Self::UnknownFamily(id.into())
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Returns true if this error means a factory broke the family invariant.
    #[must_use]
    pub const fn is_inconsistency(&self) -> bool {
        matches!(
            self,
            Self::FamilyMismatch { .. } | Self::CaptionMismatch { .. }
        )
    }
}
