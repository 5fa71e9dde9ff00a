//! Family and product-kind tags.
//!
//! A [`Family`] decides which concrete products a factory builds. A
//! [`ProductKind`] names a product interface. Together they fix the one line
//! of text every product emits.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FactoryError;

/// Platform families a factory can represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    /// Windows look and feel (platform A).
    Windows,
    /// Mac look and feel (platform B).
    Mac,
}

impl Family {
    /// Every family, in demonstration order.
    pub const ALL: [Self; 2] = [Self::Windows, Self::Mac];

    /// Returns the style name used in product output.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Windows => "Windows",
            Self::Mac => "Mac",
        }
    }

    /// Returns the lower-case identifier.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::Mac => "mac",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Family {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "windows" | "platform-a" => Ok(Self::Windows),
            "mac" | "platform-b" => Ok(Self::Mac),
            _ => Err(FactoryError::unknown_family(s)),
        }
    }
}

/// Product interfaces a factory can create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    /// Button, painted.
    Button,
    /// Window, drawn.
    Window,
}

impl ProductKind {
    /// Every product kind, in creation order.
    pub const ALL: [Self; 2] = [Self::Button, Self::Window];

    /// Returns the lower-case kind name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Window => "window",
        }
    }

    /// Returns the verb used when the product's behavior runs.
    #[must_use]
    pub const fn action(&self) -> &'static str {
        match self {
            Self::Button => "painting",
            Self::Window => "drawing",
        }
    }
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Canonical output for a product of `kind` in `family`.
///
/// Format: `"<action> a <kind> in <Family> style"`.
#[must_use]
pub fn caption(family: Family, kind: ProductKind) -> String {
    format!("{} a {} in {} style", kind.action(), kind.name(), family.name())
}
