//! Showcase configuration.
//!
//! Validated on construction so a bad family list never reaches the
//! showcase. The `widgetry` binary always runs the default.

use serde::{Deserialize, Serialize};

use widgetry_core::{FactoryError, Family, Result};

/// Which families the showcase runs, and how.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    /// Families to render, in order.
    pub families: Vec<Family>,

    /// Check each factory's family invariant before rendering it.
    pub verify: bool,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            families: Family::ALL.to_vec(),
            verify: false,
        }
    }
}

impl ShowcaseConfig {
    /// Creates a configuration for `families`, in the given order.
    #[must_use]
    pub fn new(families: impl IntoIterator<Item = Family>) -> Self {
        Self {
            families: families.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Enables or disables the consistency check.
    #[must_use]
    pub const fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns an error if the family list is empty or names a family twice.
    pub fn validate(&self) -> Result<()> {
        if self.families.is_empty() {
            return Err(FactoryError::config("families cannot be empty"));
        }

        for (i, family) in self.families.iter().enumerate() {
            if self.families[..i].contains(family) {
                return Err(FactoryError::config(format!(
                    "family listed more than once: {}",
                    family.id()
                )));
            }
        }

        Ok(())
    }

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    /// Returns an error if the document cannot be parsed or fails validation.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| FactoryError::config(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}
