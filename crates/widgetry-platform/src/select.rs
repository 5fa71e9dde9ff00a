//! Factory selection.
//!
//! [`select_factory`] maps a family straight to its factory.
//! [`FactoryRegistry`] does the same through a table of constructors, so a
//! new family only needs its factory registered; code that consumes
//! `dyn GuiFactory` stays untouched.

use widgetry_core::{FactoryError, Family, GuiFactory, Result};

use crate::mac::MacFactory;
use crate::windows::WindowsFactory;

/// Constructor for a boxed factory.
pub type FactoryCtor = fn() -> Box<dyn GuiFactory>;

/// Returns the factory for `family`.
#[must_use]
pub fn select_factory(family: Family) -> Box<dyn GuiFactory> {
    match family {
        Family::Windows => Box::new(WindowsFactory::new()),
        Family::Mac => Box::new(MacFactory::new()),
    }
}

/// Family-to-constructor table.
///
/// Families keep the order they were registered in. Registering a family
/// twice replaces its constructor in place.
#[derive(Debug, Clone, Default)]
pub struct FactoryRegistry {
    entries: Vec<(Family, FactoryCtor)>,
}

impl FactoryRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates a registry holding every built-in family.
    #[must_use]
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Family::Windows, || Box::new(WindowsFactory::new()));
        registry.register(Family::Mac, || Box::new(MacFactory::new()));
        registry
    }

    /// Registers `ctor` as the factory constructor for `family`.
    pub fn register(&mut self, family: Family, ctor: FactoryCtor) -> &mut Self {
        if let Some(entry) = self.entries.iter_mut().find(|(f, _)| *f == family) {
            entry.1 = ctor;
            tracing::debug!(family = %family, "replaced factory constructor");
        } else {
            self.entries.push((family, ctor));
            tracing::debug!(family = %family, "registered factory constructor");
        }
        self
    }

    /// Returns true if `family` has a registered constructor.
    #[must_use]
    pub fn contains(&self, family: Family) -> bool {
        self.entries.iter().any(|(f, _)| *f == family)
    }

    /// Registered families in registration order.
    #[must_use]
    pub fn families(&self) -> Vec<Family> {
        self.entries.iter().map(|(f, _)| *f).collect()
    }

    /// Number of registered families.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Builds the factory registered for `family`.
    ///
    /// # Errors
    /// Returns [`FactoryError::NotRegistered`] if `family` has no constructor.
    pub fn create(&self, family: Family) -> Result<Box<dyn GuiFactory>> {
        let ctor = self
            .entries
            .iter()
            .find(|(f, _)| *f == family)
            .map(|(_, ctor)| *ctor)
            .ok_or(FactoryError::NotRegistered(family))?;

        tracing::debug!(family = %family, "created factory");
        Ok(ctor())
    }

    /// Parses `id` as a family and builds its factory.
    ///
    /// # Errors
    /// Returns [`FactoryError::UnknownFamily`] if `id` names no family, or
    /// [`FactoryError::NotRegistered`] if the family has no constructor.
    pub fn create_by_id(&self, id: &str) -> Result<Box<dyn GuiFactory>> {
        let family: Family = id.parse()?;
        self.create(family)
    }
}
