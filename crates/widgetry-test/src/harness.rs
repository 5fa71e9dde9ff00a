//! Factory test harness.
//!
//! Renders factories into a [`CaptureSink`] and checks what came out.

use widgetry_core::{Family, GuiFactory, ProductKind, caption};

use crate::capture::CaptureSink;
use crate::error::{Result, TestError};

/// Harness that renders factories into a shared capture sink.
#[derive(Debug, Clone, Default)]
pub struct FactoryHarness {
    sink: CaptureSink,
}

impl FactoryHarness {
    /// Creates a harness with an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The sink everything is rendered into.
    #[must_use]
    pub const fn sink(&self) -> &CaptureSink {
        &self.sink
    }

    /// Creates a kit from `factory`, renders it, and returns the lines it
    /// produced.
    ///
    /// # Errors
    /// Returns an error if rendering fails.
    pub fn render(&self, factory: &dyn GuiFactory) -> Result<Vec<String>> {
        let before = self.sink.lines().len();
        let mut out = self.sink.clone();
        factory.create_kit().render_to(&mut out)?;
        Ok(self.sink.lines().split_off(before))
    }

    /// Renders `factory` and checks that its output is exactly the canonical
    /// button line followed by the canonical window line for its family.
    ///
    /// # Errors
    /// Returns [`TestError::Assertion`] describing the first difference.
    pub fn expect_family(&self, factory: &dyn GuiFactory) -> Result<()> {
        let family = factory.family();
        let lines = self.render(factory)?;
        let expected: Vec<String> = ProductKind::ALL
            .iter()
            .map(|kind| caption(family, *kind))
            .collect();

        if lines != expected {
            return Err(TestError::assertion(format!(
                "{family} factory rendered {lines:?}, expected {expected:?}"
            )));
        }

        if let Some(other) = foreign_family(&lines, family) {
            return Err(TestError::assertion(format!(
                "{family} factory output mentions {other}"
            )));
        }

        Ok(())
    }
}

/// Returns a family other than `family` named in `lines`, if any.
#[must_use]
pub fn foreign_family(lines: &[String], family: Family) -> Option<Family> {
    Family::ALL
        .into_iter()
        .filter(|other| *other != family)
        .find(|other| lines.iter().any(|line| line.contains(other.name())))
}
