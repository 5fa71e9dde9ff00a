//! Demonstration flow.
//!
//! For each configured family, in order: build the family's factory, create
//! a button and a window through the abstract contract only, then paint the
//! button and draw the window. The default run emits four lines:
//!
//! ```text
//! painting a button in Windows style
//! drawing a window in Windows style
//! painting a button in Mac style
//! drawing a window in Mac style
//! ```

use std::io::Write;

use widgetry_core::{Family, GuiFactory, Result, verify_consistency};
use widgetry_platform::FactoryRegistry;

use crate::config::ShowcaseConfig;

/// Summary of a completed showcase run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowcaseReport {
    /// Families rendered, in order.
    pub families: Vec<Family>,
    /// Lines written to the output.
    pub lines: usize,
}

/// Runs the demonstration over a set of families.
#[derive(Debug, Clone)]
pub struct Showcase {
    config: ShowcaseConfig,
    registry: FactoryRegistry,
}

impl Showcase {
    /// Creates a showcase over the built-in families.
    ///
    /// # Errors
    /// Returns an error if `config` fails validation.
    pub fn new(config: ShowcaseConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            registry: FactoryRegistry::with_builtin(),
        })
    }

    /// Replaces the registry factories are taken from.
    #[must_use]
    pub fn with_registry(mut self, registry: FactoryRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ShowcaseConfig {
        &self.config
    }

    /// Runs every configured family against `out`.
    ///
    /// # Errors
    /// Returns an error if a family has no registered factory, a factory
    /// fails verification, or writing to `out` fails.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<ShowcaseReport> {
        let mut report = ShowcaseReport {
            families: Vec::with_capacity(self.config.families.len()),
            lines: 0,
        };

        for &family in &self.config.families {
            let factory = self.registry.create(family)?;
            if self.config.verify {
                verify_consistency(factory.as_ref())?;
            }

            report.lines += render_family(factory.as_ref(), out)?;
            report.families.push(family);
            tracing::info!(family = %family, "rendered family");
        }

        out.flush()?;
        Ok(report)
    }

    /// Runs every configured family against standard output.
    ///
    /// # Errors
    /// Same as [`Showcase::run`].
    pub fn run_stdout(&self) -> Result<ShowcaseReport> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run(&mut out)
    }
}

impl Default for Showcase {
    fn default() -> Self {
        Self {
            config: ShowcaseConfig::default(),
            registry: FactoryRegistry::with_builtin(),
        }
    }
}

/// Creates one button and one window from `factory` and renders both.
fn render_family(factory: &dyn GuiFactory, out: &mut dyn Write) -> Result<usize> {
    let button = factory.create_button();
    let window = factory.create_window();

    button.paint_to(out)?;
    window.draw_to(out)?;
    Ok(2)
}
