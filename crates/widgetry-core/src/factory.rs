//! Abstract factory contract.
//!
//! # Consistency
//! Every product a [`GuiFactory`] returns belongs to the family the factory
//! represents. Callers that take all products from one factory can never
//! pair a button of one family with a window of another.

use std::io::Write;

use crate::error::{FactoryError, Result};
use crate::family::{Family, ProductKind, caption};
use crate::product::{Button, Product, Window};

/// Creates a family of related products without exposing concrete types.
pub trait GuiFactory: Send + Sync {
    /// Family this factory builds.
    fn family(&self) -> Family;

    /// Creates a fresh button owned by the caller.
    fn create_button(&self) -> Box<dyn Button>;

    /// Creates a fresh window owned by the caller.
    fn create_window(&self) -> Box<dyn Window>;

    /// Creates one product of every kind from this factory.
    fn create_kit(&self) -> ProductKit {
        ProductKit {
            button: self.create_button(),
            window: self.create_window(),
        }
    }
}

/// A button and a window taken from the same factory.
#[derive(Debug)]
pub struct ProductKit {
    /// The button.
    pub button: Box<dyn Button>,
    /// The window.
    pub window: Box<dyn Window>,
}

impl ProductKit {
    /// Family of the button; equals the window's for kits built by a
    /// consistent factory.
    #[must_use]
    pub fn family(&self) -> Family {
        self.button.family()
    }

    /// Paints the button and then draws the window onto `out`.
    ///
    /// # Errors
    /// Returns an error if writing to `out` fails.
    pub fn render_to(&self, out: &mut dyn Write) -> Result<()> {
        self.button.paint_to(out)?;
        self.window.draw_to(out)?;
        Ok(())
    }

    /// Paints the button and draws the window on standard output.
    pub fn render(&self) {
        self.button.paint();
        self.window.draw();
    }
}

/// Builds a kit from `factory` and checks it against the family invariant.
///
/// # Errors
/// Returns [`FactoryError::FamilyMismatch`] if a product reports a family
/// other than the factory's, or [`FactoryError::CaptionMismatch`] if a product
/// emits anything but its canonical caption.
pub fn verify_consistency(factory: &dyn GuiFactory) -> Result<ProductKit> {
    let expected = factory.family();
    let kit = factory.create_kit();

    check_product(expected, kit.button.as_ref(), ProductKind::Button)?;
    check_product(expected, kit.window.as_ref(), ProductKind::Window)?;

    tracing::debug!(family = %expected, "factory passed consistency check");
    Ok(kit)
}

fn check_product<P: Product + ?Sized>(
    expected: Family,
    product: &P,
    kind: ProductKind,
) -> Result<()> {
    let found = product.family();
    if found != expected {
        tracing::warn!(kind = %kind, expected = %expected, found = %found, "cross-family product");
        return Err(FactoryError::FamilyMismatch {
            kind,
            expected,
            found,
        });
    }

    let canonical = caption(expected, kind);
    if product.caption() != canonical {
        return Err(FactoryError::CaptionMismatch {
            expected: canonical,
            found: product.caption().to_string(),
        });
    }

    Ok(())
}
