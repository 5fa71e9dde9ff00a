//! Product interfaces.
//!
//! Each product kind exposes exactly one behavior with no inputs and no
//! return value: emit a fixed line naming its family and kind. Products are
//! stateless, so invoking the behavior again emits the same line again.

use std::fmt::Debug;
use std::io::Write;

use crate::family::{Family, ProductKind};

/// Common surface of every product.
pub trait Product: Debug + Send + Sync {
    /// Family this product belongs to.
    fn family(&self) -> Family;

    /// Kind of product.
    fn kind(&self) -> ProductKind;

    /// Line this product emits when its behavior runs.
    fn caption(&self) -> &'static str;
}

/// A button, painted in its family's style.
pub trait Button: Product {
    /// Paints the button on standard output.
    fn paint(&self) {
        println!("{}", self.caption());
    }

    /// Paints the button onto `out`.
    ///
    /// # Errors
    /// Returns an error if writing to `out` fails.
    fn paint_to(&self, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(out, "{}", self.caption())
    }
}

/// A window, drawn in its family's style.
pub trait Window: Product {
    /// Draws the window on standard output.
    fn draw(&self) {
        println!("{}", self.caption());
    }

    /// Draws the window onto `out`.
    ///
    /// # Errors
    /// Returns an error if writing to `out` fails.
    fn draw_to(&self, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(out, "{}", self.caption())
    }
}
