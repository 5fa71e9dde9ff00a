//! Mac family.

use widgetry_core::{Button, Family, GuiFactory, Product, ProductKind, Window};

/// Button painted in Mac style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MacButton;

impl Product for MacButton {
    fn family(&self) -> Family {
        Family::Mac
    }

    fn kind(&self) -> ProductKind {
        ProductKind::Button
    }

    fn caption(&self) -> &'static str {
        "painting a button in Mac style"
    }
}

impl Button for MacButton {}

/// Window drawn in Mac style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MacWindow;

impl Product for MacWindow {
    fn family(&self) -> Family {
        Family::Mac
    }

    fn kind(&self) -> ProductKind {
        ProductKind::Window
    }

    fn caption(&self) -> &'static str {
        "drawing a window in Mac style"
    }
}

impl Window for MacWindow {}

/// Factory for Mac-style products.
#[derive(Debug, Clone, Copy, Default)]
pub struct MacFactory;

impl MacFactory {
    /// Creates a new Mac factory.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl GuiFactory for MacFactory {
    fn family(&self) -> Family {
        Family::Mac
    }

    fn create_button(&self) -> Box<dyn Button> {
        Box::new(MacButton)
    }

    fn create_window(&self) -> Box<dyn Window> {
        Box::new(MacWindow)
    }
}
