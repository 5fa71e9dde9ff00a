//! Windows family.
//!
//! Products and factory for the Windows look and feel.

use widgetry_core::{Button, Family, GuiFactory, Product, ProductKind, Window};

/// Button painted in Windows style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowsButton;

impl Product for WindowsButton {
    fn family(&self) -> Family {
        Family::Windows
    }

    fn kind(&self) -> ProductKind {
        ProductKind::Button
    }

    fn caption(&self) -> &'static str {
        "painting a button in Windows style"
    }
}

impl Button for WindowsButton {}

/// Window drawn in Windows style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowsWindow;

impl Product for WindowsWindow {
    fn family(&self) -> Family {
        Family::Windows
    }

    fn kind(&self) -> ProductKind {
        ProductKind::Window
    }

    fn caption(&self) -> &'static str {
        "drawing a window in Windows style"
    }
}

impl Window for WindowsWindow {}

/// Factory for Windows-style products.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsFactory;

impl WindowsFactory {
    /// Creates a new Windows factory.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl GuiFactory for WindowsFactory {
    fn family(&self) -> Family {
        Family::Windows
    }

    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WindowsButton)
    }

    fn create_window(&self) -> Box<dyn Window> {
        Box::new(WindowsWindow)
    }
}
