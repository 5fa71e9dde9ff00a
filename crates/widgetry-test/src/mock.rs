//! Mock factories.
//!
//! [`MockFactory`] claims one family but can be told to hand out products
//! from another, which is exactly the leak the Abstract Factory exists to
//! prevent. It also counts how many products it has created.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use widgetry_core::{Button, Family, GuiFactory, Product, ProductKind, Window};

/// Button that reports whatever family it was built with.
#[derive(Debug, Clone, Copy)]
pub struct MockButton {
    family: Family,
}

impl Product for MockButton {
    fn family(&self) -> Family {
        self.family
    }

    fn kind(&self) -> ProductKind {
        ProductKind::Button
    }

    fn caption(&self) -> &'static str {
        static_caption(self.family, ProductKind::Button)
    }
}

impl Button for MockButton {}

/// Window that reports whatever family it was built with.
#[derive(Debug, Clone, Copy)]
pub struct MockWindow {
    family: Family,
}

impl Product for MockWindow {
    fn family(&self) -> Family {
        self.family
    }

    fn kind(&self) -> ProductKind {
        ProductKind::Window
    }

    fn caption(&self) -> &'static str {
        static_caption(self.family, ProductKind::Window)
    }
}

impl Window for MockWindow {}

const fn static_caption(family: Family, kind: ProductKind) -> &'static str {
    match (family, kind) {
        (Family::Windows, ProductKind::Button) => "painting a button in Windows style",
        (Family::Windows, ProductKind::Window) => "drawing a window in Windows style",
        (Family::Mac, ProductKind::Button) => "painting a button in Mac style",
        (Family::Mac, ProductKind::Window) => "drawing a window in Mac style",
    }
}

#[derive(Debug, Default)]
struct MockState {
    buttons: AtomicU32,
    windows: AtomicU32,
}

/// Configurable factory for tests.
#[derive(Debug, Clone)]
pub struct MockFactory {
    family: Family,
    button_family: Family,
    window_family: Family,
    state: Arc<MockState>,
}

impl MockFactory {
    /// Creates a consistent factory for `family`.
    #[must_use]
    pub fn new(family: Family) -> Self {
        Self {
            family,
            button_family: family,
            window_family: family,
            state: Arc::new(MockState::default()),
        }
    }

    /// Makes created buttons belong to `family`.
    #[must_use]
    pub const fn with_button_family(mut self, family: Family) -> Self {
        self.button_family = family;
        self
    }

    /// Makes created windows belong to `family`.
    #[must_use]
    pub const fn with_window_family(mut self, family: Family) -> Self {
        self.window_family = family;
        self
    }

    /// Number of buttons created, across all clones.
    #[must_use]
    pub fn buttons_created(&self) -> u32 {
        self.state.buttons.load(Ordering::SeqCst)
    }

    /// Number of windows created, across all clones.
    #[must_use]
    pub fn windows_created(&self) -> u32 {
        self.state.windows.load(Ordering::SeqCst)
    }
}

impl GuiFactory for MockFactory {
    fn family(&self) -> Family {
        self.family
    }

    fn create_button(&self) -> Box<dyn Button> {
        self.state.buttons.fetch_add(1, Ordering::SeqCst);
        Box::new(MockButton {
            family: self.button_family,
        })
    }

    fn create_window(&self) -> Box<dyn Window> {
        self.state.windows.fetch_add(1, Ordering::SeqCst);
        Box::new(MockWindow {
            family: self.window_family,
        })
    }
}
