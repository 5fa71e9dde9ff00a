// Allow unwrap/expect in tests for clear failure messages
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! Widgetry: the Abstract Factory pattern over GUI platform families.
//!
//! A client picks a platform family and receives a matched button and window
//! without ever naming their concrete types.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use widgetry::prelude::*;
//!
//! let factory = select_factory(Family::Windows);
//! factory.create_button().paint();
//! factory.create_window().draw();
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod logging;
pub mod showcase;

pub use widgetry_core as core;
pub use widgetry_platform as platform;

pub use config::ShowcaseConfig;
pub use showcase::{Showcase, ShowcaseReport};

/// Prelude module for common imports.
pub mod prelude {
    pub use widgetry_core::{
        Button, FactoryError, Family, GuiFactory, Product, ProductKind, ProductKit, Window,
        caption, verify_consistency,
    };
    pub use widgetry_platform::{FactoryRegistry, MacFactory, WindowsFactory, select_factory};

    pub use crate::config::ShowcaseConfig;
    pub use crate::showcase::{Showcase, ShowcaseReport};
}
