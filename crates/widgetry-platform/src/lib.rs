// Allow unwrap/expect in tests for clear failure messages
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! # widgetry-platform
//!
//! Concrete product families for widgetry.
//!
//! - **Windows**: [`WindowsButton`], [`WindowsWindow`], [`WindowsFactory`]
//! - **Mac**: [`MacButton`], [`MacWindow`], [`MacFactory`]
//!
//! Each factory only ever builds its own family's products. Callers pick a
//! family with [`select_factory`] or through a [`FactoryRegistry`] and work
//! against `dyn GuiFactory` from then on.
//!
//! ## Example
//!
//! ```rust,ignore
//! use widgetry_core::Family;
//! use widgetry_platform::select_factory;
//!
//! let factory = select_factory(Family::Mac);
//! factory.create_button().paint();
//! factory.create_window().draw();
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod mac;
pub mod select;
pub mod windows;

pub use mac::{MacButton, MacFactory, MacWindow};
pub use select::{FactoryCtor, FactoryRegistry, select_factory};
pub use windows::{WindowsButton, WindowsFactory, WindowsWindow};
