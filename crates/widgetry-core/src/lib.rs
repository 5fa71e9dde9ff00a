// Allow unwrap/expect in tests for clear failure messages
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! # widgetry-core
//!
//! Core contracts for the widgetry Abstract Factory demonstration.
//!
//! This crate provides the pieces every platform family builds against:
//!
//! - [`Family`] and [`ProductKind`] tags, and the canonical [`caption`]
//! - [`Button`] and [`Window`] product traits
//! - [`GuiFactory`], the abstract factory, and [`ProductKit`]
//! - [`verify_consistency`] for the family invariant
//!
//! Concrete families live in `widgetry-platform`.
//!
//! ## Example
//!
//! ```rust,ignore
//! use widgetry_core::GuiFactory;
//!
//! fn show(factory: &dyn GuiFactory) {
//!     factory.create_button().paint();
//!     factory.create_window().draw();
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod factory;
pub mod family;
pub mod product;

pub use error::{FactoryError, Result};
pub use factory::{GuiFactory, ProductKit, verify_consistency};
pub use family::{Family, ProductKind, caption};
pub use product::{Button, Product, Window};
