// Allow unwrap/expect in tests for clear failure messages
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! # widgetry-test
//!
//! Testing infrastructure for widgetry.
//!
//! This crate provides:
//! - **Capture sinks**: in-memory and always-failing `Write` targets
//! - **Mock factories**: factories that can be told to leak across families
//! - **Factory harness**: render a factory and check its output
//! - **Falsification tests**: numbered claims about the pattern, each test an
//!   attempt to refute one
//!
//! ## Example
//!
//! ```rust,ignore
//! use widgetry_platform::MacFactory;
//! use widgetry_test::FactoryHarness;
//!
//! let harness = FactoryHarness::new();
//! harness.expect_family(&MacFactory::new())?;
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod capture;
pub mod error;
pub mod harness;
pub mod mock;

pub use capture::{BrokenSink, CaptureSink};
pub use error::{Result, TestError};
pub use harness::{FactoryHarness, foreign_family};
pub use mock::{MockButton, MockFactory, MockWindow};
