//! Falsification test categories.
//!
//! | Category | ID Range | Description |
//! |----------|----------|-------------|
//! | A | F001-F010 | Family consistency |
//! | B | F011-F020 | Product output |
//! | C | F021-F030 | Demonstration flow |
//! | D | F031-F040 | Selection and extension |

// Allow test-specific patterns that are denied in production code
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod consistency;
mod showcase;
