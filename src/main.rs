//! Widgetry demonstration.
//!
//! Renders the Windows family and then the Mac family on standard output:
//! four lines, one per product behavior.
//!
//! ```bash
//! cargo run
//!
//! # With showcase logs on stderr
//! RUST_LOG=info cargo run
//! ```

use std::process::ExitCode;

use widgetry::Showcase;

fn main() -> ExitCode {
    widgetry::logging::init();

    match Showcase::default().run_stdout() {
        Ok(report) => {
            tracing::info!(lines = report.lines, "showcase complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "showcase failed");
            ExitCode::FAILURE
        }
    }
}
