//! Vellum command-line driver.
//!
//! The binary in `main.rs` only dispatches on the command name; everything
//! it runs lives in [`commands`] so it can be exercised from tests.

pub mod commands;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber when `RUST_LOG` is set.
///
/// Safe to call more than once. Without `RUST_LOG` nothing is installed and
/// the `tracing` macros in the tokenizer and parser stay disabled.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
