//! Tracing subscriber setup.
//!
//! Structured logs are only emitted in debug mode (`TASKDECK_DEBUG` or
//! `RUST_LOG` set). Otherwise user-facing output goes straight to the
//! terminal through the `msg_*!` macros and no subscriber is installed.

use super::messages::macros::is_debug_mode;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Default filter used when `RUST_LOG` is absent or invalid.
const DEFAULT_FILTER: &str = "taskdeck=debug";

/// Installs the global `fmt` subscriber when debug mode is on.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    if !is_debug_mode() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();
}
