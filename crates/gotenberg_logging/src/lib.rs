#![deny(missing_docs)]
//! Shared logging utilities for the Gotenberg client workspace.
//!
//! This crate provides the `gotenberg_*` logging macros used by the client
//! crates and a minimal test initializer for the global logger. Installing
//! an application logger is left to the embedding binary.

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! gotenberg_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! gotenberg_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Debug in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
