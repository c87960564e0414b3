#![deny(missing_docs)]
//! Shared logging utilities for the urlhash workspace.
//!
//! This crate provides the `engine_*` logging macros used across the codebase,
//! the stderr logger used by the `urlhash` binary and a minimal test
//! initializer for the global logger.

use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Environment variable read by [`level_from_env`].
pub const LOG_ENV_VAR: &str = "URLHASH_LOG";

/// Level used when [`LOG_ENV_VAR`] is unset or unparsable.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! engine_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! engine_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! engine_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! engine_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! engine_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Parses a level name such as `debug` or `OFF`.
///
/// Returns `None` for anything `log` does not recognise.
pub fn parse_level(raw: &str) -> Option<LevelFilter> {
    raw.trim().parse::<LevelFilter>().ok()
}

/// Reads the log level from [`LOG_ENV_VAR`], falling back to [`DEFAULT_LEVEL`].
pub fn level_from_env() -> LevelFilter {
    std::env::var(LOG_ENV_VAR)
        .ok()
        .and_then(|raw| parse_level(&raw))
        .unwrap_or(DEFAULT_LEVEL)
}

/// Installs a terminal logger that writes every record to stderr.
///
/// Stdout stays free for program output. A second call is a no-op.
pub fn initialize_stderr(level: LevelFilter) {
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();

    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    initialize_stderr(level);
}
