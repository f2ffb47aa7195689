#![deny(missing_docs)]
//! Shared logging utilities for the knowledge base workspace.
//!
//! This crate provides the `kb_*` logging macros used across the codebase,
//! a per-thread event turn counter, and a minimal test initializer for the
//! global logger.

use std::cell::Cell;

thread_local! {
    /// Thread-local storage for the current event turn.
    static EVENT_TURN: Cell<u64> = const { Cell::new(0) };
}

/// Advances the event turn for the current thread and returns the new value.
/// The event loop calls this once per dispatched input.
pub fn next_event_turn() -> u64 {
    EVENT_TURN.with(|v| {
        let next = v.get().wrapping_add(1);
        v.set(next);
        next
    })
}

/// Retrieves the event turn for the current thread.
/// Returns 0 before the first input has been dispatched.
pub fn event_turn() -> u64 {
    EVENT_TURN.with(|v| v.get())
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! kb_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! kb_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! kb_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! kb_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! kb_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Another test may have installed the logger already.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
