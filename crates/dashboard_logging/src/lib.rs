#![deny(missing_docs)]
//! Shared logging utilities for the dashboard workspace.
//!
//! This crate provides the `dash_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger. Every line logged
//! through the macros is tagged with the sequence number of the user action
//! being dispatched, so a log can be read back as a replay of the session.

use std::cell::Cell;

thread_local! {
    /// Thread-local storage for the sequence number of the current action.
    static ACTION_SEQ: Cell<u64> = const { Cell::new(0) };
}

/// Sets the action sequence number for the current thread.
/// The driver calls this once before dispatching each message.
pub fn set_action_seq(seq: u64) {
    ACTION_SEQ.with(|v| v.set(seq));
}

/// Retrieves the action sequence number for the current thread.
/// Returns 0 outside of a dispatch (startup, engine threads).
pub fn action_seq() -> u64 {
    ACTION_SEQ.with(|v| v.get())
}

/// Logs a trace-level message tagged with the current action.
#[macro_export]
macro_rules! dash_trace {
    ($($arg:tt)*) => {{
        log::trace!("[#{}] {}", $crate::action_seq(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message tagged with the current action.
#[macro_export]
macro_rules! dash_debug {
    ($($arg:tt)*) => {{
        log::debug!("[#{}] {}", $crate::action_seq(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message tagged with the current action.
#[macro_export]
macro_rules! dash_info {
    ($($arg:tt)*) => {{
        log::info!("[#{}] {}", $crate::action_seq(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message tagged with the current action.
#[macro_export]
macro_rules! dash_warn {
    ($($arg:tt)*) => {{
        log::warn!("[#{}] {}", $crate::action_seq(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message tagged with the current action.
#[macro_export]
macro_rules! dash_error {
    ($($arg:tt)*) => {{
        log::error!("[#{}] {}", $crate::action_seq(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_seq_is_per_thread() {
        set_action_seq(7);
        assert_eq!(action_seq(), 7);

        let other = std::thread::spawn(action_seq).join().unwrap();
        assert_eq!(other, 0);
        assert_eq!(action_seq(), 7);
    }

    #[test]
    fn macros_accept_format_arguments() {
        initialize_for_tests();
        set_action_seq(3);
        dash_debug!("page {} of {}", 1, 2);
        dash_info!("plain message");
    }
}
