//! Shared helpers for integration tests.

#![allow(dead_code)]

pub use reversal_check::test_logging::init_test_logging;

/// Logs the start of a test phase.
macro_rules! test_phase {
    ($name:expr) => {
        tracing::info!(phase = %$name, "test phase start");
    };
}

/// Logs the completion of a test.
macro_rules! test_complete {
    ($name:expr) => {
        tracing::info!(test = %$name, "test complete");
    };
}

/// Asserts a condition, logging expected and actual values first.
macro_rules! assert_with_log {
    ($cond:expr, $msg:expr, $expected:expr, $actual:expr) => {{
        let expected = &$expected;
        let actual = &$actual;
        tracing::debug!(expected = ?expected, actual = ?actual, "{}", $msg);
        assert!($cond, "{}: expected {:?}, actual {:?}", $msg, expected, actual);
    }};
}
