//! Logging setup for tests.
//!
//! Installs a `tracing-subscriber` fmt subscriber once per process, routed
//! through the test writer so output is captured per test. `RUST_LOG`
//! overrides the default filter.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_TEST_FILTER: &str = "reversal_check=debug";

static INIT: Once = Once::new();

/// Initializes test logging. Safe to call from every test.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TEST_FILTER));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
