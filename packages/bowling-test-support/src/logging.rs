//! Log capture for bowling test binaries.
//!
//! Scorer diagnostics (frame classification, chain assembly, lookups) stay
//! silent under `cargo test` unless a filter asks for them.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when neither `TEST_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_TEST_FILTER: &str = "warn";

static SUBSCRIBER: OnceCell<()> = OnceCell::new();

/// Filter directive for test runs: `TEST_LOG`, else `RUST_LOG`, else warn.
pub fn filter_directive() -> String {
    std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_TEST_FILTER.to_string())
}

/// Install the test subscriber once per binary; later calls do nothing.
///
/// Output goes through the libtest writer so it only shows for failing
/// tests or with `--nocapture`.
pub fn init() {
    SUBSCRIBER.get_or_init(|| {
        let filter = EnvFilter::try_new(filter_directive())
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TEST_FILTER));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}
