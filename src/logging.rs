//! Tracing setup for `days-to-goal` and `weight-trajectory`.
//!
//! Both tools talk to the user on stdout: dialoguer prompts, the scenario
//! table and the weight chart all go there, and a scripted session can pipe
//! that output into a file. Logs therefore go to stderr so they never
//! interleave with a prompt line or corrupt a captured report.
//!
//! The default level comes from `[logging] level` in the config file and is
//! `warn`, which keeps the per-run `info!` summaries (candidate counts,
//! skipped intakes, final weights) hidden during an interactive session.
//! `RUST_LOG` overrides the config for one-off debugging.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter directive applying `level` to this crate only.
///
/// Dependencies such as dialoguer stay at their own defaults, so raising the
/// level to `debug` shows simulation detail without terminal-handling noise.
fn default_directive(level: &str) -> String {
    format!("{}={}", env!("CARGO_CRATE_NAME"), level)
}

/// Install the stderr subscriber with `default_level` from the config.
pub fn init_with_level(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(default_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Initialize logging for tests (captured by the test harness).
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new(default_directive("debug")))
        .try_init();
}
