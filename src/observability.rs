//! Process-wide logging setup.
//!
//! [`init`] installs a `tracing` subscriber exactly once per process. Later
//! calls are no-ops, so output is never duplicated no matter how many
//! entry points call it.

use std::sync::OnceLock;

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INITIALIZED: OnceLock<bool> = OnceLock::new();

/// Verbosity and format for log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Most verbose level emitted for this crate.
    pub level: Level,
    /// Let `RUST_LOG` override `level` when set.
    pub respect_env: bool,
    /// Include the emitting module in each line.
    pub show_target: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            respect_env: true,
            show_target: false,
        }
    }
}

impl ObservabilityConfig {
    /// Config for the `--debug` flag: DEBUG level with module targets,
    /// `RUST_LOG` ignored.
    pub fn debug() -> Self {
        Self {
            level: Level::DEBUG,
            respect_env: false,
            show_target: true,
        }
    }

    /// Build the level filter for this config.
    pub fn filter(&self) -> EnvFilter {
        let directive = format!(
            "{}={}",
            env!("CARGO_CRATE_NAME"),
            self.level.as_str().to_lowercase()
        );
        if self.respect_env {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&directive))
        } else {
            EnvFilter::new(directive)
        }
    }
}

/// Install the global subscriber.
///
/// Returns `true` if this call installed it, `false` if logging was already
/// configured (by an earlier call or by a host application).
pub fn init(config: &ObservabilityConfig) -> bool {
    let mut installed_now = false;

    INITIALIZED.get_or_init(|| {
        let result = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(config.show_target)
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .with(config.filter())
            .try_init();
        installed_now = result.is_ok();
        installed_now
    });

    installed_now
}

/// Whether [`init`] has run in this process.
pub fn is_initialized() -> bool {
    INITIALIZED.get().is_some()
}
