//! Tracing setup: structured logging with event definitions.

pub mod events;

use quell_core::config::ObservabilityConfig;
use quell_core::constants::LOG_ENV_VAR;
use tracing_subscriber::EnvFilter;

/// Initialize from the `[observability]` config section. `QUELL_LOG` still
/// wins when set. Returns `false` when a global subscriber was already installed.
pub fn init_from_config(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    install(filter, config.json)
}

/// Initialize with default settings: JSON output at `info` unless `QUELL_LOG` says otherwise.
pub fn init_tracing() -> bool {
    init_from_config(&ObservabilityConfig::default())
}

/// Initialize with a fixed filter string, ignoring `QUELL_LOG` (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) -> bool {
    install(EnvFilter::new(filter), ObservabilityConfig::default().json)
}

fn install(filter: EnvFilter, json: bool) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if json {
        builder
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init()
            .is_ok()
    } else {
        builder.try_init().is_ok()
    }
}
