use tracing_subscriber::EnvFilter;

use crate::config::ObservabilityConfig;

type InitError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
///
/// Fails when a global subscriber is already installed.
pub fn init(config: &ObservabilityConfig) -> Result<(), InitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    }
}
