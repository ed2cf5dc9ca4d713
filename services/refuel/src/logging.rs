//! Tracing subscriber setup for the refuel binary
//!
//! `RUST_LOG` wins over the configured level. Logs go to stderr so payload
//! JSON on stdout stays machine-readable.

use anyhow::{anyhow, Context, Result};
use refuel_config::GlobalConfig;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_tracing(config: &GlobalConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level)
            .with_context(|| format!("Invalid log level: {}", config.log_level))?,
    };

    let registry = tracing_subscriber::registry().with(filter);
    let result = if config.json_logs {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };

    result.map_err(|e| anyhow!("Failed to install tracing subscriber: {e}"))
}
