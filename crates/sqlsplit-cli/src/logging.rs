//! Tracing subscriber setup.
//!
//! Logs go to stderr so they never mix with the statements on stdout. The
//! `SQLSPLIT_LOG` environment variable takes `EnvFilter` directives and
//! overrides the verbosity flags, e.g. `SQLSPLIT_LOG=sqlsplit=trace`.

use std::io;

use tracing_subscriber::{
    EnvFilter, Layer, Registry, filter::LevelFilter, fmt, layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::config::{LogConfig, LogFormat};

const ENV_VAR: &str = "SQLSPLIT_LOG";

/// Installs the global subscriber. Later calls are ignored.
pub fn init(config: &LogConfig) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(config.level).into())
        .with_env_var(ENV_VAR)
        .from_env_lossy();

    let _ = tracing_subscriber::registry()
        .with(format_layer(config.format).with_filter(filter))
        .try_init();
}

fn format_layer(format: LogFormat) -> Box<dyn Layer<Registry> + Send + Sync> {
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_writer(io::stderr)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(true)
            .with_writer(io::stderr)
            .boxed(),
        LogFormat::Json => fmt::layer().json().with_writer(io::stderr).boxed(),
    }
}
