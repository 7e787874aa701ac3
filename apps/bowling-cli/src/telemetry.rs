use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{CliConfig, LogFormat};

/// Install the global subscriber. Logs go to stderr; stdout carries results.
pub fn init_tracing(config: &CliConfig) {
    let env_filter =
        EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    let registry = tracing_subscriber::registry().with(env_filter);
    match config.log_format {
        LogFormat::Json => registry.with(fmt_layer.with_ansi(false).json()).init(),
        LogFormat::Text => registry.with(fmt_layer.without_time()).init(),
    }
}
