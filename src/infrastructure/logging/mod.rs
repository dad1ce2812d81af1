//! Tracing initialization.
//!
//! Stderr gets a human-readable layer filtered by `RUST_LOG` (falling back
//! to the configured level); when a log directory is configured, a JSON
//! daily-rolling file layer is added for structured logs.

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::domain::models::LoggingConfig;

/// Initialize the global subscriber. The returned guard must stay alive for
/// the process lifetime or buffered file output is lost.
pub fn init(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    if let Some(ref log_dir) = config.log_dir {
        let file_appender = rolling::daily(log_dir, "synk.log");
        let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

        let file_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(non_blocking_file)
            .with_ansi(false)
            .with_target(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer.boxed())
            .with(file_layer.boxed())
            .init();
        Ok(Some(guard))
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer.boxed())
            .init();
        Ok(None)
    }
}
