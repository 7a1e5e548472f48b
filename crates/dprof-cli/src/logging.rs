//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Log levels follow the usual split: `error` for fatal problems, `warn`
//! for non-fatal issues, `info` for pipeline progress, `debug` for
//! per-adapter detail.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::Subscriber;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, Layer, fmt, layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt,
};

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable format with colors.
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
    /// JSON format for machine parsing.
    Json,
}

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level filter applied when no env filter is in effect.
    pub level_filter: LevelFilter,
    /// Honor `RUST_LOG` when the user gave no explicit verbosity.
    pub use_env_filter: bool,
    pub format: LogFormat,
    /// Optional log file path. When set, logs go to the file instead of
    /// stderr.
    pub log_file: Option<PathBuf>,
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            format: LogFormat::default(),
            log_file: None,
            with_ansi: true,
        }
    }
}

/// Install the global subscriber described by `config`.
pub fn init_logging(config: &LogConfig) -> anyhow::Result<()> {
    let filter = if config.use_env_filter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.level_filter.to_string()))
    } else {
        EnvFilter::new(config.level_filter.to_string())
    };

    let layer = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            format_layer(config, Arc::new(file))
        }
        None => format_layer(config, io::stderr as fn() -> io::Stderr),
    };

    tracing_subscriber::registry().with(filter).with(layer).try_init()?;
    Ok(())
}

fn format_layer<S, W>(config: &LogConfig, writer: W) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'a> fmt::MakeWriter<'a> + Send + Sync + 'static,
{
    let base = fmt::layer()
        .with_ansi(config.with_ansi)
        .with_target(false)
        .with_writer(writer);
    match config.format {
        LogFormat::Pretty => base.boxed(),
        LogFormat::Compact => base.compact().boxed(),
        LogFormat::Json => base.json().boxed(),
    }
}
