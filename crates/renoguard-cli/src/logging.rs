//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Logs go to stderr so JSON results on stdout stay machine-readable.
//!
//! # Log Levels
//!
//! - `warn`: default; only problems
//! - `info`: one summary line per check (`-v`)
//! - `debug`: engine configuration and per-category dispatch (`-vv`)
//! - `trace`: everything (`-vvv`)

use std::io;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: Level,
    /// Whether to include target (module path) in log output.
    pub with_target: bool,
    pub with_ansi: bool,
    pub format: LogFormat,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable multi-line format.
    Pretty,
    /// Single-line format.
    #[default]
    Compact,
    /// JSON lines for machine parsing.
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            with_target: false,
            with_ansi: true,
            format: LogFormat::default(),
        }
    }
}

impl LogConfig {
    /// Create a `LogConfig` from CLI verbosity count.
    #[must_use]
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self {
            level,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        // Targets help when logs are shipped somewhere else.
        self.with_target = format == LogFormat::Json;
        self
    }

    #[must_use]
    pub fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }
}

/// Initialize the global tracing subscriber. Call once at startup.
pub fn init_logging(config: &LogConfig) {
    let filter = build_env_filter(config.level);
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(io::stderr)
                    .with_target(config.with_target),
            )
            .init(),
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_writer(io::stderr)
                    .with_ansi(config.with_ansi)
                    .with_target(config.with_target)
                    .without_time(),
            )
            .init(),
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_writer(io::stderr)
                    .with_ansi(config.with_ansi)
                    .with_target(config.with_target),
            )
            .init(),
    }
}

/// Build an `EnvFilter` from the given level, respecting `RUST_LOG`.
fn build_env_filter(level: Level) -> EnvFilter {
    let level_str = level.as_str().to_lowercase();

    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // External crates stay at warn level to reduce noise
        EnvFilter::new(format!(
            "warn,renoguard={level},renoguard_app={level},renoguard_catalog={level},\
             renoguard_domain={level},renoguard_settings={level}",
            level = level_str
        ))
    })
}
