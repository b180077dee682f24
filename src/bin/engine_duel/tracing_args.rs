//! Logging setup for the `engine_duel` binary.
//!
//! Logs always go to stderr; stdout carries the echoed transcripts and the
//! final summary.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// CLI arguments for controlling tracing/logging output.
#[derive(clap::Args, Debug, Clone)]
pub struct TracingArgs {
    /// Increase logging verbosity (can be repeated: -v, -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Suppress all logging except warnings and errors
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Log output format: compact, pretty, or json
    #[arg(long = "log-format", default_value = "compact", global = true)]
    pub log_format: LogFormat,
}

/// Available log output formats.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact single-line format (default)
    #[default]
    Compact,
    /// Pretty multi-line format with colors
    Pretty,
    /// JSON format for machine parsing
    Json,
}

impl TracingArgs {
    /// Level directive derived from the flags, used when `RUST_LOG` is unset.
    pub fn level(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else {
            match self.verbosity {
                0 => "info",
                1 => "debug",
                _ => "trace",
            }
        }
    }

    /// Initialize the tracing subscriber.
    ///
    /// `RUST_LOG` takes priority when set; otherwise the verbosity flags
    /// pick the level for this crate and everything else.
    ///
    /// # Panics
    ///
    /// Panics if the subscriber has already been set.
    pub fn init_tracing(&self) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            let level = self.level();
            EnvFilter::new(format!("{level},engine_duel={level}"))
        };

        let layer = fmt::layer().with_writer(std::io::stderr);
        match self.log_format {
            LogFormat::Compact => {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer.compact())
                    .init();
            }
            LogFormat::Pretty => {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer.pretty())
                    .init();
            }
            LogFormat::Json => {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer.json())
                    .init();
            }
        }
    }
}
