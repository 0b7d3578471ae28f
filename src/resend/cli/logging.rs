//! Diagnostics go to stderr through `tracing-subscriber`, so they never mix
//! with command output or `--json` documents on stdout.
//!
//! Level: `warn` by default, `debug` with `-v` or `DEBUG=1`. `LOG_LEVEL`
//! (a level or a full filter directive) overrides both. `LOG_FORMAT=json`
//! switches to JSON lines.

use resend::env::Environment;
use std::io;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub filter: String,
    pub format: LogFormat,
}

impl LogSettings {
    pub fn from_env(env: &dyn Environment, verbose: bool) -> Self {
        Self::resolve(
            verbose,
            env.var("DEBUG").as_deref(),
            env.var("LOG_LEVEL").as_deref(),
            env.var("LOG_FORMAT").as_deref(),
        )
    }

    fn resolve(
        verbose: bool,
        debug: Option<&str>,
        log_level: Option<&str>,
        log_format: Option<&str>,
    ) -> Self {
        let debug_on = verbose || matches!(debug, Some(v) if !v.is_empty() && v != "0");
        let default_level = if debug_on { Level::DEBUG } else { Level::WARN };
        let filter = log_level
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| default_level.to_string().to_lowercase());
        let format = match log_format {
            Some(f) if f.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };
        Self { filter, format }
    }
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init(settings: &LogSettings) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(Level::WARN.into())
        .parse_lossy(&settings.filter);

    let layer: Box<dyn Layer<Registry> + Send + Sync> = match settings.format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_writer(io::stderr)
            .with_target(true)
            .with_filter(env_filter)
            .boxed(),
        LogFormat::Text => tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .without_time()
            .with_filter(env_filter)
            .boxed(),
    };

    let _ = tracing_subscriber::registry().with(layer).try_init();
}
