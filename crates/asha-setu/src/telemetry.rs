//! Tracing subscriber setup.
//!
//! Development builds also enable the matching engine's per-request debug
//! events so ranking counts show up next to the request logs. `RUST_LOG`, when
//! set, replaces the computed filter entirely.

use crate::config::{AppEnvironment, TelemetryConfig};
use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Target of the matching engine's debug events.
pub const ENGINE_TARGET: &str = "asha_setu::schemes";

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log filter '{value}'")]
    EnvFilter {
        value: String,
        #[source]
        source: ParseError,
    },
    #[error("failed to install subscriber: {0}")]
    Subscriber(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Filter directives for the configured level in the given environment.
pub fn filter_directives(log_level: &str, environment: AppEnvironment) -> String {
    let level = log_level.trim();
    let verbose = level.eq_ignore_ascii_case("debug") || level.eq_ignore_ascii_case("trace");

    match environment {
        AppEnvironment::Development if !verbose && !level.contains(ENGINE_TARGET) => {
            format!("{level},{ENGINE_TARGET}=debug")
        }
        _ => level.to_string(),
    }
}

/// Build the filter from configuration alone, ignoring `RUST_LOG`.
pub fn configured_filter(
    config: &TelemetryConfig,
    environment: AppEnvironment,
) -> Result<EnvFilter, TelemetryError> {
    let directives = filter_directives(&config.log_level, environment);
    EnvFilter::try_new(&directives).map_err(|source| TelemetryError::EnvFilter {
        value: directives,
        source,
    })
}

/// Install the global subscriber.
///
/// Development logs keep event targets so engine events are attributable;
/// test and production output is compact and free of ANSI escapes.
pub fn init(config: &TelemetryConfig, environment: AppEnvironment) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => configured_filter(config, environment)?,
    };

    let builder = tracing_subscriber::fmt().with_env_filter(env_filter);
    let installed = match environment {
        AppEnvironment::Development => builder.with_target(true).try_init(),
        AppEnvironment::Test | AppEnvironment::Production => builder
            .with_target(false)
            .compact()
            .with_ansi(false)
            .try_init(),
    };

    installed.map_err(TelemetryError::Subscriber)
}
