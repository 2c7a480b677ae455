//! Centralised tracing initialisation for applications embedding the workshop.
//!
//! Call [`init_tracing`] once at program start to configure the global
//! subscriber with an `EnvFilter` and optional JSON formatting, or
//! [`init_tracing_from_env`] before [`crate::Workshop::from_env`] to pick the
//! format from `HEELTAP_LOG_FORMAT`.
//!
//! Safe to call more than once: the global subscriber can only be set once
//! per process, so later calls are ignored.

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Set to `json` to emit newline-delimited JSON logs.
pub const LOG_FORMAT_VAR: &str = "HEELTAP_LOG_FORMAT";

/// Initialise the global tracing subscriber.
///
/// * `json`: when `true`, emit newline-delimited JSON log lines.
/// * `level`: default verbosity when `RUST_LOG` is not set.
///
/// Respects the `RUST_LOG` environment variable for fine-grained filtering.
pub fn init_tracing(json: bool, level: Level) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));
    let registry = tracing_subscriber::registry().with(env_filter);
    let layer = fmt::layer().with_target(false);

    let installed = if json {
        registry.with(layer.json()).try_init()
    } else {
        registry.with(layer).try_init()
    };
    if installed.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}

/// Initialise tracing at `INFO`, picking the format from `HEELTAP_LOG_FORMAT`.
pub fn init_tracing_from_env() {
    init_tracing(json_requested(std::env::var(LOG_FORMAT_VAR).ok().as_deref()), Level::INFO);
}

fn json_requested(format: Option<&str>) -> bool {
    format.is_some_and(|f| f.trim().eq_ignore_ascii_case("json"))
}
