//! Tracing setup for hosts embedding the checker.
//!
//! Library crates only emit events; installing a subscriber is up to the
//! host. This module offers the usual one, controlled by environment
//! variables:
//!
//! - `VTC_LOG` (falling back to `RUST_LOG`): filter directives, e.g.
//!   `debug` or `vtc_checker=trace,vtc_solver=debug`
//! - `VTC_LOG_FORMAT`: `text` (default) or `json`
//!
//! ```bash
//! VTC_LOG=vtc_checker=trace my-host templates/
//! VTC_LOG=debug VTC_LOG_FORMAT=json my-host templates/
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Flat text lines.
    Text,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    /// Parse a `VTC_LOG_FORMAT` value. Unknown values mean [`LogFormat::Text`].
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var("VTC_LOG_FORMAT").unwrap_or_default())
    }
}

/// `VTC_LOG` takes precedence over `RUST_LOG`.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("VTC_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

/// Install a global subscriber writing to stderr.
///
/// Does nothing when neither `VTC_LOG` nor `RUST_LOG` is set, or when a
/// global subscriber is already installed.
pub fn init_tracing() {
    if std::env::var("VTC_LOG").is_err() && std::env::var("RUST_LOG").is_err() {
        return;
    }

    let filter = build_filter();
    // A subscriber installed earlier wins.
    let _ = match LogFormat::from_env() {
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);
            Registry::default().with(filter).with(json_layer).try_init()
        }
        LogFormat::Text => {
            let text_layer = fmt::layer().with_writer(std::io::stderr);
            Registry::default().with(filter).with(text_layer).try_init()
        }
    };
}
