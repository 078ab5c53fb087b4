// SPDX-License-Identifier: MPL-2.0
//! Structured logging setup with tracing.
//!
//! `RUST_LOG` wins when set; otherwise the `[general] log_level` directive
//! from the settings file is used.

use crate::config::defaults::DEFAULT_LOG_LEVEL;
use crate::error::{Error, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber: console output filtered by
/// [`build_filter`].
///
/// # Errors
///
/// Returns [`Error::Config`] when a global subscriber is already installed.
pub fn init(configured_level: &str) -> Result<()> {
    tracing_subscriber::registry()
        .with(build_filter(configured_level))
        .with(fmt::layer().with_target(false))
        .try_init()
        .map_err(|e| Error::Config(format!("logging already initialized: {e}")))?;

    tracing::debug!("logging initialized");
    Ok(())
}

/// `RUST_LOG`, else `configured_level`, else [`DEFAULT_LOG_LEVEL`] when the
/// configured directive does not parse.
#[must_use]
pub fn build_filter(configured_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured_level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}
