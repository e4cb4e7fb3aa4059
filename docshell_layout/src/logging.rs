// Copyright 2025 the Docshell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Logging setup using tracing.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::{Error, Result};

/// Environment variable holding the filter directive.
pub const LOG_ENV: &str = "DOCSHELL_LOG";

/// Filter used when [`LOG_ENV`] is unset or invalid.
pub const DEFAULT_FILTER: &str = "docshell_layout=info,warn";

/// Install a stderr subscriber.
///
/// The log level is controlled by the `DOCSHELL_LOG` environment variable.
/// Fails if a global subscriber is already installed.
///
/// # Examples
/// ```bash
/// DOCSHELL_LOG=debug cargo run --example scroll_spy
/// DOCSHELL_LOG=docshell_layout::layout=trace cargo run --example scroll_spy
/// ```
pub fn init() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init()
        .map_err(|e| Error::Logging {
            message: e.to_string(),
        })?;

    tracing::debug!(filter = LOG_ENV, "logging initialized");
    Ok(())
}
