// Copyright 2025 the Docshell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for loading and validating site content and shell configuration.
//!
//! Runtime shell operations do not fail: bad anchors are no-ops, clipboard failures
//! revert silently, and stale selections re-resolve. Only loading can go wrong.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading configuration or page content.
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Infrastructure
    // ─────────────────────────────────────────────────────────────
    /// Reading a configuration file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file is not valid TOML or does not match the schema.
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The logging subscriber could not be installed.
    #[error("Failed to initialize logging: {message}")]
    Logging {
        /// Subscriber error text.
        message: String,
    },

    // ─────────────────────────────────────────────────────────────
    // Configuration
    // ─────────────────────────────────────────────────────────────
    /// A threshold or inset is out of range.
    #[error("Invalid configuration: {message}")]
    ConfigInvalid {
        /// What is wrong.
        message: String,
    },

    // ─────────────────────────────────────────────────────────────
    // Content
    // ─────────────────────────────────────────────────────────────
    /// A path does not name a documentation route.
    #[error("Unknown route: {path}")]
    UnknownRoute {
        /// Offending path.
        path: String,
    },

    /// Two pages claim the same route.
    #[error("Duplicate page for route {route}")]
    DuplicatePage {
        /// Route path.
        route: String,
    },

    /// Two navigation links on one page target the same anchor.
    #[error("Duplicate anchor `{anchor}` on page {route}")]
    DuplicateAnchor {
        /// Route path of the page.
        route: String,
        /// Repeated anchor id.
        anchor: String,
    },

    /// Two code blocks on one page share an id.
    #[error("Duplicate code block `{block}` on page {route}")]
    DuplicateBlock {
        /// Route path of the page.
        route: String,
        /// Repeated block id.
        block: String,
    },

    /// A navigation link sets both or neither of its targets.
    #[error("Link `{label}` must set exactly one of `target_id` or `to`")]
    AmbiguousLink {
        /// Link label.
        label: String,
    },

    /// A cross-page link names an anchor the target page does not declare.
    #[error("Link `{label}` on page {route} points at `{target}`, which that page does not declare")]
    DanglingLink {
        /// Route path of the page holding the link.
        route: String,
        /// Link label.
        label: String,
        /// `route#anchor` the link points at.
        target: String,
    },
}
