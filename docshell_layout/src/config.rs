// Copyright 2025 the Docshell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shell configuration: breakpoints, scroll thresholds, spy insets, and timings.
//!
//! All values are build-time constants of a site. They deserialize from TOML with
//! per-field defaults, so an empty table yields [`ShellConfig::default`].
//!
//! ```toml
//! mobile_breakpoint = 1024.0
//! header_elevation = 8.0
//! scroll_top = 400.0
//! copy_ack_ms = 1500
//!
//! [spy]
//! top_inset = 0.30
//! bottom_inset = 0.20
//! ```

use std::path::Path;
use std::time::Duration;

use docshell_spy::window::ObservationWindow;
use serde::{Deserialize, Serialize};

use crate::chrome::ChromeThresholds;
use crate::error::{Error, Result};

/// Tunable constants of the documentation shell.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ShellConfig {
    /// Viewport width (px) below which the shell switches to the mobile menu.
    #[serde(default = "default_mobile_breakpoint")]
    pub mobile_breakpoint: f64,

    /// Scroll offset (px) past which the header is elevated.
    #[serde(default = "default_header_elevation")]
    pub header_elevation: f64,

    /// Scroll offset (px) past which the scroll-to-top button shows.
    #[serde(default = "default_scroll_top")]
    pub scroll_top: f64,

    /// How long the copy acknowledgment stays visible, in milliseconds.
    #[serde(default = "default_copy_ack_ms")]
    pub copy_ack_ms: u64,

    /// Scroll-spy observation window.
    #[serde(default)]
    pub spy: SpyConfig,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: default_mobile_breakpoint(),
            header_elevation: default_header_elevation(),
            scroll_top: default_scroll_top(),
            copy_ack_ms: default_copy_ack_ms(),
            spy: SpyConfig::default(),
        }
    }
}

/// Insets of the scroll-spy observation window, as fractions of the viewport height.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SpyConfig {
    /// Excluded fraction at the top; its edge is the bias line.
    #[serde(default = "default_top_inset")]
    pub top_inset: f64,

    /// Excluded fraction at the bottom.
    #[serde(default = "default_bottom_inset")]
    pub bottom_inset: f64,
}

impl Default for SpyConfig {
    fn default() -> Self {
        Self {
            top_inset: default_top_inset(),
            bottom_inset: default_bottom_inset(),
        }
    }
}

fn default_mobile_breakpoint() -> f64 {
    1024.0
}

fn default_header_elevation() -> f64 {
    8.0
}

fn default_scroll_top() -> f64 {
    400.0
}

fn default_copy_ack_ms() -> u64 {
    1500
}

fn default_top_inset() -> f64 {
    0.30
}

fn default_bottom_inset() -> f64 {
    0.20
}

impl ShellConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&text)?;
        tracing::info!("Loaded shell config from {}", path.display());
        Ok(config)
    }

    /// Check ranges.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("mobile_breakpoint", self.mobile_breakpoint),
            ("header_elevation", self.header_elevation),
            ("scroll_top", self.scroll_top),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::ConfigInvalid {
                    message: format!("`{name}` must be a finite, non-negative number, got {value}"),
                });
            }
        }

        let SpyConfig {
            top_inset,
            bottom_inset,
        } = self.spy;
        for (name, value) in [("spy.top_inset", top_inset), ("spy.bottom_inset", bottom_inset)] {
            if !(0.0..1.0).contains(&value) {
                return Err(Error::ConfigInvalid {
                    message: format!("`{name}` must be in 0.0..1.0, got {value}"),
                });
            }
        }
        if top_inset + bottom_inset >= 1.0 {
            return Err(Error::ConfigInvalid {
                message: format!(
                    "spy insets leave no observation window ({top_inset} + {bottom_inset} >= 1.0)"
                ),
            });
        }
        if top_inset <= bottom_inset {
            tracing::warn!(
                top_inset,
                bottom_inset,
                "spy window is not biased toward the top; sections activate late"
            );
        }
        if self.scroll_top < self.header_elevation {
            tracing::warn!(
                scroll_top = self.scroll_top,
                header_elevation = self.header_elevation,
                "scroll-to-top shows before the header elevates"
            );
        }
        Ok(())
    }

    /// Header and scroll-to-top thresholds.
    pub fn chrome_thresholds(&self) -> ChromeThresholds {
        ChromeThresholds {
            elevation: self.header_elevation,
            scroll_top: self.scroll_top,
        }
    }

    /// The spy's observation window.
    pub fn observation_window(&self) -> ObservationWindow {
        ObservationWindow::new(self.spy.top_inset, self.spy.bottom_inset)
    }

    /// Copy acknowledgment duration.
    pub fn copy_ack(&self) -> Duration {
        Duration::from_millis(self.copy_ack_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = ShellConfig::from_toml("").expect("empty config is valid");
        assert_eq!(config, ShellConfig::default());
        assert_eq!(config.copy_ack(), Duration::from_millis(1500));
        assert_eq!(config.observation_window(), ObservationWindow::new(0.30, 0.20));
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = ShellConfig::from_toml(
            r#"
            mobile_breakpoint = 768.0

            [spy]
            top_inset = 0.25
            "#,
        )
        .expect("valid");
        assert_eq!(config.mobile_breakpoint, 768.0);
        assert_eq!(config.spy.top_inset, 0.25);
        assert_eq!(config.spy.bottom_inset, 0.20);
        assert_eq!(config.scroll_top, 400.0);
    }

    #[test]
    fn negative_threshold_is_rejected() {
        let err = ShellConfig::from_toml("scroll_top = -1.0").unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));
        assert!(err.to_string().contains("scroll_top"));
    }

    #[test]
    fn insets_must_leave_a_window() {
        let err = ShellConfig::from_toml("[spy]\ntop_inset = 0.6\nbottom_inset = 0.5").unwrap_err();
        assert!(err.to_string().contains("no observation window"));

        let err = ShellConfig::from_toml("[spy]\ntop_inset = 1.5").unwrap_err();
        assert!(err.to_string().contains("spy.top_inset"));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = ShellConfig::from_toml("mobile_breakpoint = \"wide\"").unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = ShellConfig::load("/definitely/not/here/docshell.toml").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
