// Copyright 2025 the Docshell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Copy-to-clipboard affordance for code blocks.
//!
//! ## Semantics
//!
//! - [`CopyableCode::press`] writes the exact text through [`Clipboard::write_text`], falling back
//!   to [`Clipboard::legacy_copy`]. When both fail the button silently returns to idle.
//! - On success the label reads [`COPIED_LABEL`] until the acknowledgment timer fires.
//! - Each press cancels the previous timer and schedules a fresh one; only the latest timer can
//!   revert the label, so rapid presses never revert a newer acknowledgment early.

use std::time::Duration;

use crate::ports::{Clipboard, TimerId, Timers};

/// Label of an idle copy button.
pub const COPY_LABEL: &str = "Copy";
/// Label while the acknowledgment is shown.
pub const COPIED_LABEL: &str = "Copied!";

/// Presentation state of a copy button.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CopyState {
    /// Showing [`COPY_LABEL`].
    #[default]
    Idle,
    /// Showing [`COPIED_LABEL`].
    Copied,
}

/// Which mechanism put the text on the clipboard.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CopyOutcome {
    /// The clipboard API accepted the text.
    Clipboard,
    /// The legacy selection copy accepted the text.
    Legacy,
    /// Neither mechanism worked.
    Failed,
}

/// State of one copy button.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CopyableCode {
    state: CopyState,
    timer: Option<TimerId>,
}

impl CopyableCode {
    /// An idle button.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> CopyState {
        self.state
    }

    /// Current label.
    pub fn label(&self) -> &'static str {
        match self.state {
            CopyState::Idle => COPY_LABEL,
            CopyState::Copied => COPIED_LABEL,
        }
    }

    /// The pending acknowledgment timer, if any.
    pub fn pending_timer(&self) -> Option<TimerId> {
        self.timer
    }

    /// Copy `text` and start (or restart) the acknowledgment.
    pub fn press<P>(&mut self, text: &str, ports: &mut P, ack: Duration) -> CopyOutcome
    where
        P: Clipboard + Timers,
    {
        self.cancel(ports);

        let outcome = match ports.write_text(text) {
            Ok(()) => CopyOutcome::Clipboard,
            Err(err) => {
                tracing::debug!(%err, "clipboard write failed, trying legacy copy");
                match ports.legacy_copy(text) {
                    Ok(()) => CopyOutcome::Legacy,
                    Err(err) => {
                        tracing::debug!(%err, "legacy copy failed");
                        CopyOutcome::Failed
                    }
                }
            }
        };

        if outcome == CopyOutcome::Failed {
            self.state = CopyState::Idle;
        } else {
            self.state = CopyState::Copied;
            self.timer = Some(ports.schedule(ack));
        }
        outcome
    }

    /// A timer fired. Returns `true` if it was this button's current timer.
    pub fn timer_fired(&mut self, id: TimerId) -> bool {
        if self.timer != Some(id) {
            return false;
        }
        self.timer = None;
        self.state = CopyState::Idle;
        true
    }

    /// Drop any pending acknowledgment and return to idle.
    pub fn cancel<T: Timers + ?Sized>(&mut self, timers: &mut T) {
        if let Some(id) = self.timer.take() {
            timers.cancel(id);
        }
        self.state = CopyState::Idle;
    }
}
