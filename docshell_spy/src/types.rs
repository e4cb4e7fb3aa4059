// Copyright 2025 the Docshell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the scroll-spy: anchors, generations, visibility reports, and events.
//!
//! ## Overview
//!
//! These types describe the spy's inputs and outputs.
//! They are consumed and produced by [`ScrollSpy`](crate::spy::ScrollSpy) and used by the shell.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;

/// Identifier of a named point in page content that navigation can target.
///
/// Anchor ids are compared by their exact text (no normalization, no leading `#`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AnchorId(String);

impl AnchorId {
    /// Create an anchor id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The anchor id as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AnchorId {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

impl From<String> for AnchorId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl core::borrow::Borrow<str> for AnchorId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for AnchorId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Monotonic stamp used to order visibility reports against explicit navigation.
///
/// The spy advances its generation on every explicit navigation and on every
/// change of the tracked set. A host stamps each [`VisibilityReport`] with the
/// generation that was current when it captured the layout snapshot; reports
/// stamped with an older generation are discarded as stale.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(pub(crate) u64);

impl Generation {
    /// The first generation.
    pub const ZERO: Self = Self(0);

    pub(crate) const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// Raw counter value (for logging).
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Bounding box of one anchor's element, in the same space as the report's viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct AnchorBounds {
    /// Anchor the element belongs to.
    pub id: AnchorId,
    /// Element bounds. Only the vertical extent participates in selection.
    pub bounds: Rect,
}

/// Layout snapshot fed to [`ScrollSpy::observe`](crate::spy::ScrollSpy::observe).
///
/// `anchors` lists every tracked anchor whose element currently exists, in any
/// order. Anchors missing from the document are simply absent. Entries for
/// ids the spy does not track are ignored.
#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityReport {
    /// Generation current when the snapshot was captured.
    pub generation: Generation,
    /// Visible viewport rectangle.
    pub viewport: Rect,
    /// Bounds of the anchors' elements.
    pub anchors: Vec<AnchorBounds>,
}

/// Change of the active section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpyEvent {
    /// A (new) section became active.
    Activated {
        /// Section active before the change, if any.
        previous: Option<AnchorId>,
        /// Section active now.
        current: AnchorId,
    },
    /// No section is active any more because nothing is tracked.
    Cleared {
        /// Section that was active.
        previous: AnchorId,
    },
}

impl SpyEvent {
    /// The section active after this event, if any.
    pub fn current(&self) -> Option<&AnchorId> {
        match self {
            Self::Activated { current, .. } => Some(current),
            Self::Cleared { .. } => None,
        }
    }
}

/// Result of evaluating one [`VisibilityReport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Observation {
    /// The report predates the latest navigation or tracked-set change.
    Stale,
    /// A navigation lock is held and the report's winner is not the target.
    Suppressed,
    /// The report's winner is the navigation target; the lock was released.
    Arrived,
    /// The active section did not change.
    Unchanged,
    /// The active section changed.
    Changed(SpyEvent),
}

/// Result of an explicit navigation request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// The target is not tracked; nothing changed.
    Ignored,
    /// The target was already active.
    AlreadyActive,
    /// The target became active.
    Activated(SpyEvent),
}
