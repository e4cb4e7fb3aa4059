// Copyright 2025 the Docshell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Environment ports: the browser capabilities the shell uses, as traits.
//!
//! ## Overview
//!
//! The shell never touches globals. A host (wasm bindings, a TUI, or the
//! [`MemoryHost`](crate::adapters::memory::MemoryHost) used in tests) implements these traits and
//! is owned by [`DocsLayout`](crate::layout::DocsLayout). Anything implementing every port is a
//! [`Host`].
//!
//! Smooth scrolling, hash rewriting and clipboard access are *requests*: the host decides how
//! to carry them out. Reads (`viewport`, `scroll_offset`, `hash`) must reflect the current state.

use std::time::Duration;

use docshell_spy::types::AnchorId;
use kurbo::{Rect, Size};
use thiserror::Error;

/// Viewport size queries.
pub trait Viewport {
    /// Current viewport size in CSS pixels.
    fn viewport(&self) -> Size;
}

/// Document scrolling.
pub trait Scroll {
    /// Current vertical scroll offset of the document.
    fn scroll_offset(&self) -> f64;

    /// Smooth-scroll the document to its top.
    fn scroll_to_top(&mut self);

    /// Smooth-scroll `id`'s element into view, aligned to the top of its container.
    ///
    /// Returns `false` when the element does not exist; nothing scrolls then.
    fn scroll_into_view(&mut self, id: &AnchorId) -> bool;

    /// Scroll the sidebar rail so that `id`'s entry is visible.
    fn reveal_sidebar_entry(&mut self, id: &AnchorId);
}

/// URL fragment and route history.
pub trait History {
    /// Current URL fragment without the leading `#`, if any.
    fn hash(&self) -> Option<String>;

    /// Replace the URL fragment without adding a history entry.
    fn replace_hash(&mut self, id: &AnchorId);

    /// Navigate to another route (`/path` or `/path#anchor`), adding a history entry.
    fn push_route(&mut self, href: &str);
}

/// Why a clipboard write failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// The mechanism does not exist in this environment.
    #[error("clipboard unavailable")]
    Unavailable,
    /// The user or the platform refused access.
    #[error("clipboard access denied")]
    Denied,
}

/// System clipboard.
pub trait Clipboard {
    /// Write `text` through the asynchronous clipboard API.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;

    /// Write `text` through the legacy selection-based copy command.
    fn legacy_copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Handle of a scheduled timer.
///
/// Hosts must never hand out the same id twice during a shell's lifetime, so a stale
/// handle can never be mistaken for a newer timer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

impl TimerId {
    /// Wrap a host-minted raw id.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// One-shot timers. Fired timers come back as
/// [`ShellEvent::TimerFired`](crate::layout::ShellEvent::TimerFired).
pub trait Timers {
    /// Schedule a one-shot timer.
    fn schedule(&mut self, delay: Duration) -> TimerId;

    /// Cancel a pending timer. Unknown or already fired ids are ignored.
    fn cancel(&mut self, id: TimerId);
}

/// Intersection observation of anchor elements.
///
/// While observing, the host sends
/// [`ShellEvent::Layout`](crate::layout::ShellEvent::Layout) reports stamped with
/// [`DocsLayout::generation`](crate::layout::DocsLayout::generation).
pub trait Visibility {
    /// Start (or restart) observing exactly these anchors.
    fn observe(&mut self, ids: &[AnchorId]);

    /// Stop observing everything.
    fn disconnect(&mut self);
}

/// Kinds of global event listeners the shell needs while mounted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ListenerKind {
    /// Document scroll (passive).
    Scroll,
    /// Viewport resize.
    Resize,
    /// Key presses.
    KeyDown,
    /// Mouse and touch presses.
    PointerDown,
}

impl ListenerKind {
    /// Every listener the shell installs.
    pub const ALL: [Self; 4] = [Self::Scroll, Self::Resize, Self::KeyDown, Self::PointerDown];
}

/// Global event listener registration.
pub trait Listeners {
    /// Start delivering events of `kind`.
    fn listen(&mut self, kind: ListenerKind);

    /// Stop delivering events of `kind`.
    fn unlisten(&mut self, kind: ListenerKind);
}

/// Interactive regions the shell hit-tests against.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    /// The mobile menu overlay panel.
    MenuPanel,
    /// The hamburger toggle button.
    MenuToggle,
}

/// Bounds of rendered regions.
pub trait Regions {
    /// Bounds of `region` in viewport coordinates, or `None` if it is not rendered.
    fn region(&self, region: Region) -> Option<Rect>;
}

/// Everything the shell needs from its environment.
pub trait Host:
    Viewport + Scroll + History + Clipboard + Timers + Visibility + Listeners + Regions
{
}

impl<T> Host for T where
    T: Viewport + Scroll + History + Clipboard + Timers + Visibility + Listeners + Regions
{
}
