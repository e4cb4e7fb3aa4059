// Copyright 2025 the Docshell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory host: a deterministic stand-in for a browser.
//!
//! ## Model
//!
//! - The document is a list of anchor elements with fixed bounds in document coordinates.
//! - Scrolling is instant: smooth-scroll requests move the offset immediately.
//! - Time only moves through [`MemoryHost::advance`], which returns the timers that fired.
//! - [`MemoryHost::report`] builds the visibility snapshot an intersection observer would deliver.
//!
//! It records what the shell asked for (hash rewrites, pushed routes, revealed sidebar entries,
//! observed anchors, installed listeners) so tests and demos can inspect it.

use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use docshell_spy::types::{AnchorBounds, AnchorId, Generation, VisibilityReport};
use kurbo::{Rect, Size};

use crate::ports::{
    Clipboard, ClipboardError, History, ListenerKind, Listeners, Region, Regions, Scroll,
    TimerId, Timers, Viewport, Visibility,
};

/// Which clipboard mechanisms work.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ClipboardMode {
    /// The clipboard API works.
    #[default]
    Available,
    /// Only the legacy selection copy works.
    LegacyOnly,
    /// Everything is refused.
    Denied,
}

/// A fake browser environment.
#[derive(Clone, Debug)]
pub struct MemoryHost {
    viewport: Size,
    scroll_offset: f64,
    hash: Option<String>,
    clipboard: Option<String>,
    clipboard_mode: ClipboardMode,
    elements: Vec<AnchorBounds>,
    observed: Vec<AnchorId>,
    listeners: BTreeSet<ListenerKind>,
    regions: BTreeMap<Region, Rect>,
    now: Duration,
    next_timer: u64,
    timers: BTreeMap<TimerId, Duration>,
    hash_writes: usize,
    routes: Vec<String>,
    revealed: Vec<AnchorId>,
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new(Size::new(1280.0, 800.0))
    }
}

impl MemoryHost {
    /// A host with the given viewport and an empty document.
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            scroll_offset: 0.0,
            hash: None,
            clipboard: None,
            clipboard_mode: ClipboardMode::default(),
            elements: Vec::new(),
            observed: Vec::new(),
            listeners: BTreeSet::new(),
            regions: BTreeMap::new(),
            now: Duration::ZERO,
            next_timer: 0,
            timers: BTreeMap::new(),
            hash_writes: 0,
            routes: Vec::new(),
            revealed: Vec::new(),
        }
    }

    /// Lay out anchors as consecutive sections of the given heights, starting at `top`.
    #[must_use]
    pub fn with_sections(mut self, top: f64, sections: &[(&str, f64)]) -> Self {
        let width = self.viewport.width;
        let mut y = top;
        self.elements = sections
            .iter()
            .map(|(id, height)| {
                let bounds = Rect::new(0.0, y, width, y + height);
                y += height;
                AnchorBounds {
                    id: AnchorId::from(*id),
                    bounds,
                }
            })
            .collect();
        self
    }

    /// Set the URL fragment as if the page was loaded with it.
    #[must_use]
    pub fn with_hash(mut self, hash: &str) -> Self {
        self.hash = Some(hash.trim_start_matches('#').to_string());
        self
    }

    /// Resize the viewport. Send [`ShellEvent::Resized`](crate::layout::ShellEvent::Resized) afterwards.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Scroll as the reader would. Send
    /// [`ShellEvent::Scrolled`](crate::layout::ShellEvent::Scrolled) afterwards.
    pub fn set_scroll_offset(&mut self, offset: f64) {
        self.scroll_offset = offset.max(0.0);
    }

    /// Choose which clipboard mechanisms work.
    pub fn set_clipboard_mode(&mut self, mode: ClipboardMode) {
        self.clipboard_mode = mode;
    }

    /// Place a rendered region.
    pub fn set_region(&mut self, region: Region, bounds: Option<Rect>) {
        match bounds {
            Some(b) => {
                self.regions.insert(region, b);
            }
            None => {
                self.regions.remove(&region);
            }
        }
    }

    /// Clipboard contents.
    pub fn clipboard(&self) -> Option<&str> {
        self.clipboard.as_deref()
    }

    /// Anchors currently under observation.
    pub fn observed(&self) -> &[AnchorId] {
        &self.observed
    }

    /// Whether a listener of `kind` is installed.
    pub fn is_listening(&self, kind: ListenerKind) -> bool {
        self.listeners.contains(&kind)
    }

    /// Number of installed listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Number of timers not yet fired or cancelled.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// How many times the hash was rewritten.
    pub fn hash_writes(&self) -> usize {
        self.hash_writes
    }

    /// Routes pushed onto the history, oldest first.
    pub fn pushed_routes(&self) -> &[String] {
        &self.routes
    }

    /// Sidebar entries revealed, oldest first.
    pub fn revealed(&self) -> &[AnchorId] {
        &self.revealed
    }

    /// Let `by` elapse and return the timers that fired, in deadline order.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerId> {
        self.now += by;
        let mut due: Vec<(Duration, TimerId)> = self
            .timers
            .iter()
            .filter(|(_, deadline)| **deadline <= self.now)
            .map(|(id, deadline)| (*deadline, *id))
            .collect();
        due.sort();
        for (_, id) in &due {
            self.timers.remove(id);
        }
        due.into_iter().map(|(_, id)| id).collect()
    }

    /// Visibility snapshot of the observed anchors at the current scroll offset.
    ///
    /// Coordinates are document coordinates; the viewport rect is offset accordingly.
    pub fn report(&self, generation: Generation) -> VisibilityReport {
        VisibilityReport {
            generation,
            viewport: Rect::new(
                0.0,
                self.scroll_offset,
                self.viewport.width,
                self.scroll_offset + self.viewport.height,
            ),
            anchors: self
                .elements
                .iter()
                .filter(|e| self.observed.contains(&e.id))
                .cloned()
                .collect(),
        }
    }
}

impl Viewport for MemoryHost {
    fn viewport(&self) -> Size {
        self.viewport
    }
}

impl Scroll for MemoryHost {
    fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    fn scroll_to_top(&mut self) {
        self.scroll_offset = 0.0;
    }

    fn scroll_into_view(&mut self, id: &AnchorId) -> bool {
        match self.elements.iter().find(|e| e.id == *id) {
            Some(e) => {
                self.scroll_offset = e.bounds.y0.max(0.0);
                true
            }
            None => false,
        }
    }

    fn reveal_sidebar_entry(&mut self, id: &AnchorId) {
        self.revealed.push(id.clone());
    }
}

impl History for MemoryHost {
    fn hash(&self) -> Option<String> {
        self.hash.clone()
    }

    fn replace_hash(&mut self, id: &AnchorId) {
        self.hash = Some(id.to_string());
        self.hash_writes += 1;
    }

    fn push_route(&mut self, href: &str) {
        self.routes.push(href.to_string());
        self.hash = href.split_once('#').map(|(_, h)| h.to_string());
    }
}

impl Clipboard for MemoryHost {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        match self.clipboard_mode {
            ClipboardMode::Available => {
                self.clipboard = Some(text.to_string());
                Ok(())
            }
            ClipboardMode::LegacyOnly => Err(ClipboardError::Unavailable),
            ClipboardMode::Denied => Err(ClipboardError::Denied),
        }
    }

    fn legacy_copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        match self.clipboard_mode {
            ClipboardMode::Available | ClipboardMode::LegacyOnly => {
                self.clipboard = Some(text.to_string());
                Ok(())
            }
            ClipboardMode::Denied => Err(ClipboardError::Denied),
        }
    }
}

impl Timers for MemoryHost {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        self.next_timer += 1;
        let id = TimerId::from_raw(self.next_timer);
        self.timers.insert(id, self.now + delay);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.timers.remove(&id);
    }
}

impl Visibility for MemoryHost {
    fn observe(&mut self, ids: &[AnchorId]) {
        self.observed = ids.to_vec();
    }

    fn disconnect(&mut self) {
        self.observed.clear();
    }
}

impl Listeners for MemoryHost {
    fn listen(&mut self, kind: ListenerKind) {
        self.listeners.insert(kind);
    }

    fn unlisten(&mut self, kind: ListenerKind) {
        self.listeners.remove(&kind);
    }
}

impl Regions for MemoryHost {
    fn region(&self, region: Region) -> Option<Rect> {
        self.regions.get(&region).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timers_fire_in_deadline_order() {
        let mut host = MemoryHost::default();
        let late = host.schedule(Duration::from_millis(300));
        let early = host.schedule(Duration::from_millis(100));
        let cancelled = host.schedule(Duration::from_millis(200));
        host.cancel(cancelled);
        assert_eq!(host.advance(Duration::from_millis(50)), Vec::new());
        assert_eq!(host.advance(Duration::from_millis(500)), vec![early, late]);
        assert_eq!(host.pending_timers(), 0);
    }

    #[test]
    fn report_contains_only_observed_anchors() {
        let mut host = MemoryHost::default().with_sections(0.0, &[("a", 500.0), ("b", 500.0)]);
        host.observe(&[AnchorId::from("b")]);
        host.set_scroll_offset(200.0);
        let r = host.report(Generation::ZERO);
        assert_eq!(r.viewport, Rect::new(0.0, 200.0, 1280.0, 1000.0));
        assert_eq!(r.anchors.len(), 1);
        assert_eq!(r.anchors[0].bounds.y0, 500.0);
    }

    #[test]
    fn scroll_into_view_requires_element() {
        let mut host = MemoryHost::default().with_sections(100.0, &[("a", 300.0)]);
        assert!(host.scroll_into_view(&AnchorId::from("a")));
        assert_eq!(host.scroll_offset(), 100.0);
        assert!(!host.scroll_into_view(&AnchorId::from("zzz")));
        assert_eq!(host.scroll_offset(), 100.0);
    }
}
