// Copyright 2025 the Docshell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-spy state machine.
//!
//! ## Overview
//!
//! [`ScrollSpy`] owns the ordered set of tracked anchors and the single active anchor.
//! Three things move the active anchor:
//!
//! - [`ScrollSpy::track`] / [`ScrollSpy::initialize`]: the tracked set changes.
//! - [`ScrollSpy::observe`]: a passive [`VisibilityReport`] arrives.
//! - [`ScrollSpy::navigate`]: the user explicitly jumps to an anchor.
//!
//! ## Ordering
//!
//! Explicit navigation advances the spy's [`Generation`] and takes a navigation lock on the
//! target. Reports stamped with an older generation are stale and dropped, so a report captured
//! before the jump can never override it. While the lock is held, fresh reports that pick a
//! different anchor are suppressed: the smooth scroll is still animating past intermediate
//! sections. The lock is released when:
//!
//! - a report picks the target;
//! - the host signals genuine user scrolling through [`ScrollSpy::user_scrolled`];
//! - two consecutive locked reports show scrolling has stopped short of the target (same
//!   viewport offset), or has moved away from it. The browser stops at the document end, so a
//!   short last section may never reach the bias line; passive tracking resumes from there.
//!
//! ## Invariants
//!
//! - At most one anchor is active.
//! - While at least one anchor is tracked, exactly one is active.
//! - The spy never writes the URL hash; that is the caller's business on explicit navigation.

use alloc::vec::Vec;

use crate::types::{
    AnchorBounds, AnchorId, Generation, Navigation, Observation, SpyEvent, VisibilityReport,
};
use crate::window::{ObservationWindow, Pick, distance_of, pick};

/// Tracks which tracked anchor is currently in view.
#[derive(Clone, Debug, Default)]
pub struct ScrollSpy {
    tracked: Vec<AnchorId>,
    active: Option<AnchorId>,
    window: ObservationWindow,
    generation: Generation,
    lock: Option<AnchorId>,
    // Viewport offset of the last report suppressed by the lock.
    lock_offset: Option<f64>,
}

impl ScrollSpy {
    /// Create an empty spy using `window` for observation.
    pub fn new(window: ObservationWindow) -> Self {
        Self {
            window,
            ..Self::default()
        }
    }

    /// The observation window.
    pub fn window(&self) -> ObservationWindow {
        self.window
    }

    /// Replace the observation window. Takes effect with the next report.
    pub fn set_window(&mut self, window: ObservationWindow) {
        self.window = window;
    }

    /// Tracked anchors in document order.
    pub fn tracked(&self) -> &[AnchorId] {
        &self.tracked
    }

    /// Whether `id` is tracked.
    pub fn is_tracked(&self, id: &str) -> bool {
        self.tracked.iter().any(|t| t.as_str() == id)
    }

    /// The active anchor, if any.
    pub fn active(&self) -> Option<&AnchorId> {
        self.active.as_ref()
    }

    /// Generation to stamp on reports captured now.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Target of the navigation lock, if one is held.
    pub fn locked_target(&self) -> Option<&AnchorId> {
        self.lock.as_ref()
    }

    /// Replace the tracked set.
    ///
    /// The active anchor survives if it is still tracked; otherwise the first tracked anchor
    /// becomes active. An empty set clears the active anchor. Duplicate ids keep their first
    /// position.
    pub fn track<I>(&mut self, ids: I) -> Option<SpyEvent>
    where
        I: IntoIterator<Item = AnchorId>,
    {
        self.replace_tracked(ids);
        self.generation = self.generation.next();
        if let Some(target) = &self.lock
            && !self.tracked.contains(target)
        {
            self.release_lock();
        }

        if self.tracked.is_empty() {
            self.release_lock();
            return self
                .active
                .take()
                .map(|previous| SpyEvent::Cleared { previous });
        }

        match &self.active {
            Some(current) if self.tracked.contains(current) => None,
            _ => {
                let first = self.tracked[0].clone();
                Some(self.activate(first))
            }
        }
    }

    /// Replace the tracked set, preferring `hash` as the active anchor when it is tracked.
    ///
    /// Used on page load, where the URL fragment names the section the reader asked for.
    /// A leading `#` on `hash` is ignored.
    pub fn initialize<I>(&mut self, ids: I, hash: Option<&str>) -> Option<SpyEvent>
    where
        I: IntoIterator<Item = AnchorId>,
    {
        let before = self.active.clone();
        let mut event = self.track(ids);
        let wanted = hash
            .map(|h| h.strip_prefix('#').unwrap_or(h))
            .and_then(|h| self.tracked.iter().find(|t| t.as_str() == h))
            .cloned();
        if let Some(wanted) = wanted
            && self.active.as_ref() != Some(&wanted)
        {
            self.active = Some(wanted.clone());
            event = Some(SpyEvent::Activated {
                previous: before,
                current: wanted,
            });
        }
        event
    }

    /// Explicitly jump to `id`.
    ///
    /// The target becomes active immediately and holds a navigation lock until the
    /// observed layout catches up or the user scrolls.
    pub fn navigate(&mut self, id: &str) -> Navigation {
        let Some(target) = self.tracked.iter().find(|t| t.as_str() == id).cloned() else {
            return Navigation::Ignored;
        };
        self.generation = self.generation.next();
        self.lock = Some(target.clone());
        self.lock_offset = None;
        if self.active.as_ref() == Some(&target) {
            return Navigation::AlreadyActive;
        }
        Navigation::Activated(self.activate(target))
    }

    /// Release the navigation lock because the user scrolled on their own.
    ///
    /// Returns `true` if a lock was held.
    pub fn user_scrolled(&mut self) -> bool {
        self.lock_offset = None;
        self.lock.take().is_some()
    }

    /// Evaluate a layout snapshot.
    pub fn observe(&mut self, report: &VisibilityReport) -> Observation {
        if report.generation < self.generation {
            return Observation::Stale;
        }
        if self.tracked.is_empty() {
            return Observation::Unchanged;
        }

        let mut candidates: Vec<(usize, &AnchorBounds)> = report
            .anchors
            .iter()
            .filter_map(|a| {
                self.tracked
                    .iter()
                    .position(|t| *t == a.id)
                    .map(|idx| (idx, a))
            })
            .collect();
        candidates.sort_by_key(|(idx, _)| *idx);

        let window = self.window.window(report.viewport);
        let bias = self.window.bias_line(report.viewport);
        let winner = match pick(&candidates, window, bias) {
            None => return Observation::Unchanged,
            Some(Pick::Intersecting(idx)) => idx,
            Some(Pick::Nearest(idx)) => {
                // Nothing intersects: keep the previous section unless the nearest is strictly closer.
                let nearest = distance_of(&candidates, &self.tracked[idx], bias);
                let keep = self
                    .active
                    .as_ref()
                    .and_then(|current| distance_of(&candidates, current, bias))
                    .is_some_and(|d| nearest.is_some_and(|n| n >= d));
                if keep {
                    return self.settle_on_active();
                }
                idx
            }
        };

        let winner = self.tracked[winner].clone();
        if let Some(target) = &self.lock {
            if *target == winner {
                self.release_lock();
                return Observation::Arrived;
            }
            let offset = report.viewport.y0;
            // Signed distance the target still has to travel to reach the bias line.
            let remaining = candidates
                .iter()
                .find(|(_, a)| a.id == *target)
                .map(|(_, a)| a.bounds.y0 - bias);
            let settled = self.lock_offset.is_some_and(|previous| {
                let moved = offset - previous;
                moved == 0.0 || remaining.is_some_and(|r| moved * r < 0.0)
            });
            if !settled {
                self.lock_offset = Some(offset);
                return Observation::Suppressed;
            }
            self.release_lock();
        }
        if self.active.as_ref() == Some(&winner) {
            return Observation::Unchanged;
        }
        Observation::Changed(self.activate(winner))
    }

    // A report chose to keep the active anchor; that also counts as arrival for a held lock.
    fn settle_on_active(&mut self) -> Observation {
        match (&self.lock, &self.active) {
            (Some(target), Some(current)) if target == current => {
                self.release_lock();
                Observation::Arrived
            }
            (Some(_), _) => Observation::Suppressed,
            _ => Observation::Unchanged,
        }
    }

    fn release_lock(&mut self) {
        self.lock = None;
        self.lock_offset = None;
    }

    fn activate(&mut self, current: AnchorId) -> SpyEvent {
        let previous = self.active.replace(current.clone());
        SpyEvent::Activated { previous, current }
    }

    fn replace_tracked<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = AnchorId>,
    {
        self.tracked.clear();
        for id in ids {
            if !self.tracked.contains(&id) {
                self.tracked.push(id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Rect;

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 800.0, 1000.0);

    fn ids(list: &[&str]) -> Vec<AnchorId> {
        list.iter().map(|s| AnchorId::from(*s)).collect()
    }

    fn report(spy: &ScrollSpy, tops: &[(&str, f64, f64)]) -> VisibilityReport {
        VisibilityReport {
            generation: spy.generation(),
            viewport: VIEWPORT,
            anchors: tops
                .iter()
                .map(|(id, y0, y1)| AnchorBounds {
                    id: AnchorId::from(*id),
                    bounds: Rect::new(0.0, *y0, 800.0, *y1),
                })
                .collect(),
        }
    }

    fn spy_with(list: &[&str]) -> ScrollSpy {
        let mut spy = ScrollSpy::new(ObservationWindow::default());
        let _ = spy.track(ids(list));
        spy
    }

    // Tracking a non-empty set activates the first anchor.
    #[test]
    fn track_activates_first_anchor() {
        let mut spy = ScrollSpy::new(ObservationWindow::default());
        let ev = spy.track(ids(&["intro", "auth", "stream"]));
        assert_eq!(
            ev,
            Some(SpyEvent::Activated {
                previous: None,
                current: AnchorId::from("intro"),
            })
        );
        assert_eq!(spy.active(), Some(&AnchorId::from("intro")));
    }

    // Re-tracking keeps the active anchor when it survives, resets otherwise.
    #[test]
    fn retrack_keeps_surviving_active_anchor() {
        let mut spy = spy_with(&["a", "b", "c"]);
        let _ = spy.navigate("b");
        assert_eq!(spy.track(ids(&["x", "b"])), None);
        assert_eq!(spy.active(), Some(&AnchorId::from("b")));

        let ev = spy.track(ids(&["y", "z"]));
        assert_eq!(
            ev,
            Some(SpyEvent::Activated {
                previous: Some(AnchorId::from("b")),
                current: AnchorId::from("y"),
            })
        );
        assert_eq!(spy.locked_target(), None);
    }

    // An empty set clears the active anchor and the lock.
    #[test]
    fn empty_track_clears() {
        let mut spy = spy_with(&["a"]);
        let ev = spy.track(Vec::new());
        assert_eq!(
            ev,
            Some(SpyEvent::Cleared {
                previous: AnchorId::from("a")
            })
        );
        assert_eq!(spy.active(), None);
        assert_eq!(spy.track(Vec::new()), None);
    }

    #[test]
    fn duplicates_keep_first_position() {
        let spy = spy_with(&["a", "b", "a"]);
        assert_eq!(spy.tracked(), &ids(&["a", "b"])[..]);
    }

    // The URL fragment wins on load when it names a tracked anchor.
    #[test]
    fn initialize_prefers_hash() {
        let mut spy = ScrollSpy::new(ObservationWindow::default());
        let ev = spy.initialize(ids(&["a", "b"]), Some("#b"));
        assert_eq!(
            ev,
            Some(SpyEvent::Activated {
                previous: None,
                current: AnchorId::from("b"),
            })
        );

        let mut spy = ScrollSpy::new(ObservationWindow::default());
        let _ = spy.initialize(ids(&["a", "b"]), Some("missing"));
        assert_eq!(spy.active(), Some(&AnchorId::from("a")));
    }

    #[test]
    fn observe_tracks_scrolling() {
        let mut spy = spy_with(&["a", "b", "c"]);
        let r = report(&spy, &[("a", -500.0, 200.0), ("b", 200.0, 700.0), ("c", 700.0, 1400.0)]);
        assert_eq!(
            spy.observe(&r),
            Observation::Changed(SpyEvent::Activated {
                previous: Some(AnchorId::from("a")),
                current: AnchorId::from("b"),
            })
        );
        // Same layout again: nothing to report.
        assert_eq!(spy.observe(&r), Observation::Unchanged);
    }

    // Between sections the previous anchor is kept unless another one is strictly closer.
    #[test]
    fn gap_keeps_previous_unless_closer() {
        let mut spy = spy_with(&["a", "b"]);
        let r = report(&spy, &[("a", 250.0, 280.0), ("b", 900.0, 1000.0)]);
        // `a` is 50 from the bias line, `b` is 600 away: keep `a`.
        assert_eq!(spy.observe(&r), Observation::Unchanged);

        let r = report(&spy, &[("a", -800.0, -700.0), ("b", 850.0, 1000.0)]);
        // `a` is 1100 away now, `b` 550: `b` takes over.
        assert!(matches!(spy.observe(&r), Observation::Changed(_)));
        assert_eq!(spy.active(), Some(&AnchorId::from("b")));
    }

    // A previous anchor missing from the report never blocks the fallback.
    #[test]
    fn gap_with_unrendered_previous_uses_nearest() {
        let mut spy = spy_with(&["a", "b"]);
        let r = report(&spy, &[("b", 900.0, 1000.0)]);
        assert!(matches!(spy.observe(&r), Observation::Changed(_)));
        assert_eq!(spy.active(), Some(&AnchorId::from("b")));
    }

    #[test]
    fn unknown_ids_in_report_are_ignored() {
        let mut spy = spy_with(&["a", "b"]);
        let r = report(&spy, &[("zzz", 100.0, 900.0)]);
        assert_eq!(spy.observe(&r), Observation::Unchanged);
        assert_eq!(spy.active(), Some(&AnchorId::from("a")));
    }

    // Explicit navigation is immediate; intermediate sections are suppressed until arrival.
    #[test]
    fn navigation_lock_suppresses_intermediate_sections() {
        let mut spy = spy_with(&["a", "b", "c"]);
        assert!(matches!(spy.navigate("c"), Navigation::Activated(_)));
        assert_eq!(spy.active(), Some(&AnchorId::from("c")));

        // Mid-animation: `b` would win, but the lock holds.
        let mid = report(&spy, &[("a", -900.0, -200.0), ("b", -200.0, 600.0), ("c", 600.0, 1600.0)]);
        assert_eq!(spy.observe(&mid), Observation::Suppressed);
        assert_eq!(spy.active(), Some(&AnchorId::from("c")));

        let done = report(&spy, &[("b", -900.0, 0.0), ("c", 0.0, 1600.0)]);
        assert_eq!(spy.observe(&done), Observation::Arrived);
        assert_eq!(spy.locked_target(), None);
        assert_eq!(
            spy.observe(&mid),
            Observation::Changed(SpyEvent::Activated {
                previous: Some(AnchorId::from("c")),
                current: AnchorId::from("b"),
            })
        );
    }

    // A target that can never reach the bias line does not freeze the spy once scrolling stops.
    #[test]
    fn lock_releases_when_scrolling_settles_short_of_target() {
        let mut spy = spy_with(&["a", "b", "c"]);
        let _ = spy.navigate("c");
        // Document end: `c` stays below the bias line at 300.
        let end = report(&spy, &[("a", -900.0, -100.0), ("b", -100.0, 800.0), ("c", 800.0, 1000.0)]);
        assert_eq!(spy.observe(&end), Observation::Suppressed);
        assert_eq!(
            spy.observe(&end),
            Observation::Changed(SpyEvent::Activated {
                previous: Some(AnchorId::from("c")),
                current: AnchorId::from("b"),
            })
        );
        assert_eq!(spy.locked_target(), None);
    }

    // Scrolling away from the target hands control back to passive tracking.
    #[test]
    fn lock_releases_when_scrolling_away_from_target() {
        let mut spy = spy_with(&["a", "b", "c"]);
        let _ = spy.navigate("c");
        let near = VisibilityReport {
            viewport: Rect::new(0.0, 500.0, 800.0, 1500.0),
            ..report(&spy, &[("a", 0.0, 900.0), ("b", 900.0, 1300.0), ("c", 1300.0, 1500.0)])
        };
        assert_eq!(spy.observe(&near), Observation::Suppressed);

        // Back at the top: `c` is still below the line and the viewport moved up.
        let top = report(&spy, &[("a", 0.0, 900.0), ("b", 900.0, 1300.0), ("c", 1300.0, 1500.0)]);
        assert!(matches!(spy.observe(&top), Observation::Changed(_)));
        assert_eq!(spy.active(), Some(&AnchorId::from("a")));
    }

    // While the smooth scroll still heads toward the target, the lock holds.
    #[test]
    fn lock_holds_while_approaching_target() {
        let mut spy = spy_with(&["a", "b", "c"]);
        let _ = spy.navigate("c");
        for y0 in [0.0, 300.0, 600.0] {
            let r = VisibilityReport {
                viewport: Rect::new(0.0, y0, 800.0, y0 + 1000.0),
                ..report(&spy, &[("a", 0.0, 900.0), ("b", 900.0, 1600.0), ("c", 1600.0, 2600.0)])
            };
            assert_eq!(spy.observe(&r), Observation::Suppressed, "released at offset {y0}");
        }
        assert_eq!(spy.active(), Some(&AnchorId::from("c")));
    }

    // A report captured before the jump cannot override it.
    #[test]
    fn stale_reports_are_dropped() {
        let mut spy = spy_with(&["a", "b", "c"]);
        let before = report(&spy, &[("a", 0.0, 900.0)]);
        let _ = spy.navigate("c");
        assert_eq!(spy.observe(&before), Observation::Stale);
        assert_eq!(spy.active(), Some(&AnchorId::from("c")));
    }

    #[test]
    fn user_scroll_releases_lock() {
        let mut spy = spy_with(&["a", "b"]);
        let _ = spy.navigate("b");
        assert!(spy.user_scrolled());
        assert!(!spy.user_scrolled());
        let r = report(&spy, &[("a", 0.0, 900.0), ("b", 900.0, 1800.0)]);
        assert!(matches!(spy.observe(&r), Observation::Changed(_)));
        assert_eq!(spy.active(), Some(&AnchorId::from("a")));
    }

    #[test]
    fn navigate_is_idempotent_and_ignores_untracked() {
        let mut spy = spy_with(&["a", "b"]);
        assert_eq!(spy.navigate("nope"), Navigation::Ignored);
        assert!(matches!(spy.navigate("b"), Navigation::Activated(_)));
        assert_eq!(spy.navigate("b"), Navigation::AlreadyActive);
        assert_eq!(spy.active(), Some(&AnchorId::from("b")));
    }

    // Property: whatever the layout, at most one anchor is active and never none while tracking.
    #[test]
    fn exactly_one_active_across_scroll_positions() {
        let mut spy = spy_with(&["a", "b", "c", "d"]);
        for step in 0..60 {
            let offset = f64::from(step) * 50.0;
            let r = report(
                &spy,
                &[
                    ("a", 0.0 - offset, 700.0 - offset),
                    ("b", 700.0 - offset, 1300.0 - offset),
                    ("c", 1300.0 - offset, 2100.0 - offset),
                    ("d", 2100.0 - offset, 2400.0 - offset),
                ],
            );
            let _ = spy.observe(&r);
            assert!(spy.active().is_some(), "active anchor lost at step {step}");
        }
        assert_eq!(spy.active(), Some(&AnchorId::from("d")));
    }
}
