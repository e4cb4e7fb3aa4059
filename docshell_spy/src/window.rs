// Copyright 2025 the Docshell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observation window and candidate selection.
//!
//! ## Overview
//!
//! The observation window is the viewport shrunk by a top and a bottom inset, each given as a
//! fraction of the viewport height. Its top edge is the *bias line*: a section counts as current
//! once its top edge has scrolled above that line, not merely when it first appears at the bottom.
//!
//! ## Candidate selection
//!
//! - Among anchors whose element intersects the window, the one whose top edge is at or above the
//!   bias line and closest to it wins.
//! - If no intersecting anchor has crossed the line, the intersecting anchor whose top edge is
//!   nearest the line wins.
//! - Without any intersection, the anchor whose top edge is nearest the line (absolute distance)
//!   is offered as a fallback; the [spy](crate::spy::ScrollSpy) keeps its previous section unless
//!   the fallback is strictly closer.
//! - Equal tops resolve to the anchor that comes first in tracked (document) order.

use kurbo::Rect;

use crate::types::{AnchorBounds, AnchorId};

/// Insets that carve the observation window out of the viewport.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ObservationWindow {
    /// Fraction of the viewport height excluded at the top (`0.0..1.0`).
    pub top_inset: f64,
    /// Fraction of the viewport height excluded at the bottom (`0.0..1.0`).
    pub bottom_inset: f64,
}

impl Default for ObservationWindow {
    fn default() -> Self {
        Self {
            top_inset: 0.30,
            bottom_inset: 0.20,
        }
    }
}

impl ObservationWindow {
    /// Create a window from top and bottom insets.
    pub const fn new(top_inset: f64, bottom_inset: f64) -> Self {
        Self {
            top_inset,
            bottom_inset,
        }
    }

    /// The window rectangle inside `viewport`.
    ///
    /// Insets that overlap collapse the window to a zero-height band at the bias line.
    pub fn window(&self, viewport: Rect) -> Rect {
        let height = viewport.height();
        let y0 = viewport.y0 + height * self.top_inset;
        let y1 = (viewport.y1 - height * self.bottom_inset).max(y0);
        Rect::new(viewport.x0, y0, viewport.x1, y1)
    }

    /// Vertical position of the bias line inside `viewport`.
    pub fn bias_line(&self, viewport: Rect) -> f64 {
        viewport.y0 + viewport.height() * self.top_inset
    }
}

/// How a candidate was picked.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Pick {
    /// At least one anchor intersects the window; this one wins outright.
    Intersecting(usize),
    /// Nothing intersects; this is the nearest anchor by absolute top distance.
    Nearest(usize),
}

pub(crate) fn vertical_overlap(bounds: Rect, window: Rect) -> bool {
    bounds.y0 <= window.y1 && bounds.y1 >= window.y0
}

pub(crate) fn distance(a: f64, b: f64) -> f64 {
    (a - b).abs()
}

/// Pick a candidate from `anchors`, which must already be sorted in tracked order.
///
/// Each entry pairs an anchor's tracked index with its bounds. Returns the tracked
/// index of the winner, or `None` when `anchors` is empty.
pub(crate) fn pick(
    anchors: &[(usize, &AnchorBounds)],
    window: Rect,
    bias: f64,
) -> Option<Pick> {
    // Best crossed anchor: greatest top <= bias. Best pending anchor: smallest top > bias.
    let mut crossed: Option<(usize, f64)> = None;
    let mut pending: Option<(usize, f64)> = None;
    let mut nearest: Option<(usize, f64)> = None;

    for &(idx, a) in anchors {
        let top = a.bounds.y0;
        let d = distance(top, bias);
        // Strict comparisons keep the earliest anchor on ties.
        if nearest.is_none_or(|(_, best)| d < best) {
            nearest = Some((idx, d));
        }
        if !vertical_overlap(a.bounds, window) {
            continue;
        }
        if top <= bias {
            if crossed.is_none_or(|(_, best)| top > best) {
                crossed = Some((idx, top));
            }
        } else if pending.is_none_or(|(_, best)| top < best) {
            pending = Some((idx, top));
        }
    }

    if let Some((idx, _)) = crossed.or(pending) {
        return Some(Pick::Intersecting(idx));
    }
    nearest.map(|(idx, _)| Pick::Nearest(idx))
}

/// Distance of `id`'s top edge to the bias line, if `id` is among `anchors`.
pub(crate) fn distance_of(
    anchors: &[(usize, &AnchorBounds)],
    id: &AnchorId,
    bias: f64,
) -> Option<f64> {
    anchors
        .iter()
        .find(|(_, a)| a.id == *id)
        .map(|(_, a)| distance(a.bounds.y0, bias))
}
