// Copyright 2025 the Docshell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Docshell Spy: a deterministic, `no_std` scroll-spy for documentation pages.
//!
//! ## Overview
//!
//! This crate decides which section of a page is "current" while the reader scrolls, clicks,
//! or uses the keyboard. It does not observe the DOM.
//! Instead, feed it [`VisibilityReport`](crate::types::VisibilityReport) snapshots (for example
//! built from an intersection observer, or from manual scroll math) and it reports the single
//! active anchor.
//!
//! ## Inputs
//!
//! - The ordered list of tracked [`AnchorId`](crate::types::AnchorId)s, in document order.
//! - Layout snapshots: the viewport rectangle plus the bounds of each anchor's element.
//! - Explicit navigation requests.
//!
//! ## Selection
//!
//! The [`ObservationWindow`](crate::window::ObservationWindow) biases the viewport toward its
//! upper part: the window's top edge is the bias line a section has to cross to become current.
//! See [`window`](crate::window) for the full tie-break rules.
//!
//! ## Ordering
//!
//! Explicit navigation always wins over snapshots captured before it.
//! Each snapshot carries the [`Generation`](crate::types::Generation) current when it was taken;
//! see [`spy`](crate::spy) for the navigation lock.
//!
//! ## Minimal example
//!
//! ```
//! use docshell_spy::spy::ScrollSpy;
//! use docshell_spy::types::{AnchorBounds, AnchorId, Observation, VisibilityReport};
//! use docshell_spy::window::ObservationWindow;
//! use kurbo::Rect;
//!
//! let mut spy = ScrollSpy::new(ObservationWindow::default());
//! let _ = spy.track(["intro", "auth"].map(AnchorId::from));
//! assert_eq!(spy.active().map(AnchorId::as_str), Some("intro"));
//!
//! let report = VisibilityReport {
//!     generation: spy.generation(),
//!     viewport: Rect::new(0.0, 0.0, 800.0, 1000.0),
//!     anchors: vec![
//!         AnchorBounds { id: "intro".into(), bounds: Rect::new(0.0, -600.0, 800.0, 100.0) },
//!         AnchorBounds { id: "auth".into(), bounds: Rect::new(0.0, 100.0, 800.0, 900.0) },
//!     ],
//! };
//! assert!(matches!(spy.observe(&report), Observation::Changed(_)));
//! assert_eq!(spy.active().map(AnchorId::as_str), Some("auth"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod spy;
pub mod types;
pub mod window;
