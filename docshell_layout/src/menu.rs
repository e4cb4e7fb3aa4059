// Copyright 2025 the Docshell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Responsive sidebar / mobile menu state machine.
//!
//! ```text
//!              width >= breakpoint
//!   Desktop <──────────────────────── MobileClosed, MobileOpen
//!      │                                  ▲      │
//!      │ width < breakpoint      dismiss  │      │ toggle
//!      └──────────────> MobileClosed ─────┴──────┘
//! ```
//!
//! Crossing the breakpoint in either direction always lands in a closed state, so the
//! desktop rail and the mobile overlay are never shown together.

use kurbo::{Point, Rect};

/// Menu state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MenuState {
    /// Wide viewport: the sidebar rail is always visible and there is no hamburger.
    Desktop,
    /// Narrow viewport, overlay hidden.
    MobileClosed,
    /// Narrow viewport, overlay shown.
    MobileOpen,
}

/// How the navigation is presented in a given state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Presentation {
    /// Persistent sidebar rail.
    Rail,
    /// Hamburger only.
    Collapsed,
    /// Overlay menu on top of the content.
    Overlay,
}

/// What caused a transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cause {
    /// The viewport crossed the breakpoint.
    Resize,
    /// The hamburger was toggled.
    Toggle,
    /// A navigation link was selected.
    LinkSelected,
    /// A pointer went down outside the overlay and the toggle.
    OutsidePointer,
    /// Escape was pressed.
    Escape,
}

/// A state change.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct MenuTransition {
    /// State before.
    pub from: MenuState,
    /// State after.
    pub to: MenuState,
    /// Trigger.
    pub cause: Cause,
}

/// Responsive menu with a single width breakpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct ResponsiveMenu {
    state: MenuState,
    breakpoint: f64,
}

impl ResponsiveMenu {
    /// Create the menu for a viewport of `width` pixels.
    pub fn new(breakpoint: f64, width: f64) -> Self {
        Self {
            state: Self::resting(breakpoint, width),
            breakpoint,
        }
    }

    fn resting(breakpoint: f64, width: f64) -> MenuState {
        if width < breakpoint {
            MenuState::MobileClosed
        } else {
            MenuState::Desktop
        }
    }

    /// Current state.
    pub fn state(&self) -> MenuState {
        self.state
    }

    /// The breakpoint in pixels.
    pub fn breakpoint(&self) -> f64 {
        self.breakpoint
    }

    /// Whether the viewport is below the breakpoint.
    pub fn is_mobile(&self) -> bool {
        self.state != MenuState::Desktop
    }

    /// Whether the overlay is shown.
    pub fn is_open(&self) -> bool {
        self.state == MenuState::MobileOpen
    }

    /// How navigation is presented.
    pub fn presentation(&self) -> Presentation {
        match self.state {
            MenuState::Desktop => Presentation::Rail,
            MenuState::MobileClosed => Presentation::Collapsed,
            MenuState::MobileOpen => Presentation::Overlay,
        }
    }

    /// The viewport is now `width` pixels wide.
    pub fn resize(&mut self, width: f64) -> Option<MenuTransition> {
        let mobile = width < self.breakpoint;
        if mobile == self.is_mobile() {
            return None;
        }
        self.go(Self::resting(self.breakpoint, width), Cause::Resize)
    }

    /// Flip the overlay. Does nothing on desktop.
    pub fn toggle(&mut self) -> Option<MenuTransition> {
        match self.state {
            MenuState::Desktop => None,
            MenuState::MobileClosed => self.go(MenuState::MobileOpen, Cause::Toggle),
            MenuState::MobileOpen => self.go(MenuState::MobileClosed, Cause::Toggle),
        }
    }

    /// Close the overlay if it is open.
    pub fn dismiss(&mut self, cause: Cause) -> Option<MenuTransition> {
        if self.is_open() {
            self.go(MenuState::MobileClosed, cause)
        } else {
            None
        }
    }

    /// A pointer went down at `point`; close the overlay when it lands outside every
    /// region in `inside`.
    pub fn pointer_down(&mut self, point: Point, inside: &[Rect]) -> Option<MenuTransition> {
        if !self.is_open() || inside.iter().any(|r| r.contains(point)) {
            return None;
        }
        self.dismiss(Cause::OutsidePointer)
    }

    fn go(&mut self, to: MenuState, cause: Cause) -> Option<MenuTransition> {
        let from = self.state;
        self.state = to;
        tracing::debug!(?from, ?to, ?cause, "menu transition");
        Some(MenuTransition { from, to, cause })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_mobile() -> ResponsiveMenu {
        let mut m = ResponsiveMenu::new(1024.0, 600.0);
        assert!(m.toggle().is_some());
        m
    }

    #[test]
    fn initial_state_follows_width() {
        assert_eq!(ResponsiveMenu::new(1024.0, 1280.0).state(), MenuState::Desktop);
        assert_eq!(ResponsiveMenu::new(1024.0, 1024.0).state(), MenuState::Desktop);
        assert_eq!(ResponsiveMenu::new(1024.0, 1023.0).state(), MenuState::MobileClosed);
    }

    #[test]
    fn toggle_is_a_no_op_on_desktop() {
        let mut m = ResponsiveMenu::new(1024.0, 1280.0);
        assert_eq!(m.toggle(), None);
        assert_eq!(m.presentation(), Presentation::Rail);
    }

    #[test]
    fn toggle_opens_and_closes() {
        let mut m = open_mobile();
        assert_eq!(m.presentation(), Presentation::Overlay);
        let t = m.toggle().expect("closes");
        assert_eq!(t.to, MenuState::MobileClosed);
        assert_eq!(t.cause, Cause::Toggle);
    }

    #[test]
    fn escape_and_link_selection_dismiss() {
        let mut m = open_mobile();
        assert_eq!(m.dismiss(Cause::Escape).map(|t| t.to), Some(MenuState::MobileClosed));
        assert_eq!(m.dismiss(Cause::Escape), None);

        let mut m = open_mobile();
        assert_eq!(
            m.dismiss(Cause::LinkSelected).map(|t| t.cause),
            Some(Cause::LinkSelected)
        );
    }

    #[test]
    fn outside_pointer_closes_inside_does_not() {
        let panel = Rect::new(0.0, 56.0, 300.0, 800.0);
        let toggle = Rect::new(540.0, 8.0, 580.0, 48.0);

        let mut m = open_mobile();
        assert_eq!(m.pointer_down(Point::new(100.0, 200.0), &[panel, toggle]), None);
        assert_eq!(m.pointer_down(Point::new(560.0, 20.0), &[panel, toggle]), None);
        assert!(m.is_open());

        let t = m.pointer_down(Point::new(450.0, 400.0), &[panel, toggle]);
        assert_eq!(t.map(|t| t.cause), Some(Cause::OutsidePointer));
        assert!(!m.is_open());
    }

    // Crossing the breakpoint in either direction lands closed; rail and overlay never coexist.
    #[test]
    fn breakpoint_crossings_force_close() {
        let mut m = open_mobile();
        let t = m.resize(1300.0).expect("crosses up");
        assert_eq!((t.from, t.to), (MenuState::MobileOpen, MenuState::Desktop));
        assert_eq!(m.presentation(), Presentation::Rail);

        let t = m.resize(700.0).expect("crosses down");
        assert_eq!(t.to, MenuState::MobileClosed);
        assert_eq!(m.presentation(), Presentation::Collapsed);

        // Resizing within the same band is not a transition.
        assert_eq!(m.resize(650.0), None);
    }
}
