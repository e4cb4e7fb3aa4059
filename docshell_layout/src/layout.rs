// Copyright 2025 the Docshell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The documentation shell: owns all transient UI state of a mounted page.
//!
//! ## Lifecycle
//!
//! 1) [`DocsLayout::mount`] installs listeners, starts observing the page's anchors and picks
//!    the initial active section (URL fragment if tracked, else the first anchor).
//! 2) The host forwards [`ShellEvent`]s to [`DocsLayout::handle`] and renders from the
//!    accessors ([`DocsLayout::sidebar`], [`DocsLayout::presentation`], [`DocsLayout::chrome`], ...).
//! 3) Route changes swap content with [`DocsLayout::load_page`].
//! 4) [`DocsLayout::unmount`] removes listeners, stops observation, cancels timers, and hands
//!    the host back.
//!
//! ## Navigation
//!
//! Passive scrolling only moves the highlight. Explicit navigation
//! ([`DocsLayout::navigate_to`], link selection) also scrolls and rewrites the URL fragment
//! without a history entry. See [`docshell_spy::spy`] for how the two are ordered.

use docshell_select::panel::IntegrationPanel;
use docshell_select::types::PanelView;
use docshell_spy::spy::ScrollSpy;
use docshell_spy::types::{
    AnchorId, Generation, Navigation, Observation, SpyEvent, VisibilityReport,
};
use kurbo::Point;

use crate::chrome::Chrome;
use crate::config::ShellConfig;
use crate::copy::{CopyOutcome, CopyableCode};
use crate::menu::{Cause, MenuState, Presentation, ResponsiveMenu};
use crate::nav::{LinkTarget, NavigationLink, SidebarGroup};
use crate::page::PageConfig;
use crate::ports::{Host, ListenerKind, Region, TimerId};

/// Keys the shell reacts to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Escape closes the mobile menu.
    Escape,
    /// Anything else.
    Other,
}

/// What a copy button copies.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CopyTarget {
    /// A page code block, by id.
    Block(String),
    /// The sample currently shown by the panel at this index.
    Panel(usize),
}

/// Input to the shell.
#[derive(Clone, Debug, PartialEq)]
pub enum ShellEvent {
    /// The viewport size changed.
    Resized,
    /// The document scroll offset changed.
    Scrolled,
    /// The reader started scrolling by wheel, touch or keyboard.
    UserScrollInput,
    /// The observation port delivered a snapshot.
    Layout(VisibilityReport),
    /// A key was pressed.
    Key(Key),
    /// A pointer went down at this viewport position.
    PointerDown(Point),
    /// The hamburger button was pressed.
    ToggleMenu,
    /// A sidebar link was clicked or activated by keyboard.
    SelectLink(NavigationLink),
    /// A copy button was pressed.
    Copy(CopyTarget),
    /// A timer scheduled through the host fired.
    TimerFired(TimerId),
    /// The scroll-to-top button was pressed.
    ScrollToTop,
    /// An integration panel's API selector changed.
    SelectApi {
        /// Panel index.
        panel: usize,
        /// API id.
        id: String,
    },
    /// An integration panel's language selector changed.
    SelectLanguage {
        /// Panel index.
        panel: usize,
        /// Language id.
        id: String,
    },
}

#[derive(Clone, Debug)]
struct PanelSlot {
    panel: IntegrationPanel,
    copy: CopyableCode,
}

/// A mounted documentation page.
pub struct DocsLayout<H: Host> {
    host: H,
    config: ShellConfig,
    page: PageConfig,
    spy: ScrollSpy,
    menu: ResponsiveMenu,
    chrome: Chrome,
    blocks: Vec<CopyableCode>,
    panels: Vec<PanelSlot>,
}

impl<H: Host> core::fmt::Debug for DocsLayout<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DocsLayout")
            .field("route", &self.page.route)
            .field("active", &self.spy.active())
            .field("menu", &self.menu.state())
            .field("chrome", &self.chrome)
            .finish_non_exhaustive()
    }
}

impl<H: Host> DocsLayout<H> {
    /// Mount `page` on `host`.
    pub fn mount(mut host: H, config: ShellConfig, page: PageConfig) -> Self {
        for kind in ListenerKind::ALL {
            host.listen(kind);
        }
        let menu = ResponsiveMenu::new(config.mobile_breakpoint, host.viewport().width);
        let chrome = Chrome::from_offset(host.scroll_offset(), &config.chrome_thresholds());
        let spy = ScrollSpy::new(config.observation_window());
        let mut layout = Self {
            host,
            config,
            page: PageConfig::new(page.route, ""),
            spy,
            menu,
            chrome,
            blocks: Vec::new(),
            panels: Vec::new(),
        };
        tracing::debug!(route = %page.route, "mounting page");
        layout.install(page);
        layout
    }

    /// Swap in the content of another page (after a route change or a content update).
    ///
    /// The active section survives if the new page tracks it; otherwise the URL fragment or
    /// the first anchor of the new page becomes active. On the same route, integration panels
    /// re-resolve their selection against the new data instead of starting over.
    /// The mobile menu closes.
    pub fn load_page(&mut self, page: PageConfig) {
        tracing::debug!(from = %self.page.route, to = %page.route, "loading page");
        let _ = self.menu.dismiss(Cause::LinkSelected);
        self.install(page);
    }

    /// Tear down: remove listeners, stop observation, cancel timers, and return the host.
    pub fn unmount(mut self) -> H {
        self.cancel_copy_timers();
        self.host.disconnect();
        for kind in ListenerKind::ALL {
            self.host.unlisten(kind);
        }
        tracing::debug!(route = %self.page.route, "unmounted page");
        self.host
    }

    /// The host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host, mutably (for hosts that need to update their own state).
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The configuration.
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// The mounted page.
    pub fn page(&self) -> &PageConfig {
        &self.page
    }

    /// The active section.
    pub fn active_section(&self) -> Option<&AnchorId> {
        self.spy.active()
    }

    /// Generation the host must stamp on visibility reports captured now.
    pub fn generation(&self) -> Generation {
        self.spy.generation()
    }

    /// Menu state.
    pub fn menu_state(&self) -> MenuState {
        self.menu.state()
    }

    /// How the sidebar is presented.
    pub fn presentation(&self) -> Presentation {
        self.menu.presentation()
    }

    /// Header and scroll-to-top state.
    pub fn chrome(&self) -> Chrome {
        self.chrome
    }

    /// Sidebar groups with the active entry marked.
    pub fn sidebar(&self) -> Vec<SidebarGroup<'_>> {
        let active = self.spy.active();
        self.page
            .sections
            .iter()
            .map(|s| SidebarGroup::build(s, active))
            .collect()
    }

    /// Label of a code block's copy button.
    pub fn copy_label(&self, block: &str) -> Option<&'static str> {
        let idx = self.page.code_blocks.iter().position(|b| b.id == block)?;
        self.blocks.get(idx).map(CopyableCode::label)
    }

    /// Label of a panel's copy button.
    pub fn panel_copy_label(&self, panel: usize) -> Option<&'static str> {
        self.panels.get(panel).map(|s| s.copy.label())
    }

    /// A panel's selector state.
    pub fn panel(&self, panel: usize) -> Option<&IntegrationPanel> {
        self.panels.get(panel).map(|s| &s.panel)
    }

    /// What a panel renders; `None` for unknown indices and empty panels.
    pub fn panel_view(&self, panel: usize) -> Option<PanelView<'_>> {
        self.panel(panel)?.view()
    }

    /// Feed one event.
    pub fn handle(&mut self, event: ShellEvent) {
        match event {
            ShellEvent::Resized => {
                let width = self.host.viewport().width;
                let _ = self.menu.resize(width);
            }
            ShellEvent::Scrolled => {
                self.chrome = Chrome::from_offset(
                    self.host.scroll_offset(),
                    &self.config.chrome_thresholds(),
                );
            }
            ShellEvent::UserScrollInput => {
                if self.spy.user_scrolled() {
                    tracing::trace!("navigation lock released by user scroll");
                }
            }
            ShellEvent::Layout(report) => self.observe(&report),
            ShellEvent::Key(Key::Escape) => {
                let _ = self.menu.dismiss(Cause::Escape);
            }
            ShellEvent::Key(Key::Other) => {}
            ShellEvent::PointerDown(point) => {
                let inside: Vec<_> = [Region::MenuPanel, Region::MenuToggle]
                    .into_iter()
                    .filter_map(|r| self.host.region(r))
                    .collect();
                let _ = self.menu.pointer_down(point, &inside);
            }
            ShellEvent::ToggleMenu => {
                let _ = self.menu.toggle();
            }
            ShellEvent::SelectLink(link) => self.select_link(&link),
            ShellEvent::Copy(target) => {
                let _ = self.copy(&target);
            }
            ShellEvent::TimerFired(id) => self.timer_fired(id),
            ShellEvent::ScrollToTop => self.host.scroll_to_top(),
            ShellEvent::SelectApi { panel, id } => {
                if let Some(slot) = self.panels.get_mut(panel) {
                    let _ = slot.panel.select_api(&id);
                }
            }
            ShellEvent::SelectLanguage { panel, id } => {
                if let Some(slot) = self.panels.get_mut(panel) {
                    let _ = slot.panel.select_language(&id);
                }
            }
        }
    }

    /// Jump to an anchor: scroll it into view, activate it, and rewrite the fragment.
    ///
    /// `None` and anchors without an element are no-ops. Elements that are not tracked
    /// sections are scrolled to but leave the active section and the fragment alone.
    /// Returns `true` if anything scrolled.
    pub fn navigate_to(&mut self, id: Option<&str>) -> bool {
        let Some(id) = id else {
            return false;
        };
        let anchor = AnchorId::from(id);
        if !self.host.scroll_into_view(&anchor) {
            tracing::debug!(%anchor, "navigation target has no element");
            return false;
        }
        match self.spy.navigate(id) {
            Navigation::Activated(event) => self.spy_event(&event),
            Navigation::AlreadyActive => {}
            // The fragment only ever names the active section.
            Navigation::Ignored => {
                tracing::debug!(%anchor, "navigated to untracked anchor");
                return true;
            }
        }
        if self.host.hash().as_deref() != Some(id) {
            self.host.replace_hash(&anchor);
        }
        true
    }

    /// Follow a sidebar link and close the mobile menu.
    pub fn select_link(&mut self, link: &NavigationLink) {
        match &link.target {
            LinkTarget::Anchor(id) => {
                let _ = self.navigate_to(Some(id.as_str()));
            }
            LinkTarget::Route { route, hash } if *route == self.page.route => {
                let _ = self.navigate_to(hash.as_ref().map(AnchorId::as_str));
            }
            LinkTarget::Route { .. } => self.host.push_route(&link.href()),
        }
        let _ = self.menu.dismiss(Cause::LinkSelected);
    }

    /// Press a copy button. Returns `None` when the target does not exist or has nothing to copy.
    pub fn copy(&mut self, target: &CopyTarget) -> Option<CopyOutcome> {
        let ack = self.config.copy_ack();
        match target {
            CopyTarget::Block(id) => {
                let idx = self.page.code_blocks.iter().position(|b| b.id == *id)?;
                let text = &self.page.code_blocks[idx].code;
                Some(self.blocks[idx].press(text, &mut self.host, ack))
            }
            CopyTarget::Panel(idx) => {
                let PanelSlot { panel, copy } = self.panels.get_mut(*idx)?;
                let text = &panel.active_language()?.code;
                Some(copy.press(text, &mut self.host, ack))
            }
        }
    }

    fn observe(&mut self, report: &VisibilityReport) {
        match self.spy.observe(report) {
            Observation::Changed(event) => self.spy_event(&event),
            Observation::Stale => {
                tracing::trace!(generation = report.generation.get(), "dropped stale report");
            }
            Observation::Arrived => tracing::trace!("navigation target reached"),
            Observation::Suppressed | Observation::Unchanged => {}
        }
    }

    fn spy_event(&mut self, event: &SpyEvent) {
        tracing::debug!(?event, "active section changed");
        // Only the desktop rail follows the active section.
        if let Some(current) = event.current()
            && self.menu.state() == MenuState::Desktop
        {
            self.host.reveal_sidebar_entry(current);
        }
    }

    fn timer_fired(&mut self, id: TimerId) {
        let owned = self
            .blocks
            .iter_mut()
            .chain(self.panels.iter_mut().map(|s| &mut s.copy))
            .any(|c| c.timer_fired(id));
        if !owned {
            tracing::trace!(timer = id.raw(), "ignored stale timer");
        }
    }

    fn install(&mut self, page: PageConfig) {
        self.cancel_copy_timers();

        let anchors = page.anchors();
        let hash = self.host.hash();
        let event = self.spy.initialize(anchors.iter().cloned(), hash.as_deref());
        if anchors.is_empty() {
            self.host.disconnect();
        } else {
            self.host.observe(&anchors);
        }

        self.blocks = page.code_blocks.iter().map(|_| CopyableCode::new()).collect();
        // Reloading the same route keeps each panel's selection where it is still valid.
        let mut previous = if page.route == self.page.route {
            std::mem::take(&mut self.panels)
        } else {
            Vec::new()
        }
        .into_iter();
        self.panels = page
            .panels
            .iter()
            .cloned()
            .map(|data| match previous.next() {
                Some(mut slot) => {
                    let _ = slot.panel.replace_data(data);
                    slot
                }
                None => PanelSlot {
                    panel: IntegrationPanel::new(data),
                    copy: CopyableCode::new(),
                },
            })
            .collect();
        self.page = page;

        if let Some(event) = event {
            self.spy_event(&event);
        }
    }

    fn cancel_copy_timers(&mut self) {
        for copy in self
            .blocks
            .iter_mut()
            .chain(self.panels.iter_mut().map(|s| &mut s.copy))
        {
            copy.cancel(&mut self.host);
        }
    }
}
