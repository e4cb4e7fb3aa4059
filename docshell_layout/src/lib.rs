// Copyright 2025 the Docshell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Docshell Layout: the headless shell of a documentation site.
//!
//! ## Overview
//!
//! [`DocsLayout`](crate::layout::DocsLayout) owns every bit of transient UI state of a page:
//! the active section ([`docshell_spy`]), the responsive menu, header chrome, copy buttons and
//! integration panels ([`docshell_select`]). It renders nothing.
//! The browser is reached only through the environment ports in [`ports`]; a front end implements
//! them, forwards events as [`ShellEvent`](crate::layout::ShellEvent)s and renders from the
//! shell's accessors.
//!
//! ## Modules
//!
//! - [`layout`]: the shell and its events.
//! - [`menu`], [`chrome`], [`copy`]: the small state machines it composes.
//! - [`nav`], [`page`], [`routes`]: static site content, loadable from TOML.
//! - [`config`]: thresholds and timings.
//! - [`adapters`]: host implementations ([`MemoryHost`](crate::adapters::memory::MemoryHost)).
//! - [`logging`], [`error`]: ambient plumbing.
//!
//! ## Example
//!
//! ```
//! use docshell_layout::adapters::memory::MemoryHost;
//! use docshell_layout::config::ShellConfig;
//! use docshell_layout::layout::{DocsLayout, ShellEvent};
//! use docshell_layout::nav::{NavigationLink, NavigationSection};
//! use docshell_layout::page::PageConfig;
//! use docshell_layout::routes::Route;
//!
//! let mut page = PageConfig::new(Route::Tts, "Text to Speech");
//! page.sections.push(NavigationSection {
//!     title: "Endpoints".into(),
//!     links: vec![
//!         NavigationLink::anchor("Overview", "overview"),
//!         NavigationLink::anchor("Stream", "stream"),
//!     ],
//! });
//!
//! let host = MemoryHost::default().with_sections(0.0, &[("overview", 900.0), ("stream", 900.0)]);
//! let mut shell = DocsLayout::mount(host, ShellConfig::default(), page);
//! assert_eq!(shell.active_section().map(|a| a.as_str()), Some("overview"));
//!
//! shell.handle(ShellEvent::SelectLink(NavigationLink::anchor("Stream", "stream")));
//! assert_eq!(shell.active_section().map(|a| a.as_str()), Some("stream"));
//!
//! let host = shell.unmount();
//! assert_eq!(host.listener_count(), 0);
//! ```

pub mod adapters;
pub mod chrome;
pub mod config;
pub mod copy;
pub mod error;
pub mod layout;
pub mod logging;
pub mod menu;
pub mod nav;
pub mod page;
pub mod ports;
pub mod routes;

pub use error::{Error, Result};
