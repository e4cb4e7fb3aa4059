// Copyright 2025 the Docshell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Responsive menu.
//!
//! Opens the mobile overlay and closes it every way a reader can: Escape, a click outside,
//! following a link, and rotating the device past the breakpoint.
//!
//! Run:
//! - `cargo run -p docshell_demos --example mobile_menu`

use docshell_layout::adapters::memory::MemoryHost;
use docshell_layout::config::ShellConfig;
use docshell_layout::layout::{DocsLayout, Key, ShellEvent};
use docshell_layout::nav::{NavigationLink, NavigationSection};
use docshell_layout::page::PageConfig;
use docshell_layout::ports::Region;
use docshell_layout::routes::Route;
use kurbo::{Point, Rect, Size};

fn report(shell: &DocsLayout<MemoryHost>, what: &str) {
    println!(
        "{what:<28} menu {:?}, sidebar {:?}, active {:?}",
        shell.menu_state(),
        shell.presentation(),
        shell.active_section().map(|a| a.as_str())
    );
}

fn main() -> docshell_layout::Result<()> {
    docshell_layout::logging::init()?;

    let mut page = PageConfig::new(Route::VoiceAgents, "Voice Agents");
    page.sections = vec![NavigationSection {
        title: "Voice Agents".into(),
        links: vec![
            NavigationLink::anchor("Overview", "agents-overview"),
            NavigationLink::anchor("Create an agent", "agents-create"),
            NavigationLink::anchor("Tools", "agents-tools"),
            NavigationLink::route("Speech to text", Route::Stt, Some("stt-overview".into())),
        ],
    }];

    let phone = Size::new(390.0, 844.0);
    let mut host = MemoryHost::new(phone).with_sections(
        56.0,
        &[
            ("agents-overview", 700.0),
            ("agents-create", 900.0),
            ("agents-tools", 800.0),
        ],
    );
    host.set_region(Region::MenuToggle, Some(Rect::new(340.0, 8.0, 382.0, 48.0)));
    host.set_region(Region::MenuPanel, Some(Rect::new(0.0, 56.0, 300.0, 844.0)));

    let mut shell = DocsLayout::mount(host, ShellConfig::default(), page);
    report(&shell, "mounted");

    shell.handle(ShellEvent::ToggleMenu);
    report(&shell, "hamburger");
    shell.handle(ShellEvent::Key(Key::Escape));
    report(&shell, "escape");

    shell.handle(ShellEvent::ToggleMenu);
    shell.handle(ShellEvent::PointerDown(Point::new(150.0, 400.0)));
    report(&shell, "click inside panel");
    shell.handle(ShellEvent::PointerDown(Point::new(360.0, 600.0)));
    report(&shell, "click on content");

    shell.handle(ShellEvent::ToggleMenu);
    shell.handle(ShellEvent::SelectLink(NavigationLink::anchor(
        "Tools",
        "agents-tools",
    )));
    report(&shell, "follow link");

    shell.handle(ShellEvent::ToggleMenu);
    shell.host_mut().set_viewport(Size::new(1194.0, 834.0));
    shell.handle(ShellEvent::Resized);
    report(&shell, "rotate to landscape");
    shell.host_mut().set_viewport(phone);
    shell.handle(ShellEvent::Resized);
    report(&shell, "rotate back");

    shell.handle(ShellEvent::SelectLink(NavigationLink::route(
        "Speech to text",
        Route::Stt,
        Some("stt-overview".into()),
    )));
    println!("pushed routes: {:?}", shell.host().pushed_routes());
    Ok(())
}
