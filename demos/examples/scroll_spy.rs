// Copyright 2025 the Docshell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-spy walkthrough.
//!
//! Mounts a page on the in-memory host, scrolls through it, then jumps to a section
//! while a stale layout snapshot is still in flight.
//!
//! Run:
//! - `cargo run -p docshell_demos --example scroll_spy`
//! - `DOCSHELL_LOG=debug cargo run -p docshell_demos --example scroll_spy`

use docshell_layout::adapters::memory::MemoryHost;
use docshell_layout::config::ShellConfig;
use docshell_layout::layout::{DocsLayout, ShellEvent};
use docshell_layout::nav::{HttpMethod, NavigationLink, NavigationSection};
use docshell_layout::page::PageConfig;
use docshell_layout::ports::{History, Scroll};
use docshell_layout::routes::Route;

fn print_sidebar(shell: &DocsLayout<MemoryHost>) {
    for group in shell.sidebar() {
        println!("  {}", group.title);
        for entry in &group.entries {
            let marker = if entry.active { '>' } else { ' ' };
            let method = entry.method.map_or("", HttpMethod::as_str);
            println!("   {marker} {:<7}{}  ({})", method, entry.label, entry.href);
        }
    }
}

fn scroll(shell: &mut DocsLayout<MemoryHost>, offset: f64) {
    shell.host_mut().set_scroll_offset(offset);
    shell.handle(ShellEvent::UserScrollInput);
    shell.handle(ShellEvent::Scrolled);
    let report = shell.host().report(shell.generation());
    shell.handle(ShellEvent::Layout(report));
    println!(
        "scrolled to {:>6.0}px -> active {:?}, chrome {:?}",
        shell.host().scroll_offset(),
        shell.active_section().map(|a| a.as_str()),
        shell.chrome()
    );
}

fn main() -> docshell_layout::Result<()> {
    docshell_layout::logging::init()?;

    let mut page = PageConfig::new(Route::Tts, "Text to Speech");
    page.sections = vec![
        NavigationSection {
            title: "Getting started".into(),
            links: vec![
                NavigationLink::anchor("Overview", "tts-overview"),
                NavigationLink::anchor("Authentication", "tts-auth"),
            ],
        },
        NavigationSection {
            title: "Endpoints".into(),
            links: vec![
                NavigationLink::anchor("Synthesize", "tts-synthesize").with_method(HttpMethod::Post),
                NavigationLink::anchor("Stream", "tts-stream").with_method(HttpMethod::Ws),
                NavigationLink::anchor("List voices", "tts-voices").with_method(HttpMethod::Get),
            ],
        },
    ];

    let host = MemoryHost::default().with_sections(
        64.0,
        &[
            ("tts-overview", 900.0),
            ("tts-auth", 600.0),
            ("tts-synthesize", 1400.0),
            ("tts-stream", 1100.0),
            ("tts-voices", 700.0),
        ],
    );
    let mut shell = DocsLayout::mount(host, ShellConfig::default(), page);
    println!("mounted: {shell:?}");
    print_sidebar(&shell);

    for offset in [0.0, 400.0, 900.0, 1800.0, 3000.0, 4200.0] {
        scroll(&mut shell, offset);
    }

    // A snapshot taken before the click arrives after it and is ignored.
    shell.host_mut().set_scroll_offset(500.0);
    let in_flight = shell.host().report(shell.generation());
    shell.handle(ShellEvent::SelectLink(NavigationLink::anchor(
        "Synthesize",
        "tts-synthesize",
    )));
    shell.handle(ShellEvent::Layout(in_flight));
    println!(
        "after click: active {:?}, url #{}",
        shell.active_section().map(|a| a.as_str()),
        shell.host().hash().unwrap_or_default()
    );
    print_sidebar(&shell);

    let host = shell.unmount();
    println!("unmounted: {} listeners left", host.listener_count());
    Ok(())
}
