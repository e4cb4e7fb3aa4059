// Copyright 2025 the Docshell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Describing a site in TOML.
//!
//! Loads a two-page site, resolves browser paths to pages, follows a cross-page link,
//! and shows what a broken description reports.
//!
//! Run:
//! - `cargo run -p docshell_demos --example site_config`

use docshell_layout::adapters::memory::MemoryHost;
use docshell_layout::layout::{DocsLayout, ShellEvent};
use docshell_layout::page::Site;

const SITE: &str = r#"
title = "Indus Labs Docs"
llm_enabled = false

[shell]
mobile_breakpoint = 960.0
copy_ack_ms = 2000

[shell.spy]
top_inset = 0.25
bottom_inset = 0.20

[[pages]]
route = "/tts"
title = "Text to Speech"

[[pages.sections]]
title = "Text to Speech"
links = [
    { label = "Overview", target_id = "tts-overview" },
    { label = "Synthesize", method = "POST", target_id = "tts-synthesize" },
    { label = "Transcribe audio", to = "/stt", hash = "stt-transcribe" },
]

[[pages.code_blocks]]
id = "install"
language = "bash"
code = "pip install induslabs"

[[pages]]
route = "/stt"
title = "Speech to Text"

[[pages.sections]]
title = "Speech to Text"
links = [
    { label = "Overview", target_id = "stt-overview" },
    { label = "Transcribe", method = "POST", target_id = "stt-transcribe" },
]

[[pages]]
route = "/404"
title = "Page not found"
"#;

fn main() -> docshell_layout::Result<()> {
    docshell_layout::logging::init()?;

    let site = Site::from_toml(SITE)?;
    println!("{}: {} pages", site.title, site.pages.len());
    for path in ["/tts", "/stt/", "/llm", "/pricing"] {
        let shown = site.page_for_path(path).map(|p| p.title.as_str());
        println!("  {path:<10} -> {} ({shown:?})", site.route_for(path));
    }

    let Some(tts) = site.page_for_path("/tts").cloned() else {
        return Ok(());
    };
    let host = MemoryHost::default()
        .with_sections(0.0, &[("tts-overview", 800.0), ("tts-synthesize", 1200.0)]);
    let mut shell = DocsLayout::mount(host, site.shell.clone(), tts);

    // The host reacts to a pushed route by loading the matching page.
    let link = shell.page().sections[0].links[2].clone();
    shell.handle(ShellEvent::SelectLink(link));
    if let Some(href) = shell.host().pushed_routes().last().cloned()
        && let Some(next) = site.page_for_path(&href).cloned()
    {
        shell.load_page(next);
    }
    println!(
        "now on {} with active {:?}",
        shell.page().route,
        shell.active_section().map(|a| a.as_str())
    );

    let broken = SITE.replace("hash = \"stt-transcribe\"", "hash = \"stt-missing\"");
    match Site::from_toml(&broken) {
        Ok(_) => println!("broken site unexpectedly loaded"),
        Err(err) => println!("broken site: {err}"),
    }
    Ok(())
}
