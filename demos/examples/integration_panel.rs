// Copyright 2025 the Docshell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integration panel and copy button.
//!
//! Switches APIs on a nested panel and shows how the language selection carries over
//! (or falls back), then copies the visible sample with a working and a broken clipboard.
//!
//! Run:
//! - `cargo run -p docshell_demos --example integration_panel`

use std::time::Duration;

use docshell_layout::adapters::memory::{ClipboardMode, MemoryHost};
use docshell_layout::copy::CopyableCode;
use docshell_select::panel::IntegrationPanel;
use docshell_select::types::{ApiOption, IntegrationData, LanguageOption};

fn lang(id: &str, code: &str) -> LanguageOption {
    LanguageOption {
        id: id.into(),
        label: id.into(),
        code: code.into(),
    }
}

fn show(panel: &IntegrationPanel) {
    let Some(view) = panel.view() else {
        println!("  (empty panel)");
        return;
    };
    let apis: Vec<String> = view
        .apis
        .iter()
        .map(|c| if c.selected { format!("[{}]", c.label) } else { c.label.to_string() })
        .collect();
    let langs: Vec<String> = view
        .languages
        .iter()
        .map(|c| if c.selected { format!("[{}]", c.label) } else { c.label.to_string() })
        .collect();
    println!("  apis:      {}", apis.join(" "));
    println!("  languages: {}", langs.join(" "));
    println!("  endpoint:  {}", view.endpoint.unwrap_or("-"));
    println!("  sample:    {}", view.sample.unwrap_or(""));
}

fn main() -> docshell_layout::Result<()> {
    docshell_layout::logging::init()?;

    let data = IntegrationData {
        apis: vec![
            ApiOption {
                id: "speak".into(),
                label: "Speak".into(),
                endpoint: Some("/v1/audio/speech".into()),
                languages: vec![
                    lang("curl", "curl -X POST https://api.induslabs.io/v1/audio/speech"),
                    lang("python", "client.audio.speech.create(text=\"hello\")"),
                ],
                default_language: Some("python".into()),
            },
            ApiOption {
                id: "stream".into(),
                label: "Stream".into(),
                endpoint: Some("/v1/audio/speech/stream".into()),
                languages: vec![
                    lang("python", "for chunk in client.audio.speech.stream(text=\"hi\"): ..."),
                    lang("node", "for await (const c of client.audio.speech.stream(...)) {}"),
                ],
                default_language: Some("node".into()),
            },
            ApiOption {
                id: "voices".into(),
                label: "Voices".into(),
                endpoint: Some("/v1/voices".into()),
                languages: vec![lang("curl", "curl https://api.induslabs.io/v1/voices")],
                default_language: None,
            },
        ],
        default_api: Some("speak".into()),
        ..Default::default()
    };

    let mut panel = IntegrationPanel::new(data);
    println!("initial:");
    show(&panel);

    // `python` exists on `stream`, so it survives the switch.
    let _ = panel.select_api("stream");
    println!("switch to stream:");
    show(&panel);

    // `voices` has no `python`; its default is unset, so the first option wins.
    let _ = panel.select_api("voices");
    println!("switch to voices:");
    show(&panel);

    let mut host = MemoryHost::default();
    let mut copy = CopyableCode::new();
    let ack = Duration::from_millis(1500);
    let sample = panel.active_language().map(|l| l.code.clone()).unwrap_or_default();

    let outcome = copy.press(&sample, &mut host, ack);
    println!("copy -> {outcome:?}, label {:?}, clipboard {:?}", copy.label(), host.clipboard());
    for id in host.advance(ack) {
        let _ = copy.timer_fired(id);
    }
    println!("after {}ms -> label {:?}", ack.as_millis(), copy.label());

    host.set_clipboard_mode(ClipboardMode::LegacyOnly);
    println!("legacy only -> {:?}", copy.press(&sample, &mut host, ack));
    host.set_clipboard_mode(ClipboardMode::Denied);
    println!("denied -> {:?}, label {:?}", copy.press(&sample, &mut host, ack), copy.label());
    Ok(())
}
