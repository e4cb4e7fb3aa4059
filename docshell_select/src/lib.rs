// Copyright 2025 the Docshell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Docshell Select: the API → language selection cascade behind integration panels.
//!
//! ## Overview
//!
//! An integration panel shows exactly one code sample picked from static data in one of two shapes:
//!
//! - flat: a single list of [`LanguageOption`](crate::types::LanguageOption)s;
//! - nested: a list of [`ApiOption`](crate::types::ApiOption)s, each with its own languages and
//!   its own default language. Nested data, when present, shadows the flat list.
//!
//! [`IntegrationPanel`](crate::panel::IntegrationPanel) holds the selection and re-runs one pure
//! rule, [`resolve`](crate::resolve::resolve), on every change: previous id if still offered,
//! else the configured default, else the first option.
//!
//! ```
//! use docshell_select::panel::IntegrationPanel;
//! use docshell_select::types::{ApiOption, IntegrationData, LanguageOption};
//!
//! let lang = |id: &str| LanguageOption { id: id.into(), label: id.into(), code: format!("{id}()") };
//! let data = IntegrationData {
//!     apis: vec![
//!         ApiOption { id: "tts".into(), label: "TTS".into(), languages: vec![lang("python"), lang("curl")], ..Default::default() },
//!         ApiOption { id: "stt".into(), label: "STT".into(), languages: vec![lang("curl")], ..Default::default() },
//!     ],
//!     ..Default::default()
//! };
//! let mut panel = IntegrationPanel::new(data);
//! assert!(panel.select_language("curl"));
//! assert!(panel.select_api("stt"));
//! // `curl` is offered by both APIs, so it survives the switch.
//! assert_eq!(panel.view().and_then(|v| v.sample), Some("curl()"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod panel;
pub mod resolve;
pub mod types;
