// Copyright 2025 the Docshell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integration sample data and the selection it drives.

use alloc::string::String;
use alloc::vec::Vec;

/// Something that can be picked by its id.
///
/// Implemented by both selector dimensions so that [`resolve`](crate::resolve::resolve)
/// applies the same rule to each.
pub trait Keyed {
    /// Stable identifier of the option.
    fn key(&self) -> &str;
}

/// One code sample in one language.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LanguageOption {
    /// Identifier, e.g. `python` or `curl`.
    pub id: String,
    /// Label shown in the language selector.
    pub label: String,
    /// Sample source shown when this language is active.
    #[cfg_attr(feature = "serde", serde(default))]
    pub code: String,
}

impl Keyed for LanguageOption {
    fn key(&self) -> &str {
        &self.id
    }
}

/// One API variant with its own samples.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ApiOption {
    /// Identifier, e.g. `tts-stream`.
    pub id: String,
    /// Label shown in the API selector.
    pub label: String,
    /// Endpoint path displayed above the sample.
    #[cfg_attr(feature = "serde", serde(default))]
    pub endpoint: Option<String>,
    /// Samples for this API.
    #[cfg_attr(feature = "serde", serde(default))]
    pub languages: Vec<LanguageOption>,
    /// Preferred language when this API becomes active.
    #[cfg_attr(feature = "serde", serde(default))]
    pub default_language: Option<String>,
}

impl Keyed for ApiOption {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Sample data for one panel, in either the nested or the flat shape.
///
/// When `apis` is non-empty the flat `languages` list is ignored entirely.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IntegrationData {
    /// Nested shape: API variants, each with its own languages.
    pub apis: Vec<ApiOption>,
    /// Preferred API on first display.
    pub default_api: Option<String>,
    /// Flat shape: a single language list.
    pub languages: Vec<LanguageOption>,
    /// Preferred language of the flat list.
    pub default_language: Option<String>,
}

impl IntegrationData {
    /// Whether the nested shape is in use.
    pub fn is_nested(&self) -> bool {
        !self.apis.is_empty()
    }
}

/// Current choice in each dimension.
///
/// `api` is only ever set for nested data. `language` always names an option of the
/// active language list, or is `None` when that list is empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    /// Selected API id.
    pub api: Option<String>,
    /// Selected language id.
    pub language: Option<String>,
}

/// An option as the selector renders it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ChoiceView<'a> {
    /// Option id.
    pub id: &'a str,
    /// Option label.
    pub label: &'a str,
    /// Whether this option is the current selection.
    pub selected: bool,
}

/// What a panel renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelView<'a> {
    /// API selector entries; empty for flat data.
    pub apis: Vec<ChoiceView<'a>>,
    /// Language selector entries for the active API (or the flat list).
    pub languages: Vec<ChoiceView<'a>>,
    /// Endpoint of the active API, if any.
    pub endpoint: Option<&'a str>,
    /// Sample of the active language; `None` leaves the code area empty.
    pub sample: Option<&'a str>,
}
