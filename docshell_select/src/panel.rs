// Copyright 2025 the Docshell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integration panel: API → language cascade.
//!
//! ## Usage
//!
//! 1) Build an [`IntegrationPanel`] from [`IntegrationData`]; both dimensions are resolved.
//! 2) Forward selector input to [`IntegrationPanel::select_api`] and
//!    [`IntegrationPanel::select_language`].
//! 3) On content reloads call [`IntegrationPanel::replace_data`].
//! 4) Render [`IntegrationPanel::view`].
//!
//! Every change re-runs [`resolve`] on both dimensions, so the selection can never dangle.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::resolve::resolve;
use crate::types::{
    ApiOption, ChoiceView, IntegrationData, Keyed, LanguageOption, PanelView, Selection,
};

/// Selector state for one mounted panel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IntegrationPanel {
    data: IntegrationData,
    selection: Selection,
}

impl IntegrationPanel {
    /// Create a panel and resolve the initial selection from the configured defaults.
    pub fn new(data: IntegrationData) -> Self {
        let mut panel = Self {
            data,
            selection: Selection::default(),
        };
        panel.reresolve(None, None);
        panel
    }

    /// The sample data.
    pub fn data(&self) -> &IntegrationData {
        &self.data
    }

    /// The current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The active API, for nested data.
    pub fn active_api(&self) -> Option<&ApiOption> {
        let id = self.selection.api.as_deref()?;
        self.data.apis.iter().find(|a| a.id == id)
    }

    /// The language list currently offered.
    pub fn languages(&self) -> &[LanguageOption] {
        if self.data.is_nested() {
            self.active_api()
                .map_or(&[][..], |api| api.languages.as_slice())
        } else {
            &self.data.languages
        }
    }

    /// The active language option.
    pub fn active_language(&self) -> Option<&LanguageOption> {
        let id = self.selection.language.as_deref()?;
        self.languages().iter().find(|l| l.id == id)
    }

    /// Switch the API. Unknown ids and flat data are ignored.
    ///
    /// The language carries over when the new API offers it; otherwise the new API's
    /// default (or first) language is taken. Returns `true` if the selection changed.
    pub fn select_api(&mut self, id: &str) -> bool {
        if !self.data.apis.iter().any(|a| a.id == id) {
            return false;
        }
        let before = self.selection.clone();
        let language = self.selection.language.take();
        self.reresolve(Some(id.to_string()), language);
        self.selection != before
    }

    /// Switch the language within the active list. Unknown ids are ignored.
    ///
    /// Returns `true` if the selection changed.
    pub fn select_language(&mut self, id: &str) -> bool {
        if !self.languages().iter().any(|l| l.id == id) {
            return false;
        }
        if self.selection.language.as_deref() == Some(id) {
            return false;
        }
        self.selection.language = Some(id.to_string());
        true
    }

    /// Replace the sample data, keeping the current ids where they still exist.
    ///
    /// Returns `true` if the selection changed.
    pub fn replace_data(&mut self, data: IntegrationData) -> bool {
        let before = self.selection.clone();
        self.data = data;
        let Selection { api, language } = core::mem::take(&mut self.selection);
        self.reresolve(api, language);
        self.selection != before
    }

    /// What to render, or `None` when both dimensions are empty.
    pub fn view(&self) -> Option<PanelView<'_>> {
        let apis = choices(&self.data.apis, self.selection.api.as_deref(), |a| &a.label);
        let languages = choices(
            self.languages(),
            self.selection.language.as_deref(),
            |l| &l.label,
        );
        if apis.is_empty() && languages.is_empty() {
            return None;
        }
        Some(PanelView {
            apis,
            languages,
            endpoint: self.active_api().and_then(|a| a.endpoint.as_deref()),
            sample: self.active_language().map(|l| l.code.as_str()),
        })
    }

    fn reresolve(&mut self, api: Option<String>, language: Option<String>) {
        let (api, languages, default_language) = if self.data.is_nested() {
            let api = resolve(
                &self.data.apis,
                api.as_deref(),
                self.data.default_api.as_deref(),
            );
            let active = api.and_then(|id| self.data.apis.iter().find(|a| a.id == id));
            (
                api,
                active.map_or(&[][..], |a| a.languages.as_slice()),
                active.and_then(|a| a.default_language.as_deref()),
            )
        } else {
            (
                None,
                self.data.languages.as_slice(),
                self.data.default_language.as_deref(),
            )
        };
        let language = resolve(languages, language.as_deref(), default_language);
        self.selection = Selection {
            api: api.map(str::to_string),
            language: language.map(str::to_string),
        };
    }
}

fn choices<'a, T: Keyed>(
    options: &'a [T],
    selected: Option<&str>,
    label: impl Fn(&'a T) -> &'a String,
) -> Vec<ChoiceView<'a>> {
    options
        .iter()
        .map(|o| ChoiceView {
            id: o.key(),
            label: label(o),
            selected: Some(o.key()) == selected,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn lang(id: &str) -> LanguageOption {
        LanguageOption {
            id: id.into(),
            label: id.to_uppercase(),
            code: alloc::format!("// {id} sample"),
        }
    }

    fn api(id: &str, default: Option<&str>, langs: &[&str]) -> ApiOption {
        ApiOption {
            id: id.into(),
            label: id.into(),
            endpoint: Some(alloc::format!("/v1/{id}")),
            languages: langs.iter().map(|l| lang(l)).collect(),
            default_language: default.map(Into::into),
        }
    }

    fn nested(apis: Vec<ApiOption>) -> IntegrationData {
        IntegrationData {
            apis,
            ..Default::default()
        }
    }

    #[test]
    fn initial_selection_uses_defaults() {
        let data = IntegrationData {
            apis: vec![
                api("a", Some("l2"), &["l1", "l2"]),
                api("b", None, &["l3"]),
            ],
            default_api: Some("b".into()),
            ..Default::default()
        };
        let panel = IntegrationPanel::new(data);
        assert_eq!(panel.selection().api.as_deref(), Some("b"));
        assert_eq!(panel.selection().language.as_deref(), Some("l3"));
    }

    #[test]
    fn unknown_defaults_fall_back_to_first() {
        let data = IntegrationData {
            apis: vec![api("a", Some("nope"), &["l1", "l2"])],
            default_api: Some("missing".into()),
            ..Default::default()
        };
        let panel = IntegrationPanel::new(data);
        assert_eq!(panel.selection().api.as_deref(), Some("a"));
        assert_eq!(panel.selection().language.as_deref(), Some("l1"));
    }

    // Switching to an API without the current language takes that API's default.
    #[test]
    fn api_switch_without_overlap_takes_new_default() {
        let mut panel = IntegrationPanel::new(nested(vec![
            api("a", Some("l1"), &["l1", "l2"]),
            api("b", Some("l3"), &["l3", "l4"]),
        ]));
        assert_eq!(panel.selection().language.as_deref(), Some("l1"));
        assert!(panel.select_api("b"));
        assert_eq!(panel.selection().api.as_deref(), Some("b"));
        assert_eq!(panel.selection().language.as_deref(), Some("l3"));
    }

    // Switching to an API that offers the current language keeps it.
    #[test]
    fn api_switch_with_overlap_keeps_language() {
        let mut panel = IntegrationPanel::new(nested(vec![
            api("a", Some("l1"), &["l1", "l2"]),
            api("b", Some("l4"), &["l1", "l4"]),
        ]));
        assert!(panel.select_api("b"));
        assert_eq!(panel.selection().language.as_deref(), Some("l1"));
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut panel = IntegrationPanel::new(nested(vec![api("a", None, &["l1"])]));
        let before = panel.selection().clone();
        assert!(!panel.select_api("zzz"));
        assert!(!panel.select_language("l9"));
        assert!(!panel.select_language("l1"));
        assert_eq!(panel.selection(), &before);
    }

    #[test]
    fn nested_data_shadows_flat_list() {
        let data = IntegrationData {
            apis: vec![api("a", None, &["l1"])],
            languages: vec![lang("flat")],
            default_language: Some("flat".into()),
            ..Default::default()
        };
        let panel = IntegrationPanel::new(data);
        assert_eq!(panel.selection().language.as_deref(), Some("l1"));
        assert!(panel.languages().iter().all(|l| l.id != "flat"));
    }

    #[test]
    fn flat_data_has_no_api_dimension() {
        let data = IntegrationData {
            languages: vec![lang("curl"), lang("python")],
            default_language: Some("python".into()),
            ..Default::default()
        };
        let mut panel = IntegrationPanel::new(data);
        assert_eq!(panel.selection().api, None);
        assert_eq!(panel.selection().language.as_deref(), Some("python"));
        assert!(panel.select_language("curl"));
        assert_eq!(
            panel.active_language().map(|l| l.code.as_str()),
            Some("// curl sample")
        );
        let view = panel.view().expect("flat panel renders");
        assert!(view.apis.is_empty());
        assert_eq!(view.endpoint, None);
    }

    // Reloaded data that drops the selected ids re-resolves instead of dangling.
    #[test]
    fn replace_data_reresolves_missing_ids() {
        let mut panel = IntegrationPanel::new(nested(vec![
            api("a", None, &["l1", "l2"]),
            api("b", None, &["l3"]),
        ]));
        assert!(panel.select_language("l2"));
        assert!(panel.replace_data(nested(vec![api("a", Some("l1"), &["l1"])])));
        assert_eq!(panel.selection().api.as_deref(), Some("a"));
        assert_eq!(panel.selection().language.as_deref(), Some("l1"));

        // Still-valid ids survive a reload.
        assert!(!panel.replace_data(nested(vec![
            api("z", None, &["l0"]),
            api("a", None, &["l0", "l1"]),
        ])));
        assert_eq!(panel.selection().api.as_deref(), Some("a"));
        assert_eq!(panel.selection().language.as_deref(), Some("l1"));
    }

    #[test]
    fn empty_language_list_renders_controls_without_sample() {
        let panel = IntegrationPanel::new(nested(vec![api("a", None, &[])]));
        let view = panel.view().expect("api selector still renders");
        assert_eq!(view.apis.len(), 1);
        assert!(view.apis[0].selected);
        assert!(view.languages.is_empty());
        assert_eq!(view.sample, None);
        assert_eq!(view.endpoint, Some("/v1/a"));
    }

    #[test]
    fn empty_data_renders_nothing() {
        let panel = IntegrationPanel::new(IntegrationData::default());
        assert_eq!(panel.view(), None);
        assert_eq!(panel.selection(), &Selection::default());
    }

    #[test]
    fn view_marks_selected_options() {
        let panel = IntegrationPanel::new(nested(vec![api("a", Some("l2"), &["l1", "l2"])]));
        let view = panel.view().expect("renders");
        let selected: Vec<&str> = view
            .languages
            .iter()
            .filter(|c| c.selected)
            .map(|c| c.id)
            .collect();
        assert_eq!(selected, vec!["l2"]);
        assert_eq!(view.languages[1].label, "L2");
        assert_eq!(view.sample, Some("// l2 sample"));
    }
}
