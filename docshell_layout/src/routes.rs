// Copyright 2025 the Docshell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Client-side routes of the documentation site.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A documentation page route.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum Route {
    /// `/`: landing page.
    Home,
    /// `/tts`: text-to-speech.
    Tts,
    /// `/stt`: speech-to-text.
    Stt,
    /// `/sdk`: client SDK.
    Sdk,
    /// `/llm`: language model API, only served when the site enables it.
    Llm,
    /// `/voice-agents`.
    VoiceAgents,
    /// `/understanding-indus`: onboarding guide.
    UnderstandingIndus,
    /// Fallback for everything else.
    NotFound,
}

impl Route {
    /// Every route with a path, in navigation order.
    pub const ALL: [Self; 7] = [
        Self::Home,
        Self::Tts,
        Self::Stt,
        Self::Sdk,
        Self::Llm,
        Self::VoiceAgents,
        Self::UnderstandingIndus,
    ];

    /// Path of the route; `NotFound` has the conventional `/404`.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Tts => "/tts",
            Self::Stt => "/stt",
            Self::Sdk => "/sdk",
            Self::Llm => "/llm",
            Self::VoiceAgents => "/voice-agents",
            Self::UnderstandingIndus => "/understanding-indus",
            Self::NotFound => "/404",
        }
    }

    /// Parse a path exactly, ignoring a trailing slash, query and fragment.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        if path == Self::NotFound.path() {
            return Some(Self::NotFound);
        }
        Self::ALL.into_iter().find(|r| r.path() == path)
    }

    /// Map a browser path to the page to show. Unknown paths, and `/llm` when
    /// `llm_enabled` is off, show the not-found page.
    pub fn from_path(path: &str, llm_enabled: bool) -> Self {
        match Self::parse(path) {
            Some(Self::Llm) if !llm_enabled => Self::NotFound,
            Some(route) => route,
            None => Self::NotFound,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl TryFrom<String> for Route {
    type Error = Error;

    fn try_from(path: String) -> Result<Self, Self::Error> {
        Self::parse(&path).ok_or(Error::UnknownRoute { path })
    }
}

impl From<Route> for String {
    fn from(route: Route) -> Self {
        route.path().to_string()
    }
}
