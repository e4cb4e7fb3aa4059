// Copyright 2025 the Docshell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation data and sidebar groups.
//!
//! A [`NavigationLink`] either scrolls to an anchor on the current page or navigates to another
//! route; [`LinkTarget`] makes the two mutually exclusive. In TOML a link sets exactly one of
//! `target_id` or `to` (optionally with `hash`):
//!
//! ```toml
//! [[sections]]
//! title = "Endpoints"
//! links = [
//!     { label = "Stream speech", method = "POST", target_id = "tts-stream" },
//!     { label = "Speech to text", to = "/stt", hash = "stt-overview" },
//! ]
//! ```

use docshell_spy::types::AnchorId;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::routes::Route;

/// HTTP method badge shown next to endpoint links.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `PATCH`
    Patch,
    /// `DELETE`
    Delete,
    /// WebSocket upgrade, shown as `WS`.
    Ws,
}

impl HttpMethod {
    /// Badge text.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Ws => "WS",
        }
    }
}

/// Where a link goes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LinkTarget {
    /// An anchor on the page that holds the link.
    Anchor(AnchorId),
    /// Another route, optionally at one of its anchors.
    Route {
        /// Destination page.
        route: Route,
        /// Anchor on the destination page.
        hash: Option<AnchorId>,
    },
}

/// One sidebar entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "RawLink", into = "RawLink")]
pub struct NavigationLink {
    /// Entry text.
    pub label: String,
    /// Optional HTTP method badge.
    pub method: Option<HttpMethod>,
    /// Destination.
    pub target: LinkTarget,
}

impl NavigationLink {
    /// A link to an anchor on the current page.
    pub fn anchor(label: impl Into<String>, id: impl Into<AnchorId>) -> Self {
        Self {
            label: label.into(),
            method: None,
            target: LinkTarget::Anchor(id.into()),
        }
    }

    /// A link to another route.
    pub fn route(label: impl Into<String>, route: Route, hash: Option<AnchorId>) -> Self {
        Self {
            label: label.into(),
            method: None,
            target: LinkTarget::Route { route, hash },
        }
    }

    /// Attach a method badge.
    #[must_use]
    pub fn with_method(mut self, method: HttpMethod) -> Self {
        self.method = Some(method);
        self
    }

    /// The in-page anchor, if this link scrolls within the page.
    pub fn anchor_id(&self) -> Option<&AnchorId> {
        match &self.target {
            LinkTarget::Anchor(id) => Some(id),
            LinkTarget::Route { .. } => None,
        }
    }

    /// The `href` a renderer should emit.
    pub fn href(&self) -> String {
        match &self.target {
            LinkTarget::Anchor(id) => format!("#{id}"),
            LinkTarget::Route { route, hash: None } => route.path().to_string(),
            LinkTarget::Route {
                route,
                hash: Some(id),
            } => format!("{}#{id}", route.path()),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
struct RawLink {
    label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    method: Option<HttpMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    target_id: Option<AnchorId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    to: Option<Route>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hash: Option<AnchorId>,
}

impl TryFrom<RawLink> for NavigationLink {
    type Error = Error;

    fn try_from(raw: RawLink) -> Result<Self, Self::Error> {
        let target = match (raw.target_id, raw.to) {
            (Some(id), None) if raw.hash.is_none() => LinkTarget::Anchor(id),
            (None, Some(route)) => LinkTarget::Route {
                route,
                hash: raw.hash,
            },
            _ => return Err(Error::AmbiguousLink { label: raw.label }),
        };
        Ok(Self {
            label: raw.label,
            method: raw.method,
            target,
        })
    }
}

impl From<NavigationLink> for RawLink {
    fn from(link: NavigationLink) -> Self {
        let (target_id, to, hash) = match link.target {
            LinkTarget::Anchor(id) => (Some(id), None, None),
            LinkTarget::Route { route, hash } => (None, Some(route), hash),
        };
        Self {
            label: link.label,
            method: link.method,
            target_id,
            to,
            hash,
        }
    }
}

/// A titled group of sidebar links.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct NavigationSection {
    /// Group heading.
    pub title: String,
    /// Entries in display order.
    #[serde(default)]
    pub links: Vec<NavigationLink>,
}

impl NavigationSection {
    /// In-page anchors targeted by this section, in order.
    pub fn anchors(&self) -> impl Iterator<Item = &AnchorId> {
        self.links.iter().filter_map(NavigationLink::anchor_id)
    }
}

/// One rendered sidebar entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarEntry<'a> {
    /// Entry text.
    pub label: &'a str,
    /// Method badge.
    pub method: Option<HttpMethod>,
    /// Link `href`.
    pub href: String,
    /// Whether the entry's anchor is the active section.
    pub active: bool,
}

/// A rendered sidebar group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarGroup<'a> {
    /// Group heading.
    pub title: &'a str,
    /// Entries.
    pub entries: Vec<SidebarEntry<'a>>,
}

impl<'a> SidebarGroup<'a> {
    /// Render `section`, marking the entry whose anchor is `active`.
    pub fn build(section: &'a NavigationSection, active: Option<&AnchorId>) -> Self {
        Self {
            title: &section.title,
            entries: section
                .links
                .iter()
                .map(|link| SidebarEntry {
                    label: &link.label,
                    method: link.method,
                    href: link.href(),
                    active: active.is_some() && link.anchor_id() == active,
                })
                .collect(),
        }
    }

    /// The active entry, if this group holds it.
    pub fn active_entry(&self) -> Option<&SidebarEntry<'a>> {
        self.entries.iter().find(|e| e.active)
    }
}
