// Copyright 2025 the Docshell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static page content and the site that groups it.
//!
//! Pages are declarative: navigation sections, code blocks and integration panel data. The
//! shell only reads them. [`Site::from_toml`] loads and cross-checks a whole site:
//!
//! ```
//! use docshell_layout::page::Site;
//! use docshell_layout::routes::Route;
//!
//! let site = Site::from_toml(r#"
//!     title = "Indus Labs Docs"
//!     base_url = "/docs"
//!
//!     [[pages]]
//!     route = "/tts"
//!     title = "Text to Speech"
//!
//!     [[pages.sections]]
//!     title = "Getting started"
//!     links = [{ label = "Install", target_id = "install" }]
//!
//!     [[pages.code_blocks]]
//!     id = "install-cmd"
//!     code = "pip install induslabs"
//! "#).unwrap();
//! assert_eq!(site.page_for_path("/tts/").map(|p| p.route), Some(Route::Tts));
//! assert!(site.page_for_path("/llm").is_none());
//! ```

use std::collections::BTreeSet;
use std::path::Path;

use docshell_select::types::IntegrationData;
use docshell_spy::types::AnchorId;
use serde::{Deserialize, Serialize};

use crate::config::ShellConfig;
use crate::error::{Error, Result};
use crate::nav::{LinkTarget, NavigationSection};
use crate::routes::Route;

/// A code block with a copy button.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct CodeBlock {
    /// Identifier, unique within the page.
    pub id: String,
    /// Language tag for highlighting.
    #[serde(default)]
    pub language: Option<String>,
    /// Exact text that is displayed and copied.
    pub code: String,
}

/// Content of one route.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct PageConfig {
    /// Route the page is served at.
    pub route: Route,
    /// Page title.
    pub title: String,
    /// Sidebar groups, in display order.
    #[serde(default)]
    pub sections: Vec<NavigationSection>,
    /// Code blocks with copy buttons.
    #[serde(default)]
    pub code_blocks: Vec<CodeBlock>,
    /// Integration panels, in page order.
    #[serde(default)]
    pub panels: Vec<IntegrationData>,
}

impl PageConfig {
    /// An empty page.
    pub fn new(route: Route, title: impl Into<String>) -> Self {
        Self {
            route,
            title: title.into(),
            sections: Vec::new(),
            code_blocks: Vec::new(),
            panels: Vec::new(),
        }
    }

    /// Anchors the scroll-spy tracks: every in-page link target, in sidebar order.
    pub fn anchors(&self) -> Vec<AnchorId> {
        self.sections
            .iter()
            .flat_map(NavigationSection::anchors)
            .cloned()
            .collect()
    }

    /// Whether the page declares `id` as an in-page anchor.
    pub fn declares(&self, id: &AnchorId) -> bool {
        self.sections.iter().flat_map(NavigationSection::anchors).any(|a| a == id)
    }

    /// A code block by id.
    pub fn code_block(&self, id: &str) -> Option<&CodeBlock> {
        self.code_blocks.iter().find(|b| b.id == id)
    }

    /// Check that anchors and code block ids are unique.
    pub fn validate(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        for id in self.sections.iter().flat_map(NavigationSection::anchors) {
            if !seen.insert(id) {
                return Err(Error::DuplicateAnchor {
                    route: self.route.to_string(),
                    anchor: id.to_string(),
                });
            }
        }
        let mut blocks = BTreeSet::new();
        for block in &self.code_blocks {
            if !blocks.insert(block.id.as_str()) {
                return Err(Error::DuplicateBlock {
                    route: self.route.to_string(),
                    block: block.id.clone(),
                });
            }
        }
        Ok(())
    }
}

fn default_base_url() -> String {
    "/".to_string()
}

/// Build-time site description.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Site {
    /// Site title.
    pub title: String,
    /// Base URL the site is served under.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Whether the `/llm` page is served.
    #[serde(default)]
    pub llm_enabled: bool,
    /// Shell tuning.
    #[serde(default)]
    pub shell: ShellConfig,
    /// Pages.
    #[serde(default)]
    pub pages: Vec<PageConfig>,
}

impl Site {
    /// Parse and validate a TOML site description.
    pub fn from_toml(text: &str) -> Result<Self> {
        let site: Self = toml::from_str(text)?;
        site.validate()?;
        Ok(site)
    }

    /// Read, parse and validate a TOML site description.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let site = Self::from_toml(&std::fs::read_to_string(path)?)?;
        tracing::info!(
            pages = site.pages.len(),
            "Loaded site `{}` from {}",
            site.title,
            path.display()
        );
        Ok(site)
    }

    /// Validate the shell config, every page, and cross-page links.
    pub fn validate(&self) -> Result<()> {
        self.shell.validate()?;
        let mut routes = BTreeSet::new();
        for page in &self.pages {
            if !routes.insert(page.route) {
                return Err(Error::DuplicatePage {
                    route: page.route.to_string(),
                });
            }
            page.validate()?;
        }
        if !self.llm_enabled && routes.contains(&Route::Llm) {
            tracing::warn!("`/llm` page is defined but `llm_enabled` is off; it will not be served");
        }

        for page in &self.pages {
            for link in page.sections.iter().flat_map(|s| &s.links) {
                let LinkTarget::Route {
                    route,
                    hash: Some(hash),
                } = &link.target
                else {
                    continue;
                };
                // Links into pages this site does not describe cannot be checked.
                let Some(target) = self.page(*route) else {
                    continue;
                };
                if !target.declares(hash) {
                    return Err(Error::DanglingLink {
                        route: page.route.to_string(),
                        label: link.label.clone(),
                        target: link.href(),
                    });
                }
            }
        }
        Ok(())
    }

    /// The page for `route`, if defined.
    pub fn page(&self, route: Route) -> Option<&PageConfig> {
        self.pages.iter().find(|p| p.route == route)
    }

    /// The route a browser path resolves to, honouring `llm_enabled`.
    pub fn route_for(&self, path: &str) -> Route {
        Route::from_path(path, self.llm_enabled)
    }

    /// The page a browser path shows; `None` when even the not-found page is undefined.
    pub fn page_for_path(&self, path: &str) -> Option<&PageConfig> {
        self.page(self.route_for(path))
            .or_else(|| self.page(Route::NotFound))
    }
}
