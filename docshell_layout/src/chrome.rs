// Copyright 2025 the Docshell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Header elevation and the scroll-to-top affordance, derived from the scroll offset.

bitflags::bitflags! {
    /// Visual state of the page chrome.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Chrome: u8 {
        /// The header casts a shadow.
        const ELEVATED           = 0b0000_0001;
        /// The floating scroll-to-top button is shown.
        const SCROLL_TOP_VISIBLE = 0b0000_0010;
    }
}

/// Offsets (px) the scroll position must exceed for each chrome flag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChromeThresholds {
    /// Threshold for [`Chrome::ELEVATED`].
    pub elevation: f64,
    /// Threshold for [`Chrome::SCROLL_TOP_VISIBLE`].
    pub scroll_top: f64,
}

impl Chrome {
    /// Chrome state for a document scrolled by `offset` pixels.
    pub fn from_offset(offset: f64, thresholds: &ChromeThresholds) -> Self {
        let mut chrome = Self::empty();
        chrome.set(Self::ELEVATED, offset > thresholds.elevation);
        chrome.set(Self::SCROLL_TOP_VISIBLE, offset > thresholds.scroll_top);
        chrome
    }

    /// Whether the header is elevated.
    pub fn is_elevated(self) -> bool {
        self.contains(Self::ELEVATED)
    }

    /// Whether the scroll-to-top button is shown.
    pub fn shows_scroll_top(self) -> bool {
        self.contains(Self::SCROLL_TOP_VISIBLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: ChromeThresholds = ChromeThresholds {
        elevation: 8.0,
        scroll_top: 400.0,
    };

    #[test]
    fn top_of_page_is_flat() {
        assert_eq!(Chrome::from_offset(0.0, &T), Chrome::empty());
        // Exactly at the threshold does not exceed it.
        assert_eq!(Chrome::from_offset(8.0, &T), Chrome::empty());
    }

    #[test]
    fn small_scroll_elevates_header_only() {
        let c = Chrome::from_offset(9.0, &T);
        assert!(c.is_elevated());
        assert!(!c.shows_scroll_top());
    }

    #[test]
    fn deep_scroll_shows_both() {
        let c = Chrome::from_offset(1200.0, &T);
        assert_eq!(c, Chrome::ELEVATED | Chrome::SCROLL_TOP_VISIBLE);
    }
}
