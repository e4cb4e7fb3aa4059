// Copyright 2025 the Docshell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The single re-resolution rule used for every selector dimension.
//!
//! ## Rule
//!
//! 1. Keep the previous id if the new options still contain it (continuity).
//! 2. Otherwise take the configured default if the options contain it.
//! 3. Otherwise take the first option.
//! 4. With no options, nothing is selected.
//!
//! ```
//! use docshell_select::resolve::resolve;
//! use docshell_select::types::LanguageOption;
//!
//! let langs = ["curl", "python"].map(|id| LanguageOption { id: id.into(), ..Default::default() });
//! assert_eq!(resolve(&langs, Some("python"), Some("curl")), Some("python"));
//! assert_eq!(resolve(&langs, Some("go"), Some("curl")), Some("curl"));
//! assert_eq!(resolve(&langs, None, Some("rust")), Some("curl"));
//! assert_eq!(resolve::<LanguageOption>(&[], Some("curl"), None), None);
//! ```

use crate::types::Keyed;

/// Resolve the selection for `options` given the `previous` selection and a `default` id.
pub fn resolve<'a, T: Keyed>(
    options: &'a [T],
    previous: Option<&str>,
    default: Option<&str>,
) -> Option<&'a str> {
    let find = |id: &str| options.iter().map(Keyed::key).find(|k| *k == id);
    previous
        .and_then(find)
        .or_else(|| default.and_then(find))
        .or_else(|| options.first().map(Keyed::key))
}
