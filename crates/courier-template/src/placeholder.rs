//! Placeholder extraction.
//!
//! A placeholder is `{{`, optional spaces or tabs, an identifier, optional
//! spaces or tabs, `}}`. Identifiers start with a letter or underscore and
//! continue with letters, digits, `_`, `.` or `-`, so dotted paths such as
//! `order.id` are one placeholder.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

static PLACEHOLDER: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"\{\{[ \t]*([a-zA-Z_][a-zA-Z0-9_.\-]*)[ \t]*\}\}").ok()
});

/// Distinct placeholder names in `body`, in order of first occurrence.
pub fn extract_placeholders(body: &str) -> Vec<String> {
    let Some(pattern) = PLACEHOLDER.as_ref() else {
        tracing::error!("placeholder pattern failed to compile");
        return Vec::new();
    };

    let mut seen = HashSet::new();
    pattern
        .captures_iter(body)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|name| seen.insert(*name))
        .map(str::to_string)
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Output never contains duplicates.
        #[test]
        fn no_duplicates(names in proptest::collection::vec("[a-z_][a-z0-9_.]{0,8}", 0..12)) {
            let body: String = names.iter().map(|n| format!("x {{{{ {n} }}}} y")).collect();
            let found = extract_placeholders(&body);
            let unique: HashSet<&String> = found.iter().collect();
            prop_assert_eq!(unique.len(), found.len());
        }

        /// Every embedded name is found, in first-seen order.
        #[test]
        fn first_seen_order(names in proptest::collection::vec("[a-z_][a-z0-9_]{0,8}", 0..12)) {
            let body: String = names.iter().map(|n| format!("{{{{{n}}}}} ")).collect();
            let mut expected: Vec<String> = Vec::new();
            for n in &names {
                if !expected.contains(n) {
                    expected.push(n.clone());
                }
            }
            prop_assert_eq!(extract_placeholders(&body), expected);
        }

        /// Text without braces never yields placeholders.
        #[test]
        fn brace_free_text_is_empty(body in "[^{}]{0,200}") {
            prop_assert!(extract_placeholders(&body).is_empty());
        }
    }
}
