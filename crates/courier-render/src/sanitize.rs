//! # HTML Sanitization
//!
//! Allowlist sanitization backed by `ammonia` (html5ever parsing, so
//! malformed fragments are repaired rather than rejected).
//!
//! ## Security Invariant
//!
//! - Only tags in [`SanitizePolicy::tags`] survive. Any other tag is
//!   removed and its children are promoted to the parent, including the
//!   contents of `script` and `style`, which end up as escaped text.
//! - Only attributes listed for a tag survive. There are no global
//!   attributes.
//! - `href` values must use `http`, `https` or `mailto`; any other scheme
//!   drops the attribute. Relative URLs pass through.
//! - HTML comments are removed.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Link protocols permitted in URL attributes.
pub const ALLOWED_PROTOCOLS: &[&str] = &["http", "https", "mailto"];

/// Inline formatting tags every policy starts from.
const BASELINE_TAGS: &[&str] = &[
    "a", "abbr", "acronym", "b", "blockquote", "code", "em", "i", "li", "ol", "strong", "ul",
];

/// Block-level tags emitted by rendered markdown.
const MARKDOWN_BLOCK_TAGS: &[&str] = &[
    "p", "pre", "code", "blockquote", "hr", "h1", "h2", "h3", "h4", "h5", "h6", "ul", "ol", "li",
    "table", "thead", "tbody", "tr", "th", "td",
];

const DEFAULT_ATTRIBUTES: &[(&str, &[&str])] = &[
    ("a", &["href", "title", "rel", "target"]),
    ("th", &["colspan", "rowspan"]),
    ("td", &["colspan", "rowspan"]),
];

/// Tag, attribute and protocol allowlists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizePolicy {
    tags: BTreeSet<String>,
    attributes: BTreeMap<String, BTreeSet<String>>,
    protocols: BTreeSet<String>,
}

impl Default for SanitizePolicy {
    fn default() -> Self {
        let tags = BASELINE_TAGS
            .iter()
            .chain(MARKDOWN_BLOCK_TAGS)
            .map(|t| t.to_string())
            .collect();
        let attributes = DEFAULT_ATTRIBUTES
            .iter()
            .map(|(tag, attrs)| (tag.to_string(), attrs.iter().map(|a| a.to_string()).collect()))
            .collect();
        Self {
            tags,
            attributes,
            protocols: ALLOWED_PROTOCOLS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl SanitizePolicy {
    /// Replace the tag allowlist.
    pub fn with_tags<S: Into<String>>(mut self, tags: impl IntoIterator<Item = S>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the per-tag attribute allowlist.
    pub fn with_attributes<K, V, A>(mut self, attrs: impl IntoIterator<Item = (K, A)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        A: IntoIterator<Item = V>,
    {
        self.attributes = attrs
            .into_iter()
            .map(|(tag, names)| (tag.into(), names.into_iter().map(Into::into).collect()))
            .collect();
        self
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    pub fn attributes(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.attributes
    }

    pub fn protocols(&self) -> &BTreeSet<String> {
        &self.protocols
    }

    fn builder(&self) -> ammonia::Builder<'_> {
        let tags: HashSet<&str> = self.tags.iter().map(String::as_str).collect();
        let tag_attributes: HashMap<&str, HashSet<&str>> = self
            .attributes
            .iter()
            .map(|(tag, attrs)| (tag.as_str(), attrs.iter().map(String::as_str).collect()))
            .collect();
        let schemes: HashSet<&str> = self.protocols.iter().map(String::as_str).collect();

        let mut builder = ammonia::Builder::default();
        builder
            .tags(tags)
            .clean_content_tags(HashSet::new())
            .tag_attributes(tag_attributes)
            .generic_attributes(HashSet::new())
            .url_schemes(schemes)
            .link_rel(None)
            .strip_comments(true);
        builder
    }
}

/// Sanitize an HTML fragment against `policy`.
pub fn sanitize_html(html: &str, policy: &SanitizePolicy) -> String {
    policy.builder().clean(html).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(html: &str) -> String {
        sanitize_html(html, &SanitizePolicy::default())
    }

    #[test]
    fn test_default_tags_cover_markdown_output() {
        let policy = SanitizePolicy::default();
        for tag in ["p", "pre", "h1", "h6", "table", "thead", "tbody", "tr", "th", "td", "hr", "strong", "em", "a"] {
            assert!(policy.tags().contains(tag), "missing {tag}");
        }
        assert!(!policy.tags().contains("img"));
        assert!(!policy.tags().contains("script"));
    }

    #[test]
    fn test_script_tag_stripped_content_kept_as_text() {
        let out = clean("<script>alert(1)</script><p>ok</p>");
        assert!(!out.contains("<script"), "{out}");
        assert!(out.contains("<p>ok</p>"), "{out}");
    }

    #[test]
    fn test_disallowed_tag_content_promoted() {
        let out = clean("<div><span>kept <strong>text</strong></span></div>");
        assert_eq!(out, "kept <strong>text</strong>");
    }

    #[test]
    fn test_event_handlers_removed() {
        let out = clean(r#"<p onclick="x()">hi</p><img src="x" onerror="alert(1)">"#);
        assert_eq!(out, "<p>hi</p>");
    }

    #[test]
    fn test_javascript_href_dropped() {
        let out = clean(r#"<a href="javascript:evil()">click</a>"#);
        assert!(!out.contains("javascript"), "{out}");
        assert!(out.contains("click"), "{out}");
    }

    #[test]
    fn test_allowed_link_attributes_kept() {
        let out = clean(r#"<a href="https://example.com" title="t" target="_blank" rel="noopener">x</a>"#);
        assert!(out.contains(r#"href="https://example.com""#), "{out}");
        assert!(out.contains(r#"title="t""#), "{out}");
        assert!(out.contains(r#"target="_blank""#), "{out}");
        assert!(out.contains(r#"rel="noopener""#), "{out}");
    }

    #[test]
    fn test_mailto_kept_data_dropped() {
        assert!(clean(r#"<a href="mailto:a@b.c">m</a>"#).contains("mailto:a@b.c"));
        assert!(!clean(r#"<a href="data:text/html,x">d</a>"#).contains("data:"));
    }

    #[test]
    fn test_cell_span_attributes() {
        let out = clean(r#"<table><tr><td colspan="2" style="color:red">x</td></tr></table>"#);
        assert!(out.contains(r#"colspan="2""#), "{out}");
        assert!(!out.contains("style"), "{out}");
    }

    #[test]
    fn test_comments_removed() {
        assert_eq!(clean("<p>a<!-- secret -->b</p>"), "<p>ab</p>");
    }

    #[test]
    fn test_unclosed_markup_repaired() {
        let out = clean("<p><strong>open");
        assert_eq!(out, "<p><strong>open</strong></p>");
    }
}
