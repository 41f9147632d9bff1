//! # courier-render — Markdown Sanitization Pipeline
//!
//! Turns untrusted markdown (schema documentation, operator notes) into
//! HTML that is safe to embed in an administrative page.
//!
//! ## Pipeline
//!
//! Strictly ordered:
//!
//! 1. Empty input returns an empty string without touching the converter.
//! 2. [`markdown`]: markdown to HTML with a caller-overridable extension set
//!    (default: `extra`, `sane_lists`).
//! 3. [`sanitize`]: allowlist sanitization of tags, attributes per tag, and
//!    link protocols (`http`, `https`, `mailto`). Disallowed tags are
//!    stripped and their content promoted to the parent.
//! 4. [`linkify`]: bare URLs in text become anchors. This runs after
//!    sanitization, so it cannot be used to smuggle markup past it.
//!
//! ## Trust Boundary
//!
//! The output is sanitized but not marked trusted. Declaring it trusted for
//! a particular templating system is the caller's decision.
//!
//! Every stage is total: malformed markdown or HTML degrades to stripped
//! output, never to an error.

pub mod linkify;
pub mod markdown;
pub mod sanitize;

use std::collections::{BTreeMap, BTreeSet};

pub use markdown::{markdown_to_html, MarkdownExtension, UnknownExtension, DEFAULT_EXTENSIONS};
pub use sanitize::{sanitize_html, SanitizePolicy, ALLOWED_PROTOCOLS};

/// Configurable markdown-to-safe-HTML renderer.
///
/// Each override applies to this renderer only; the defaults used by
/// [`render_markdown_safe`] and other renderers are unaffected.
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    extensions: Vec<MarkdownExtension>,
    policy: SanitizePolicy,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.to_vec(),
            policy: SanitizePolicy::default(),
        }
    }
}

impl MarkdownRenderer {
    /// A renderer with the default extensions and sanitization policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the markdown extension set.
    pub fn with_extensions(mut self, extensions: impl IntoIterator<Item = MarkdownExtension>) -> Self {
        self.extensions = extensions.into_iter().collect();
        self
    }

    /// Replace the allowed tag set.
    pub fn with_allowed_tags<S: Into<String>>(mut self, tags: impl IntoIterator<Item = S>) -> Self {
        self.policy = self.policy.with_tags(tags);
        self
    }

    /// Replace the allowed attributes, keyed by tag name.
    pub fn with_allowed_attrs<K, V, A>(mut self, attrs: impl IntoIterator<Item = (K, A)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        A: IntoIterator<Item = V>,
    {
        self.policy = self.policy.with_attributes(attrs);
        self
    }

    pub fn extensions(&self) -> &[MarkdownExtension] {
        &self.extensions
    }

    pub fn allowed_tags(&self) -> &BTreeSet<String> {
        self.policy.tags()
    }

    pub fn allowed_attrs(&self) -> &BTreeMap<String, BTreeSet<String>> {
        self.policy.attributes()
    }

    /// Render `text` to sanitized, linkified HTML.
    pub fn render(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let html = markdown_to_html(text, &self.extensions);
        let clean = sanitize_html(&html, &self.policy);
        let linked = linkify::linkify(&clean);
        tracing::trace!(
            input_len = text.len(),
            output_len = linked.len(),
            "rendered markdown"
        );
        linked
    }
}

/// Render untrusted markdown with the default extensions and policy.
pub fn render_markdown_safe(text: &str) -> String {
    MarkdownRenderer::default().render(text)
}
