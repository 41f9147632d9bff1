//! # Documentation Presentation
//!
//! Schema documentation as shown on an administrative page. Markdown is
//! rendered through the sanitization pipeline; a provider without
//! documentation gets a fixed sentence instead of an empty block.
//!
//! The returned HTML is sanitized but not marked trusted. The page
//! template decides that.

use courier_render::MarkdownRenderer;
use courier_schema::SchemaResolver;

use crate::provider::Provider;

/// Shown when a provider has no configuration schema documentation.
pub const NO_SCHEMA_DOCUMENTATION: &str = "No documentation available for this provider schema.";

/// Shown when a provider has no request schema documentation.
pub const NO_REQUEST_SCHEMA_DOCUMENTATION: &str =
    "No documentation available for this provider request schema.";

/// Summaries are cut to this many characters.
pub const SUMMARY_MAX_CHARS: usize = 200;

/// First line of `doc`, cut to [`SUMMARY_MAX_CHARS`], or `-` when `doc`
/// is empty.
pub fn schema_doc_summary(doc: &str) -> String {
    let line = if doc.is_empty() {
        "-"
    } else {
        doc.lines().next().unwrap_or_default()
    };
    line.chars().take(SUMMARY_MAX_CHARS).collect()
}

/// Renders provider documentation for display.
#[derive(Debug, Clone)]
pub struct DocumentationView<'r> {
    resolver: SchemaResolver<'r>,
    renderer: MarkdownRenderer,
}

impl<'r> DocumentationView<'r> {
    pub fn new(resolver: SchemaResolver<'r>) -> Self {
        Self {
            resolver,
            renderer: MarkdownRenderer::default(),
        }
    }

    /// Use a renderer with non-default extensions or allowlists.
    pub fn with_renderer(mut self, renderer: MarkdownRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Configuration schema documentation as sanitized HTML.
    pub fn schema_documentation(&self, provider: &Provider) -> String {
        self.present(&provider.schema_doc(&self.resolver), NO_SCHEMA_DOCUMENTATION)
    }

    /// Request schema documentation as sanitized HTML.
    pub fn request_schema_documentation(&self, provider: &Provider) -> String {
        self.present(
            &provider.request_schema_doc(&self.resolver),
            NO_REQUEST_SCHEMA_DOCUMENTATION,
        )
    }

    /// One-line summary of the configuration schema documentation.
    pub fn schema_summary(&self, provider: &Provider) -> String {
        schema_doc_summary(&provider.schema_doc(&self.resolver))
    }

    fn present(&self, doc: &str, fallback: &str) -> String {
        if doc.is_empty() {
            return fallback.to_string();
        }
        self.renderer.render(doc)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// A summary is a bounded prefix of the first line.
        #[test]
        fn summary_is_prefix_of_first_line(doc in "\\PC{0,400}(\n\\PC{0,40}){0,3}") {
            let summary = schema_doc_summary(&doc);
            prop_assert!(summary.chars().count() <= SUMMARY_MAX_CHARS);
            prop_assert!(!summary.contains('\n'));
            if !doc.is_empty() {
                let first = doc.lines().next().unwrap_or_default();
                prop_assert!(first.starts_with(&summary));
            }
        }
    }
}
