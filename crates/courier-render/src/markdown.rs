//! # Markdown Conversion
//!
//! CommonMark to HTML via `pulldown-cmark`, with named extensions mapped to
//! parser options. The converter is forgiving: any input produces output.
//!
//! Raw HTML blocks end at their last `>`. Text trailing the final tag of a
//! block (`<script>..</script>**bold**`) is converted as markdown rather
//! than passed through raw, so inline formatting next to raw HTML survives.

use std::str::FromStr;

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, TagEnd};
use thiserror::Error;

/// Named markdown feature flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkdownExtension {
    /// Tables and footnotes. Fenced code is always on.
    Extra,
    /// Ordered and bullet lists never merge; mixed numbering is tolerated.
    SaneLists,
    /// `~~strike~~`
    Strikethrough,
    /// `- [x] done`
    TaskLists,
    /// Typographic quotes and dashes.
    Smarty,
}

/// Extensions enabled when the caller does not choose.
pub const DEFAULT_EXTENSIONS: &[MarkdownExtension] =
    &[MarkdownExtension::Extra, MarkdownExtension::SaneLists];

/// An extension name that is not recognized.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown markdown extension: {0:?}")]
pub struct UnknownExtension(pub String);

impl MarkdownExtension {
    pub fn all() -> &'static [MarkdownExtension] {
        &[
            Self::Extra,
            Self::SaneLists,
            Self::Strikethrough,
            Self::TaskLists,
            Self::Smarty,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Extra => "extra",
            Self::SaneLists => "sane_lists",
            Self::Strikethrough => "strikethrough",
            Self::TaskLists => "tasklists",
            Self::Smarty => "smarty",
        }
    }

    fn options(&self) -> Options {
        match self {
            Self::Extra => Options::ENABLE_TABLES | Options::ENABLE_FOOTNOTES,
            // CommonMark list rules already keep ordered and bullet lists apart.
            Self::SaneLists => Options::empty(),
            Self::Strikethrough => Options::ENABLE_STRIKETHROUGH,
            Self::TaskLists => Options::ENABLE_TASKLISTS,
            Self::Smarty => Options::ENABLE_SMART_PUNCTUATION,
        }
    }
}

impl std::fmt::Display for MarkdownExtension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MarkdownExtension {
    type Err = UnknownExtension;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "extra" => Ok(Self::Extra),
            "sane_lists" => Ok(Self::SaneLists),
            "strikethrough" => Ok(Self::Strikethrough),
            "tasklists" => Ok(Self::TaskLists),
            "smarty" => Ok(Self::Smarty),
            other => Err(UnknownExtension(other.to_string())),
        }
    }
}

fn parser_options(extensions: &[MarkdownExtension]) -> Options {
    extensions
        .iter()
        .fold(Options::empty(), |acc, ext| acc | ext.options())
}

/// Convert markdown to (unsanitized) HTML.
pub fn markdown_to_html(text: &str, extensions: &[MarkdownExtension]) -> String {
    let options = parser_options(extensions);
    let mut events: Vec<Event<'_>> = Vec::new();
    let mut raw_block: Option<String> = None;

    for event in Parser::new_ext(text, options) {
        match event {
            Event::Start(Tag::HtmlBlock) => raw_block = Some(String::new()),
            Event::End(TagEnd::HtmlBlock) => {
                let block = raw_block.take().unwrap_or_default();
                let (raw, trailing) = split_trailing_text(&block);
                events.push(Event::Html(CowStr::from(raw.to_string())));
                if let Some(trailing) = trailing {
                    events.push(Event::Html(CowStr::from(markdown_to_html(
                        trailing, extensions,
                    ))));
                }
            }
            Event::Html(chunk) if raw_block.is_some() => {
                if let Some(buf) = raw_block.as_mut() {
                    buf.push_str(&chunk);
                }
            }
            other => events.push(other),
        }
    }

    let mut html = String::with_capacity(text.len() + text.len() / 2);
    pulldown_cmark::html::push_html(&mut html, events.into_iter());
    html
}

/// Split a raw HTML block after its last `>`, returning the markup and any
/// non-blank trailing text.
fn split_trailing_text(block: &str) -> (&str, Option<&str>) {
    match block.rfind('>') {
        Some(idx) => {
            let (raw, rest) = block.split_at(idx + 1);
            if rest.trim().is_empty() {
                (block, None)
            } else {
                (raw, Some(rest))
            }
        }
        None => (block, None),
    }
}
