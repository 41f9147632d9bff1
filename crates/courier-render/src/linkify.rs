//! # URL Linkification
//!
//! Wraps bare `http://`, `https://` and `www.` URLs found in text nodes of
//! sanitized HTML in `<a href=".." rel="nofollow">` anchors. Markup is
//! copied through unchanged and text inside an existing anchor is left
//! alone.
//!
//! Input is expected to be serializer output (well-formed, entity-escaped
//! text), so a URL ends at whitespace, a quote, an escaped angle bracket or
//! trailing sentence punctuation.

use std::sync::LazyLock;

use regex::Regex;

static URL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#"(?i)\b(?:https?://|www\.)[^\s<>"']+"#).ok());

const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', '\''];

/// Linkify bare URLs in the text of an HTML fragment.
pub fn linkify(html: &str) -> String {
    let Some(pattern) = URL_PATTERN.as_ref() else {
        return html.to_string();
    };

    let mut out = String::with_capacity(html.len());
    let mut anchor_depth = 0usize;
    let mut rest = html;

    while !rest.is_empty() {
        match rest.find('<') {
            Some(0) => {
                let end = tag_end(rest).unwrap_or(rest.len());
                let tag = &rest[..end];
                match anchor_edge(tag) {
                    Some(true) => anchor_depth += 1,
                    Some(false) => anchor_depth = anchor_depth.saturating_sub(1),
                    None => {}
                }
                out.push_str(tag);
                rest = &rest[end..];
            }
            found => {
                let end = found.unwrap_or(rest.len());
                let text = &rest[..end];
                if anchor_depth == 0 {
                    link_text(pattern, text, &mut out);
                } else {
                    out.push_str(text);
                }
                rest = &rest[end..];
            }
        }
    }
    out
}

/// Byte offset just past the `>` closing the tag at the start of `s`,
/// ignoring `>` inside quoted attribute values.
fn tag_end(s: &str) -> Option<usize> {
    let mut quote: Option<u8> = None;
    for (i, b) in s.bytes().enumerate().skip(1) {
        match (quote, b) {
            (Some(q), _) if b == q => quote = None,
            (Some(_), _) => {}
            (None, b'"' | b'\'') => quote = Some(b),
            (None, b'>') => return Some(i + 1),
            _ => {}
        }
    }
    None
}

/// `Some(true)` for an `<a ...>` opening tag, `Some(false)` for `</a>`.
fn anchor_edge(tag: &str) -> Option<bool> {
    let inner = tag.strip_prefix('<')?;
    let (closing, inner) = match inner.strip_prefix('/') {
        Some(rest) => (true, rest),
        None => (false, inner),
    };
    let name: String = inner
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect();
    if !name.eq_ignore_ascii_case("a") {
        return None;
    }
    if !closing && tag.trim_end_matches('>').ends_with('/') {
        return None;
    }
    Some(!closing)
}

fn link_text(pattern: &Regex, text: &str, out: &mut String) {
    let mut last = 0;
    for m in pattern.find_iter(text) {
        let url = trim_url(m.as_str());
        if url.len() <= "www.".len() || url.ends_with("://") {
            continue;
        }
        out.push_str(&text[last..m.start()]);
        push_anchor(url, out);
        out.push_str(&text[m.start() + url.len()..m.end()]);
        last = m.end();
    }
    out.push_str(&text[last..]);
}

fn trim_url(candidate: &str) -> &str {
    let mut url = candidate;
    for entity in ["&lt;", "&gt;", "&quot;"] {
        if let Some(idx) = url.find(entity) {
            url = &url[..idx];
        }
    }
    loop {
        let trimmed = url.trim_end_matches(TRAILING_PUNCTUATION);
        let trimmed = if trimmed.ends_with(')') && !balanced_parens(trimmed) {
            &trimmed[..trimmed.len() - 1]
        } else {
            trimmed
        };
        if trimmed.len() == url.len() {
            return url;
        }
        url = trimmed;
    }
}

fn balanced_parens(s: &str) -> bool {
    s.matches('(').count() >= s.matches(')').count()
}

fn push_anchor(url: &str, out: &mut String) {
    let href = if url.len() >= 4 && url[..4].eq_ignore_ascii_case("www.") {
        format!("http://{url}")
    } else {
        url.to_string()
    };
    out.push_str("<a href=\"");
    out.push_str(&href.replace('"', "&quot;"));
    out.push_str("\" rel=\"nofollow\">");
    out.push_str(url);
    out.push_str("</a>");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_https_url() {
        assert_eq!(
            linkify("<p>see https://example.com now</p>"),
            r#"<p>see <a href="https://example.com" rel="nofollow">https://example.com</a> now</p>"#
        );
    }

    #[test]
    fn test_www_gets_scheme() {
        let out = linkify("<p>www.example.org</p>");
        assert_eq!(
            out,
            r#"<p><a href="http://www.example.org" rel="nofollow">www.example.org</a></p>"#
        );
    }

    #[test]
    fn test_trailing_punctuation_excluded() {
        let out = linkify("<p>Go to https://example.com/a.</p>");
        assert!(out.contains(r#">https://example.com/a</a>.</p>"#), "{out}");
    }

    #[test]
    fn test_unbalanced_paren_excluded() {
        let out = linkify("<p>(https://example.com/x)</p>");
        assert!(out.contains(r#">https://example.com/x</a>)</p>"#), "{out}");
        let wiki = linkify("<p>https://en.wikipedia.org/wiki/Foo_(bar)</p>");
        assert!(wiki.contains(">https://en.wikipedia.org/wiki/Foo_(bar)</a>"), "{wiki}");
    }

    #[test]
    fn test_escaped_angle_bracket_ends_url() {
        let out = linkify("<p>&lt;https://example.com&gt;</p>");
        assert!(
            out.contains(r#"&lt;<a href="https://example.com" rel="nofollow">https://example.com</a>&gt;"#),
            "{out}"
        );
    }

    #[test]
    fn test_existing_anchor_untouched() {
        let html = r#"<p><a href="https://example.com">https://example.com</a></p>"#;
        assert_eq!(linkify(html), html);
    }

    #[test]
    fn test_attribute_values_untouched() {
        let html = r#"<a title="x > https://evil.example" href="https://a.example">t</a>"#;
        assert_eq!(linkify(html), html);
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(linkify("<p>no links here</p>"), "<p>no links here</p>");
        assert_eq!(linkify(""), "");
    }

    #[test]
    fn test_scheme_only_not_linked() {
        assert_eq!(linkify("<p>http:// and www.</p>"), "<p>http:// and www.</p>");
    }

    #[test]
    fn test_anchor_edge() {
        assert_eq!(anchor_edge(r#"<a href="x">"#), Some(true));
        assert_eq!(anchor_edge("</a>"), Some(false));
        assert_eq!(anchor_edge("<abbr>"), None);
        assert_eq!(anchor_edge("<p>"), None);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Text without URL prefixes passes through byte-for-byte.
        #[test]
        fn text_without_urls_unchanged(text in "[a-zA-Z0-9 ,.!?]{0,80}") {
            prop_assume!(!text.to_ascii_lowercase().contains("www."));
            prop_assume!(!text.to_ascii_lowercase().contains("http"));
            let html = format!("<p>{text}</p>");
            prop_assert_eq!(linkify(&html), html);
        }

        /// Linkifying twice adds nothing the first pass did not.
        #[test]
        fn idempotent(host in "[a-z]{1,12}", tld in "(com|org|net)") {
            let html = format!("<p>visit https://{host}.{tld} today</p>");
            let once = linkify(&html);
            prop_assert_eq!(linkify(&once), once);
        }
    }
}
