//! # Schema Documentation
//!
//! Schema descriptions are usually written as indented string literals.
//! [`clean_doc`] normalizes them for display without re-wrapping:
//!
//! - tabs expand to 8-column stops;
//! - the first line loses its leading whitespace;
//! - the remaining lines lose their common indentation;
//! - leading and trailing blank lines are dropped.

use crate::definition::SchemaDef;

const TAB_WIDTH: usize = 8;

/// Cleaned documentation of `schema`, or an empty string when the schema is
/// absent or undocumented.
pub fn extract_doc(schema: Option<&SchemaDef>) -> String {
    schema
        .map(|s| clean_doc(s.description()))
        .unwrap_or_default()
}

/// Dedent and trim a documentation block.
pub fn clean_doc(text: &str) -> String {
    let mut lines: Vec<String> = text.lines().map(expand_tabs).collect();
    if lines.is_empty() {
        return String::new();
    }

    lines[0] = lines[0].trim_start().to_string();

    let margin = lines
        .iter()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(|line| indentation(line))
        .min()
        .unwrap_or(0);

    for line in lines.iter_mut().skip(1) {
        *line = strip_indent(line, margin).to_string();
    }

    let first = lines.iter().position(|l| !l.trim().is_empty());
    let last = lines.iter().rposition(|l| !l.trim().is_empty());
    match (first, last) {
        (Some(first), Some(last)) => lines[first..=last].join("\n"),
        _ => String::new(),
    }
}

fn indentation(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Remove up to `margin` leading whitespace characters.
fn strip_indent(line: &str, margin: usize) -> &str {
    let cut = line
        .char_indices()
        .take(margin)
        .take_while(|(_, c)| c.is_whitespace())
        .last()
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);
    &line[cut..]
}

fn expand_tabs(line: &str) -> String {
    if !line.contains('\t') {
        return line.to_string();
    }
    let mut out = String::with_capacity(line.len() + TAB_WIDTH);
    let mut column = 0;
    for c in line.chars() {
        if c == '\t' {
            let pad = TAB_WIDTH - column % TAB_WIDTH;
            out.extend(std::iter::repeat(' ').take(pad));
            column += pad;
        } else {
            out.push(c);
            column += 1;
        }
    }
    out
}
