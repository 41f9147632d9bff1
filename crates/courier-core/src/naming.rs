//! # Name Normalization
//!
//! Converts free-form identifiers (`mail_gun`, `mail-gun`, `Mail Gun`) to
//! the capitalized-concatenation form used for schema names (`MailGun`).
//!
//! Splits on runs of `_`, `-` and whitespace. Each non-empty segment keeps
//! its first character uppercased and the rest lowercased.

/// Normalize an identifier to its canonical capitalized-concatenation form.
///
/// Empty or separator-only input yields an empty string.
///
/// ```
/// use courier_core::normalize;
///
/// assert_eq!(normalize("mail_gun"), "MailGun");
/// assert_eq!(normalize("mailgun"), "Mailgun");
/// assert_eq!(normalize("  "), "");
/// ```
pub fn normalize(value: &str) -> String {
    value
        .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|segment| !segment.is_empty())
        .map(capitalize)
        .collect()
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
