//! # courier-template — Message Templates
//!
//! A template body is free text with `{{ identifier }}` substitution
//! points. This crate finds those points ([`extract_placeholders`]) and
//! defines the [`Template`] record, whose placeholder list is derived from
//! its body on every write and on every load.
//!
//! Extraction is total: malformed braces yield no placeholders rather than
//! an error, so saving a template never fails on account of its body.

pub mod placeholder;
pub mod template;

pub use placeholder::extract_placeholders;
pub use template::Template;
