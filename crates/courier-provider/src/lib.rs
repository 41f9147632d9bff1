//! # courier-provider — Provider & Service Records
//!
//! The records operators manage, wired to the schema engine:
//!
//! - [`Provider`]: a named `(code, type)` identity. Its configuration and
//!   request schemas, and their documentation, are resolved on demand.
//! - [`Service`]: an API client bound to a provider. Its configuration map
//!   is validated against the provider's schema before it is saved, and a
//!   credential and expiry are issued on first save.
//! - [`documentation`]: documentation as sanitized HTML for an
//!   administrative page, with fixed fallback sentences.
//!
//! Persistence is not part of this crate. A store calls
//! [`Service::prepare_for_save`] and writes the record only on `Ok`.

pub mod documentation;
pub mod provider;
pub mod service;

pub use documentation::{
    schema_doc_summary, DocumentationView, NO_REQUEST_SCHEMA_DOCUMENTATION,
    NO_SCHEMA_DOCUMENTATION, SUMMARY_MAX_CHARS,
};
pub use provider::Provider;
pub use service::{SavePolicy, Service};
