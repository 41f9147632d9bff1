//! # Error Types
//!
//! Errors raised while constructing provider identities. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - A missing schema is not an error anywhere in the workspace. It is
//!   modelled as `None` and never reaches these types.
//! - Configuration validation errors are field-scoped and live in
//!   `courier-schema` (`FieldValidationError`), next to the validator.

use thiserror::Error;

/// Top-level error type for provider identity handling.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CourierError {
    /// A provider type string did not name a known channel.
    #[error("unknown provider type: {0:?}")]
    UnknownProviderType(String),

    /// A provider code was empty or whitespace-only.
    #[error("provider code must not be empty")]
    EmptyProviderCode,
}
