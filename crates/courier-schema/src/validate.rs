//! # Configuration Validation
//!
//! Structural validation of untyped key-value maps against a resolved
//! [`SchemaDef`]. The definition is compiled to a closed JSON Schema object
//! (see [`SchemaDef::json_schema`]) and checked with the `jsonschema` crate
//! (Draft 2020-12).
//!
//! A map binds to a schema when:
//!
//! - every field without a default is present;
//! - no key outside the declared fields is present;
//! - every value matches its declared type.
//!
//! ## Error Contract
//!
//! Any failure is reported as one [`FieldValidationError`] scoped to the
//! whole `config` field, carrying a single message that names the provider
//! code. Individual violations ride along for logs and tooling. Validation
//! only reads the map; the caller's record is never touched.
//!
//! With no resolved schema, validation succeeds: configuration of an
//! undeclared shape is permitted.

use std::fmt;

use courier_core::ProviderIdentity;
use jsonschema::Validator;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::definition::SchemaDef;

/// Untyped configuration map as supplied by an operator.
pub type ConfigMap = Map<String, Value>;

/// Field that configuration errors are attached to.
pub const CONFIG_FIELD: &str = "config";

/// Field that request payload errors are attached to.
pub const PAYLOAD_FIELD: &str = "payload";

/// A single structural violation with its location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON Pointer to the offending value in the instance.
    pub instance_path: String,
    /// JSON Pointer to the schema keyword that rejected it.
    pub schema_path: String,
    /// Human-readable description.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.instance_path, self.message)
        }
    }
}

/// Validation failure scoped to one field of the caller's record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {}", .messages.join("; "))]
pub struct FieldValidationError {
    /// Record field the error belongs to (`config` or `payload`).
    pub field: String,
    /// User-facing messages for that field.
    pub messages: Vec<String>,
    /// Underlying structural violations, for diagnostics only.
    pub violations: Vec<Violation>,
}

impl FieldValidationError {
    fn for_config(provider: &ProviderIdentity, violations: Vec<Violation>) -> Self {
        Self {
            field: CONFIG_FIELD.to_string(),
            messages: vec![format!(
                "Invalid configuration for provider '{}'",
                provider.code()
            )],
            violations,
        }
    }

    fn for_payload(provider: &ProviderIdentity, violations: Vec<Violation>) -> Self {
        Self {
            field: PAYLOAD_FIELD.to_string(),
            messages: vec![format!(
                "Invalid request payload for provider '{}'",
                provider.code()
            )],
            violations,
        }
    }
}

fn build_validator(schema: &SchemaDef) -> Result<Validator, Violation> {
    let mut opts = jsonschema::options();
    opts.with_draft(jsonschema::Draft::Draft202012);
    opts.build(&schema.json_schema()).map_err(|e| Violation {
        instance_path: String::new(),
        schema_path: String::new(),
        message: format!("schema '{}' could not be compiled: {e}", schema.name()),
    })
}

/// Check `instance` against `schema` and return every violation found.
///
/// An empty vector means the instance binds.
pub fn check_document(schema: &SchemaDef, instance: &Value) -> Vec<Violation> {
    let validator = match build_validator(schema) {
        Ok(v) => v,
        Err(violation) => return vec![violation],
    };

    validator
        .iter_errors(instance)
        .map(|e| Violation {
            instance_path: e.instance_path.to_string(),
            schema_path: e.schema_path.to_string(),
            message: e.to_string(),
        })
        .collect()
}

/// Validate a provider configuration map.
///
/// # Errors
///
/// Returns a [`FieldValidationError`] on the `config` field when `schema` is
/// present and `config` does not bind to it.
pub fn validate_config(
    provider: &ProviderIdentity,
    schema: Option<&SchemaDef>,
    config: &ConfigMap,
) -> Result<(), FieldValidationError> {
    let Some(schema) = schema else {
        tracing::debug!(provider = provider.code(), "no configuration schema; accepting as-is");
        return Ok(());
    };

    let violations = check_document(schema, &Value::Object(config.clone()));
    if violations.is_empty() {
        tracing::debug!(provider = provider.code(), schema = schema.name(), "configuration valid");
        return Ok(());
    }

    tracing::warn!(
        provider = provider.code(),
        schema = schema.name(),
        violations = violations.len(),
        "configuration rejected"
    );
    Err(FieldValidationError::for_config(provider, violations))
}

/// Validate `config` and return the bound record with declared defaults
/// filled in for absent keys.
///
/// The input map is not modified.
///
/// # Errors
///
/// Same as [`validate_config`].
pub fn bind_config(
    provider: &ProviderIdentity,
    schema: &SchemaDef,
    config: &ConfigMap,
) -> Result<ConfigMap, FieldValidationError> {
    validate_config(provider, Some(schema), config)?;

    let mut bound = config.clone();
    for field in schema.fields() {
        if let Some(default) = field.default() {
            bound
                .entry(field.name().to_string())
                .or_insert_with(|| default.clone());
        }
    }
    Ok(bound)
}

/// Validate an outbound request payload against the provider's request schema.
///
/// # Errors
///
/// Returns a [`FieldValidationError`] on the `payload` field when `schema` is
/// present and `payload` does not bind to it.
pub fn validate_request(
    provider: &ProviderIdentity,
    schema: Option<&SchemaDef>,
    payload: &Value,
) -> Result<(), FieldValidationError> {
    let Some(schema) = schema else {
        return Ok(());
    };

    let violations = check_document(schema, payload);
    if violations.is_empty() {
        Ok(())
    } else {
        tracing::warn!(
            provider = provider.code(),
            schema = schema.name(),
            violations = violations.len(),
            "request payload rejected"
        );
        Err(FieldValidationError::for_payload(provider, violations))
    }
}
