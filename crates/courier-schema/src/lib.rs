//! # courier-schema — Schema Resolution & Configuration Validation
//!
//! Binds a provider identity `(code, type)` to a configuration schema and a
//! request schema purely by naming convention, extracts schema
//! documentation, and validates untyped configuration maps against the
//! resolved schema.
//!
//! ## Resolution (`resolve`)
//!
//! The base name is `normalize(code) + normalize(type)`. Configuration
//! schemas are looked up as `<Base>Config`, then `<Base>`. Request schemas
//! are looked up as `<Base>Request`. The first hit wins; a miss is `None`,
//! never an error.
//!
//! ## Registries (`registry`)
//!
//! Two disjoint, process-wide registries (configuration, request) are
//! initialized once at startup and read without synchronization for the
//! rest of the process. The built-in [`catalog`] populates them unless the
//! embedding process installs its own first.
//!
//! ## Validation (`validate`)
//!
//! Each [`SchemaDef`] compiles to a closed JSON Schema object and is checked
//! with the `jsonschema` crate. Any violation is reported as one error on
//! the `config` field naming the provider code, with the individual
//! violations attached for diagnostics.
//!
//! ## Crate Policy
//!
//! - Depends only on `courier-core` internally.
//! - A missing schema or an unavailable registry is never an error.
//! - Validation never mutates the map under test.

pub mod catalog;
pub mod definition;
pub mod doc;
pub mod registry;
pub mod resolve;
pub mod validate;

pub use definition::{FieldDef, FieldType, SchemaDef};
pub use doc::{clean_doc, extract_doc};
pub use registry::{
    config_registry, install_registries, request_registry, RegistryError, RegistryKind,
    SchemaRegistry,
};
pub use resolve::{
    config_schema_candidates, request_schema_candidates, resolve_config_schema,
    resolve_request_schema, SchemaResolver,
};
pub use validate::{
    bind_config, check_document, validate_config, validate_request, ConfigMap,
    FieldValidationError, Violation, CONFIG_FIELD, PAYLOAD_FIELD,
};
