//! # Schema Registries
//!
//! Two disjoint lookup namespaces keyed by derived schema name: one for
//! stored configuration shapes, one for outbound request payload shapes.
//!
//! ## Lifecycle
//!
//! The process-wide registries are written once, either explicitly through
//! [`install_registries`] during startup or lazily from the built-in
//! [`catalog`](crate::catalog) on first read. After that they are immutable
//! and shared across threads without locking.
//!
//! A deployment may install `None` for either namespace. Resolution against
//! an unavailable namespace yields "no schema", exactly like a name miss.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use thiserror::Error;

use crate::catalog;
use crate::definition::SchemaDef;

/// Which namespace a registry serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistryKind {
    /// Stored provider configuration shapes.
    Config,
    /// Outbound request payload shapes.
    Request,
}

impl RegistryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Config => "config",
            Self::Request => "request",
        }
    }
}

impl std::fmt::Display for RegistryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error raised while assembling or installing registries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Two schemas were registered under the same name.
    #[error("schema '{name}' is already registered in the {kind} registry")]
    DuplicateSchema {
        /// Namespace the collision happened in.
        kind: RegistryKind,
        /// Colliding schema name.
        name: String,
    },

    /// A registry was handed to the wrong namespace.
    #[error("a {actual} registry cannot be installed as the {expected} registry")]
    KindMismatch {
        /// Namespace being installed.
        expected: RegistryKind,
        /// Namespace the registry was built for.
        actual: RegistryKind,
    },

    /// The process-wide registries were already initialized.
    #[error("schema registries are already initialized")]
    AlreadyInitialized,
}

/// Name-indexed set of schema definitions for one namespace.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    kind: RegistryKind,
    schemas: BTreeMap<String, SchemaDef>,
}

impl SchemaRegistry {
    /// An empty registry for `kind`.
    pub fn new(kind: RegistryKind) -> Self {
        Self {
            kind,
            schemas: BTreeMap::new(),
        }
    }

    /// Build a registry from a list of schemas.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateSchema`] if two schemas share a name.
    pub fn from_schemas(
        kind: RegistryKind,
        schemas: impl IntoIterator<Item = SchemaDef>,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::new(kind);
        for schema in schemas {
            registry.register(schema)?;
        }
        Ok(registry)
    }

    /// Add a schema under its own name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateSchema`] if the name is taken.
    pub fn register(&mut self, schema: SchemaDef) -> Result<(), RegistryError> {
        if self.schemas.contains_key(schema.name()) {
            return Err(RegistryError::DuplicateSchema {
                kind: self.kind,
                name: schema.name().to_string(),
            });
        }
        self.schemas.insert(schema.name().to_string(), schema);
        Ok(())
    }

    pub fn kind(&self) -> RegistryKind {
        self.kind
    }

    /// Exact-name lookup.
    pub fn get(&self, name: &str) -> Option<&SchemaDef> {
        self.schemas.get(name)
    }

    /// Registered names, sorted alphabetically.
    pub fn names(&self) -> Vec<&str> {
        self.schemas.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

static CONFIG_SCHEMAS: OnceLock<Option<SchemaRegistry>> = OnceLock::new();
static REQUEST_SCHEMAS: OnceLock<Option<SchemaRegistry>> = OnceLock::new();

/// Install the process-wide registries. Call once, before the first lookup.
///
/// Passing `None` marks that namespace unavailable for the lifetime of the
/// process.
///
/// # Errors
///
/// Returns [`RegistryError::KindMismatch`] if a registry was built for the
/// other namespace, and [`RegistryError::AlreadyInitialized`] if either
/// namespace was already installed or read.
pub fn install_registries(
    config: Option<SchemaRegistry>,
    request: Option<SchemaRegistry>,
) -> Result<(), RegistryError> {
    check_kind(config.as_ref(), RegistryKind::Config)?;
    check_kind(request.as_ref(), RegistryKind::Request)?;

    if CONFIG_SCHEMAS.get().is_some() || REQUEST_SCHEMAS.get().is_some() {
        return Err(RegistryError::AlreadyInitialized);
    }

    let config_installed = CONFIG_SCHEMAS.set(config).is_ok();
    let request_installed = REQUEST_SCHEMAS.set(request).is_ok();
    if config_installed && request_installed {
        tracing::info!("schema registries installed");
        Ok(())
    } else {
        Err(RegistryError::AlreadyInitialized)
    }
}

fn check_kind(registry: Option<&SchemaRegistry>, expected: RegistryKind) -> Result<(), RegistryError> {
    match registry {
        Some(r) if r.kind() != expected => Err(RegistryError::KindMismatch {
            expected,
            actual: r.kind(),
        }),
        _ => Ok(()),
    }
}

/// The process-wide configuration-schema registry, if available.
pub fn config_registry() -> Option<&'static SchemaRegistry> {
    CONFIG_SCHEMAS
        .get_or_init(|| builtin(RegistryKind::Config, catalog::config_schemas()))
        .as_ref()
}

/// The process-wide request-schema registry, if available.
pub fn request_registry() -> Option<&'static SchemaRegistry> {
    REQUEST_SCHEMAS
        .get_or_init(|| builtin(RegistryKind::Request, catalog::request_schemas()))
        .as_ref()
}

fn builtin(
    kind: RegistryKind,
    built: Result<SchemaRegistry, RegistryError>,
) -> Option<SchemaRegistry> {
    match built {
        Ok(registry) => {
            tracing::debug!(%kind, schemas = registry.len(), "loaded built-in schema catalog");
            Some(registry)
        }
        Err(e) => {
            tracing::error!(%kind, error = %e, "built-in schema catalog is invalid; registry unavailable");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::{FieldDef, FieldType};

    #[test]
    fn test_register_and_get() {
        let mut registry = SchemaRegistry::new(RegistryKind::Config);
        registry
            .register(SchemaDef::new("AcmeSms").with_field(FieldDef::required("token", FieldType::String)))
            .unwrap();
        assert_eq!(registry.len(), 1);
        assert!(registry.get("AcmeSms").is_some());
        assert!(registry.get("acmesms").is_none());
    }

    #[test]
    fn test_duplicate_rejected() {
        let err = SchemaRegistry::from_schemas(
            RegistryKind::Request,
            [SchemaDef::new("X"), SchemaDef::new("X")],
        )
        .unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateSchema {
                kind: RegistryKind::Request,
                name: "X".to_string()
            }
        );
    }

    #[test]
    fn test_names_sorted() {
        let registry = SchemaRegistry::from_schemas(
            RegistryKind::Config,
            [SchemaDef::new("Zeta"), SchemaDef::new("Alpha"), SchemaDef::new("Mid")],
        )
        .unwrap();
        assert_eq!(registry.names(), vec!["Alpha", "Mid", "Zeta"]);
    }

    #[test]
    fn test_kind_mismatch_rejected_before_install() {
        let wrong = SchemaRegistry::new(RegistryKind::Request);
        let err = install_registries(Some(wrong), None).unwrap_err();
        assert!(matches!(err, RegistryError::KindMismatch { .. }));
    }

    #[test]
    fn test_global_registries_serve_builtin_catalog() {
        let config = config_registry().expect("built-in config catalog");
        assert_eq!(config.kind(), RegistryKind::Config);
        assert!(config.get("MailgunEmail").is_some());

        let request = request_registry().expect("built-in request catalog");
        assert!(request.get("MailgunEmailRequest").is_some());

        // Registries are sealed once read.
        assert_eq!(
            install_registries(None, None),
            Err(RegistryError::AlreadyInitialized)
        );
    }
}
