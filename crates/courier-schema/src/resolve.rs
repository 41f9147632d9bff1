//! # Convention-Based Schema Resolution
//!
//! Maps a provider identity to schema names and looks them up in the
//! registries. Name derivation is a pure function of `(code, type)`:
//!
//! | Namespace | Candidates, in priority order |
//! |-----------|-------------------------------|
//! | config    | `<Code><Type>Config`, `<Code><Type>` |
//! | request   | `<Code><Type>Request` |
//!
//! where `<Code>` and `<Type>` are the normalized parts. Lookups stop at
//! the first candidate present in the registry.
//!
//! Resolution never fails. A missing registry or a name miss both yield
//! `None`, which callers read as "no schema configured for this provider".

use courier_core::{schema_base_name, ProviderIdentity, ProviderType};

use crate::definition::SchemaDef;
use crate::doc::extract_doc;
use crate::registry::{config_registry, request_registry, RegistryKind, SchemaRegistry};

/// Suffix tried first for configuration schemas.
pub const CONFIG_SUFFIX: &str = "Config";

/// Suffix used for request schemas.
pub const REQUEST_SUFFIX: &str = "Request";

/// Candidate configuration-schema names for `(code, type)`, highest priority first.
pub fn config_schema_candidates(code: &str, provider_type: ProviderType) -> Vec<String> {
    let base = schema_base_name(code, provider_type);
    vec![format!("{base}{CONFIG_SUFFIX}"), base]
}

/// Candidate request-schema names for `(code, type)`.
pub fn request_schema_candidates(code: &str, provider_type: ProviderType) -> Vec<String> {
    let base = schema_base_name(code, provider_type);
    vec![format!("{base}{REQUEST_SUFFIX}")]
}

/// Resolves provider identities against a pair of registries.
///
/// The resolver only borrows its registries; it holds no state of its own,
/// so results depend on nothing but the identity and the registry contents.
#[derive(Debug, Clone, Copy)]
pub struct SchemaResolver<'r> {
    config: Option<&'r SchemaRegistry>,
    request: Option<&'r SchemaRegistry>,
}

impl SchemaResolver<'static> {
    /// A resolver over the process-wide registries.
    pub fn global() -> Self {
        Self {
            config: config_registry(),
            request: request_registry(),
        }
    }
}

impl<'r> SchemaResolver<'r> {
    /// A resolver over explicit registries. `None` marks a namespace unavailable.
    pub fn new(config: Option<&'r SchemaRegistry>, request: Option<&'r SchemaRegistry>) -> Self {
        Self { config, request }
    }

    /// Configuration schema for `identity`, or `None`.
    pub fn resolve_config(&self, identity: &ProviderIdentity) -> Option<&'r SchemaDef> {
        let candidates = config_schema_candidates(identity.code(), identity.provider_type());
        first_match(self.config, &candidates, RegistryKind::Config)
    }

    /// Request schema for `identity`, or `None`.
    pub fn resolve_request(&self, identity: &ProviderIdentity) -> Option<&'r SchemaDef> {
        let candidates = request_schema_candidates(identity.code(), identity.provider_type());
        first_match(self.request, &candidates, RegistryKind::Request)
    }

    /// Cleaned documentation of the configuration schema; empty when absent.
    pub fn config_doc(&self, identity: &ProviderIdentity) -> String {
        extract_doc(self.resolve_config(identity))
    }

    /// Cleaned documentation of the request schema; empty when absent.
    pub fn request_doc(&self, identity: &ProviderIdentity) -> String {
        extract_doc(self.resolve_request(identity))
    }
}

fn first_match<'r>(
    registry: Option<&'r SchemaRegistry>,
    candidates: &[String],
    kind: RegistryKind,
) -> Option<&'r SchemaDef> {
    let Some(registry) = registry else {
        tracing::debug!(%kind, "schema registry unavailable; treating as no schema");
        return None;
    };

    let found = candidates.iter().find_map(|name| registry.get(name));
    match found {
        Some(schema) => tracing::debug!(%kind, schema = schema.name(), "resolved schema"),
        None => tracing::debug!(%kind, ?candidates, "no schema matched"),
    }
    found
}

/// Resolve a configuration schema in the process-wide registry.
pub fn resolve_config_schema(code: &str, provider_type: ProviderType) -> Option<&'static SchemaDef> {
    let candidates = config_schema_candidates(code, provider_type);
    first_match(config_registry(), &candidates, RegistryKind::Config)
}

/// Resolve a request schema in the process-wide registry.
pub fn resolve_request_schema(code: &str, provider_type: ProviderType) -> Option<&'static SchemaDef> {
    let candidates = request_schema_candidates(code, provider_type);
    first_match(request_registry(), &candidates, RegistryKind::Request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::{FieldDef, FieldType};

    fn identity(code: &str, ty: ProviderType) -> ProviderIdentity {
        ProviderIdentity::new(code, ty).unwrap()
    }

    fn config_registry_with(names: &[&str]) -> SchemaRegistry {
        SchemaRegistry::from_schemas(
            RegistryKind::Config,
            names.iter().map(|n| {
                SchemaDef::new(*n).with_field(FieldDef::required("token", FieldType::String))
            }),
        )
        .unwrap()
    }

    #[test]
    fn test_candidate_order() {
        assert_eq!(
            config_schema_candidates("mailgun", ProviderType::Email),
            vec!["MailgunEmailConfig", "MailgunEmail"]
        );
        assert_eq!(
            request_schema_candidates("mailgun", ProviderType::Email),
            vec!["MailgunEmailRequest"]
        );
    }

    #[test]
    fn test_candidates_normalize_code() {
        assert_eq!(
            config_schema_candidates("amazon_ses", ProviderType::Email)[0],
            "AmazonSesEmailConfig"
        );
        assert_eq!(
            config_schema_candidates("amazon-ses", ProviderType::Email),
            config_schema_candidates("Amazon Ses", ProviderType::Email)
        );
    }

    #[test]
    fn test_suffixed_name_preferred() {
        let registry = config_registry_with(&["MailgunEmail", "MailgunEmailConfig"]);
        let resolver = SchemaResolver::new(Some(&registry), None);
        let found = resolver
            .resolve_config(&identity("mailgun", ProviderType::Email))
            .unwrap();
        assert_eq!(found.name(), "MailgunEmailConfig");
    }

    #[test]
    fn test_bare_name_fallback() {
        let registry = config_registry_with(&["MailgunEmail"]);
        let resolver = SchemaResolver::new(Some(&registry), None);
        let found = resolver
            .resolve_config(&identity("mailgun", ProviderType::Email))
            .unwrap();
        assert_eq!(found.name(), "MailgunEmail");
    }

    #[test]
    fn test_miss_is_none() {
        let registry = config_registry_with(&["MailgunEmail"]);
        let resolver = SchemaResolver::new(Some(&registry), None);
        assert!(resolver
            .resolve_config(&identity("mailgun", ProviderType::Sms))
            .is_none());
        assert!(resolver
            .resolve_config(&identity("sendgrid", ProviderType::Email))
            .is_none());
    }

    #[test]
    fn test_unavailable_registry_is_none() {
        let resolver = SchemaResolver::new(None, None);
        let id = identity("mailgun", ProviderType::Email);
        assert!(resolver.resolve_config(&id).is_none());
        assert!(resolver.resolve_request(&id).is_none());
        assert_eq!(resolver.config_doc(&id), "");
    }

    #[test]
    fn test_namespaces_are_disjoint() {
        // A config-shaped name in the request namespace is never found.
        let registry = config_registry_with(&["MailgunEmail"]);
        let resolver = SchemaResolver::new(None, Some(&registry));
        assert!(resolver
            .resolve_request(&identity("mailgun", ProviderType::Email))
            .is_none());
    }

    #[test]
    fn test_resolution_is_repeatable() {
        let registry = config_registry_with(&["MailgunEmail"]);
        let resolver = SchemaResolver::new(Some(&registry), None);
        let id = identity("mailgun", ProviderType::Email);
        let first = resolver.resolve_config(&id).map(SchemaDef::name);
        for _ in 0..10 {
            assert_eq!(resolver.resolve_config(&id).map(SchemaDef::name), first);
        }
    }

    #[test]
    fn test_global_resolution_uses_catalog() {
        let config = resolve_config_schema("mailgun", ProviderType::Email).unwrap();
        assert_eq!(config.name(), "MailgunEmail");
        let request = resolve_request_schema("mailgun", ProviderType::Email).unwrap();
        assert_eq!(request.name(), "MailgunEmailRequest");
        assert!(resolve_config_schema("mailgun", ProviderType::Push).is_none());
    }
}
