//! The provider record.

use courier_core::{ProviderId, ProviderIdentity, ProviderType};
use courier_schema::{
    bind_config, extract_doc, validate_config, validate_request, ConfigMap, FieldValidationError,
    SchemaDef, SchemaResolver,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An outbound notification provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    pub id: ProviderId,
    pub name: String,
    #[serde(flatten)]
    identity: ProviderIdentity,
}

impl Provider {
    pub fn new(name: impl Into<String>, identity: ProviderIdentity) -> Self {
        Self {
            id: ProviderId::new(),
            name: name.into(),
            identity,
        }
    }

    pub fn identity(&self) -> &ProviderIdentity {
        &self.identity
    }

    pub fn code(&self) -> &str {
        self.identity.code()
    }

    pub fn provider_type(&self) -> ProviderType {
        self.identity.provider_type()
    }

    pub fn config_schema<'r>(&self, resolver: &SchemaResolver<'r>) -> Option<&'r SchemaDef> {
        resolver.resolve_config(&self.identity)
    }

    pub fn request_schema<'r>(&self, resolver: &SchemaResolver<'r>) -> Option<&'r SchemaDef> {
        resolver.resolve_request(&self.identity)
    }

    /// Cleaned configuration schema documentation; empty when there is none.
    pub fn schema_doc(&self, resolver: &SchemaResolver<'_>) -> String {
        extract_doc(self.config_schema(resolver))
    }

    /// Cleaned request schema documentation; empty when there is none.
    pub fn request_schema_doc(&self, resolver: &SchemaResolver<'_>) -> String {
        extract_doc(self.request_schema(resolver))
    }

    /// Check `config` against this provider's configuration schema.
    /// Succeeds when the provider has no schema.
    pub fn validate_config(
        &self,
        resolver: &SchemaResolver<'_>,
        config: &ConfigMap,
    ) -> Result<(), FieldValidationError> {
        validate_config(&self.identity, self.config_schema(resolver), config)
    }

    /// The validated configuration with schema defaults filled in. Without a
    /// schema the map is returned as given.
    pub fn bind_config(
        &self,
        resolver: &SchemaResolver<'_>,
        config: &ConfigMap,
    ) -> Result<ConfigMap, FieldValidationError> {
        match self.config_schema(resolver) {
            Some(schema) => bind_config(&self.identity, schema, config),
            None => Ok(config.clone()),
        }
    }

    /// Check an outbound payload against this provider's request schema.
    pub fn validate_request(
        &self,
        resolver: &SchemaResolver<'_>,
        payload: &Value,
    ) -> Result<(), FieldValidationError> {
        validate_request(&self.identity, self.request_schema(resolver), payload)
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.provider_type().label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mailgun() -> Provider {
        Provider::new(
            "Mailgun",
            ProviderIdentity::new("mailgun", ProviderType::Email).unwrap(),
        )
    }

    #[test]
    fn test_display_uses_type_label() {
        assert_eq!(mailgun().to_string(), "Mailgun (Email)");
        let push = Provider::new(
            "Firebase",
            ProviderIdentity::new("fcm", ProviderType::Push).unwrap(),
        );
        assert_eq!(push.to_string(), "Firebase (Push Notification)");
    }

    #[test]
    fn test_schemas_resolved_from_catalog() {
        let resolver = SchemaResolver::global();
        let provider = mailgun();
        assert_eq!(provider.config_schema(&resolver).unwrap().name(), "MailgunEmail");
        assert_eq!(
            provider.request_schema(&resolver).unwrap().name(),
            "MailgunEmailRequest"
        );
        assert!(provider.schema_doc(&resolver).starts_with("# Mailgun"));
    }

    #[test]
    fn test_unknown_provider_has_no_docs_and_accepts_any_config() {
        let resolver = SchemaResolver::global();
        let provider = Provider::new(
            "Twilio",
            ProviderIdentity::new("twilio", ProviderType::Sms).unwrap(),
        );
        assert_eq!(provider.schema_doc(&resolver), "");
        assert_eq!(provider.request_schema_doc(&resolver), "");
        let config = json!({ "sid": "x" }).as_object().cloned().unwrap();
        provider.validate_config(&resolver, &config).unwrap();
        assert_eq!(provider.bind_config(&resolver, &config).unwrap(), config);
    }

    #[test]
    fn test_bind_config_fills_defaults() {
        let resolver = SchemaResolver::global();
        let config = json!({ "api_key": "key" }).as_object().cloned().unwrap();
        let bound = mailgun().bind_config(&resolver, &config).unwrap();
        assert_eq!(bound["username"], "api");
    }

    #[test]
    fn test_serde_flattens_identity() {
        let provider = mailgun();
        let value = serde_json::to_value(&provider).unwrap();
        assert_eq!(value["code"], "mailgun");
        assert_eq!(value["type"], "email");
        let back: Provider = serde_json::from_value(value).unwrap();
        assert_eq!(back, provider);
    }

    #[test]
    fn test_serde_rejects_blank_code() {
        let value = json!({
            "id": ProviderId::new(),
            "name": "Broken",
            "code": "  ",
            "type": "email"
        });
        assert!(serde_json::from_value::<Provider>(value).is_err());
    }
}
