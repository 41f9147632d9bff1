//! # Service Records
//!
//! A service is an API client of the notification engine, bound to one
//! provider, carrying the provider configuration it sends with.
//!
//! ## Save Contract
//!
//! [`Service::prepare_for_save`] is the only path to a storable record:
//!
//! 1. The configuration map is validated against the provider's schema.
//!    On failure the field-scoped error is returned and the record is left
//!    exactly as it was.
//! 2. An empty API key is replaced by a freshly generated one.
//! 3. A missing key expiry is set to `now + key_validity_days`.
//!
//! The configuration map itself is never rewritten. Defaults declared by
//! the schema are applied only when the map is bound for use.

use chrono::{DateTime, Duration, Utc};
use courier_core::ServiceId;
use courier_crypto::{ApiKey, DEFAULT_KEY_LENGTH, DEFAULT_KEY_PREFIX};
use courier_schema::{ConfigMap, FieldValidationError, SchemaResolver};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::provider::Provider;

/// Days a newly issued key stays valid unless configured otherwise.
pub const DEFAULT_KEY_VALIDITY_DAYS: u32 = 365;

/// Credential parameters applied when a service is saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavePolicy {
    pub key_length: usize,
    pub key_prefix: String,
    pub key_validity_days: u32,
}

impl Default for SavePolicy {
    fn default() -> Self {
        Self {
            key_length: DEFAULT_KEY_LENGTH,
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            key_validity_days: DEFAULT_KEY_VALIDITY_DAYS,
        }
    }
}

impl SavePolicy {
    fn expiry_from(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        Duration::try_days(i64::from(self.key_validity_days))
            .and_then(|validity| now.checked_add_signed(validity))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

/// An application that sends notifications through a provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    pub provider: Provider,
    #[serde(default)]
    pub api_key: ApiKey,
    #[serde(default)]
    pub api_expires_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub config: ConfigMap,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl Service {
    /// An enabled service with no key, no expiry and an empty configuration.
    pub fn new(name: impl Into<String>, provider: Provider) -> Self {
        Self {
            id: ServiceId::new(),
            name: name.into(),
            provider,
            api_key: ApiKey::default(),
            api_expires_on: None,
            config: ConfigMap::new(),
            enabled: true,
        }
    }

    pub fn with_config(mut self, config: ConfigMap) -> Self {
        self.config = config;
        self
    }

    /// Validate the configuration map against the provider's schema.
    ///
    /// # Errors
    ///
    /// A [`FieldValidationError`] on the `config` field naming the provider
    /// code.
    pub fn clean(&self, resolver: &SchemaResolver<'_>) -> Result<(), FieldValidationError> {
        self.provider.validate_config(resolver, &self.config)
    }

    /// Validate, then fill in the key and expiry if they are unset.
    ///
    /// # Errors
    ///
    /// Same as [`Service::clean`]. No field is modified on error.
    pub fn prepare_for_save(
        &mut self,
        resolver: &SchemaResolver<'_>,
        policy: &SavePolicy,
        now: DateTime<Utc>,
    ) -> Result<(), FieldValidationError> {
        self.clean(resolver)?;

        if self.api_key.is_empty() {
            self.api_key = ApiKey::generate_with(policy.key_length, &policy.key_prefix);
            tracing::info!(service = %self.id, "issued api key");
        }
        if self.api_expires_on.is_none() {
            self.api_expires_on = Some(policy.expiry_from(now));
        }
        Ok(())
    }

    /// Configuration with schema defaults applied, for use by a sender.
    pub fn bound_config(
        &self,
        resolver: &SchemaResolver<'_>,
    ) -> Result<ConfigMap, FieldValidationError> {
        self.provider.bind_config(resolver, &self.config)
    }

    /// Check an outbound payload against the provider's request schema.
    pub fn validate_request(
        &self,
        resolver: &SchemaResolver<'_>,
        payload: &Value,
    ) -> Result<(), FieldValidationError> {
        self.provider.validate_request(resolver, payload)
    }

    /// Whether the key has passed its expiry at `now`. A key with no expiry
    /// never expires.
    pub fn is_key_expired(&self, now: DateTime<Utc>) -> bool {
        self.api_expires_on.is_some_and(|expires| expires <= now)
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
