//! # Provider Identity
//!
//! A provider is identified by the pair `(code, type)`. The pair is the
//! only key into schema resolution: the engine reads it and never rewrites
//! it.
//!
//! ## Security Invariant
//!
//! `ProviderIdentity` exposes its fields through accessors only, so a
//! resolved schema cannot be swapped by mutating the identity after the
//! record that owns it was validated.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CourierError;
use crate::naming::normalize;

/// Delivery channel of an outbound notification provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderType {
    /// Email delivery (SMTP relays, transactional email APIs).
    Email,
    /// SMS delivery.
    Sms,
    /// Mobile push notifications.
    Push,
}

impl ProviderType {
    /// Returns all provider types in canonical order.
    pub fn all() -> &'static [ProviderType] {
        &[Self::Email, Self::Sms, Self::Push]
    }

    /// Returns the lowercase identifier stored with provider records.
    ///
    /// This must match the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Sms => "sms",
            Self::Push => "push",
        }
    }

    /// Human-readable label for administrative listings.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Sms => "SMS",
            Self::Push => "Push Notification",
        }
    }
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderType {
    type Err = CourierError;

    /// Parse a provider type from its lowercase identifier.
    ///
    /// Accepts the same identifiers produced by [`ProviderType::as_str()`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(Self::Email),
            "sms" => Ok(Self::Sms),
            "push" => Ok(Self::Push),
            other => Err(CourierError::UnknownProviderType(other.to_string())),
        }
    }
}

/// Immutable `(code, type)` pair identifying a provider.
///
/// `code` is a globally unique slug such as `mailgun` or `amazon-ses`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawIdentity")]
pub struct ProviderIdentity {
    code: String,
    #[serde(rename = "type")]
    provider_type: ProviderType,
}

#[derive(Deserialize)]
struct RawIdentity {
    code: String,
    #[serde(rename = "type")]
    provider_type: ProviderType,
}

impl TryFrom<RawIdentity> for ProviderIdentity {
    type Error = CourierError;

    fn try_from(raw: RawIdentity) -> Result<Self, Self::Error> {
        Self::new(raw.code, raw.provider_type)
    }
}

impl ProviderIdentity {
    /// Build an identity from a provider code and channel.
    ///
    /// # Errors
    ///
    /// Returns [`CourierError::EmptyProviderCode`] if `code` is empty or
    /// whitespace-only.
    pub fn new(code: impl Into<String>, provider_type: ProviderType) -> Result<Self, CourierError> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(CourierError::EmptyProviderCode);
        }
        Ok(Self {
            code,
            provider_type,
        })
    }

    /// The provider code exactly as registered.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The delivery channel.
    pub fn provider_type(&self) -> ProviderType {
        self.provider_type
    }

    /// Normalized `code` followed by normalized `type`, e.g. `MailgunEmail`.
    ///
    /// Schema names are derived from this base by suffixing.
    pub fn schema_base_name(&self) -> String {
        schema_base_name(&self.code, self.provider_type)
    }
}

/// `normalize(code) + normalize(type)`, the stem of every derived schema name.
pub fn schema_base_name(code: &str, provider_type: ProviderType) -> String {
    let mut base = normalize(code);
    base.push_str(&normalize(provider_type.as_str()));
    base
}

impl std::fmt::Display for ProviderIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.code, self.provider_type.label())
    }
}
