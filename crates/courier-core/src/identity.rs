//! # Record Identifiers
//!
//! Newtype wrappers for the identifiers of persisted records. A
//! `ServiceId` cannot be passed where a `ProviderId` is expected, which
//! matters because a template optionally references a service and a
//! service references a provider.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a configured notification provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProviderId(pub Uuid);

/// Unique identifier for a service (an API client bound to a provider).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceId(pub Uuid);

/// Unique identifier for a message template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateId(pub Uuid);

macro_rules! uuid_id {
    ($ty:ident, $prefix:literal) => {
        impl $ty {
            /// Generate a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Access the inner UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, ":{}"), self.0)
            }
        }
    };
}

uuid_id!(ProviderId, "provider");
uuid_id!(ServiceId, "service");
uuid_id!(TemplateId, "template");
