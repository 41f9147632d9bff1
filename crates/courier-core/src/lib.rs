//! # courier-core — Foundational Types for Provider Configuration
//!
//! Leaf crate of the workspace. Defines the provider identity used as the
//! key into schema resolution, the name normalizer that derives canonical
//! schema names from that identity, and the shared error hierarchy.
//!
//! ## Key Design Principles
//!
//! 1. **Closed provider taxonomy.** `ProviderType` is a single enum with
//!    exhaustive `match` everywhere. Adding a channel forces every consumer
//!    to handle it.
//!
//! 2. **Immutable identity.** `ProviderIdentity` exposes its `(code, type)`
//!    pair read-only. Nothing downstream can rewrite the key it resolves by.
//!
//! 3. **Total normalization.** [`normalize`] never fails; empty input maps
//!    to an empty string.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `courier-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod identity;
pub mod naming;
pub mod provider;

// Re-export primary types for ergonomic imports.
pub use error::CourierError;
pub use identity::{ProviderId, ServiceId, TemplateId};
pub use naming::normalize;
pub use provider::{schema_base_name, ProviderIdentity, ProviderType};
