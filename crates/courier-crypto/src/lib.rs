//! # courier-crypto — Service Credentials
//!
//! Generates the API keys that services authenticate with.
//!
//! ## Security Invariant
//!
//! - Every random character comes from `rand::rngs::OsRng`. There is no
//!   seedable or thread-local generator on this path.
//! - Keys are never logged. [`ApiKey`]'s `Debug` shows only the prefix.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `courier-*` crates.
//! - No mocking of randomness in tests; uniqueness is checked by sampling.

pub mod credential;

pub use credential::{generate_api_key, ApiKey, DEFAULT_KEY_LENGTH, DEFAULT_KEY_PREFIX, KEY_ALPHABET};
