//! # API Key Generation
//!
//! A key is `prefix` followed by random characters from [`KEY_ALPHABET`]
//! (ASCII letters and digits, so keys are URL-safe without escaping),
//! padded to exactly `total_length` characters.
//!
//! A `total_length` that leaves no room after the prefix is a
//! misconfiguration; the prefix alone is returned.

use rand::rngs::OsRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Default total key length, prefix included.
pub const DEFAULT_KEY_LENGTH: usize = 32;

/// Default key prefix.
pub const DEFAULT_KEY_PREFIX: &str = "svc_";

/// Characters the random suffix is drawn from.
pub const KEY_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generate a key of exactly `total_length` characters starting with `prefix`.
pub fn generate_api_key(total_length: usize, prefix: &str) -> String {
    let prefix_len = prefix.chars().count();
    if total_length <= prefix_len {
        tracing::warn!(
            total_length,
            prefix_len,
            "key length leaves no room for random characters; using prefix only"
        );
        return prefix.to_string();
    }

    let remaining = total_length - prefix_len;
    let mut rng = OsRng;
    let mut key = String::with_capacity(prefix.len() + remaining);
    key.push_str(prefix);
    key.extend((0..remaining).map(|_| KEY_ALPHABET[rng.gen_range(0..KEY_ALPHABET.len())] as char));

    tracing::debug!(length = total_length, "generated api key");
    key
}

/// A service API key.
///
/// Serializes as the plain string. `Debug` redacts everything after the
/// prefix so keys do not leak through logged records.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    /// A fresh key with the default length and prefix.
    pub fn generate() -> Self {
        Self(generate_api_key(DEFAULT_KEY_LENGTH, DEFAULT_KEY_PREFIX))
    }

    /// A fresh key with an explicit length and prefix.
    pub fn generate_with(total_length: usize, prefix: &str) -> Self {
        Self(generate_api_key(total_length, prefix))
    }

    /// Wrap an existing key value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// An unset key.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The key value. Callers are responsible for not logging it.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return f.write_str("ApiKey(<unset>)");
        }
        let visible: String = self.0.chars().take_while(|c| *c != '_').collect();
        if visible.len() < self.0.len() {
            write!(f, "ApiKey({visible}_...)")
        } else {
            f.write_str("ApiKey(...)")
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn exact_length_and_prefix(length in 0usize..128, prefix in "[a-z]{0,8}_?") {
            let key = generate_api_key(length, &prefix);
            prop_assert!(key.starts_with(&prefix));
            prop_assert_eq!(key.chars().count(), length.max(prefix.chars().count()));
            prop_assert!(key[prefix.len()..].bytes().all(|b| KEY_ALPHABET.contains(&b)));
        }
    }
}
