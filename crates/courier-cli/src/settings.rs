//! # CLI Settings
//!
//! Optional YAML file passed with `--config`. Every key has a default, so
//! an absent file and an empty file behave the same. Unknown keys are
//! rejected to catch typos.
//!
//! ```yaml
//! credentials:
//!   length: 40
//!   prefix: "ntf_"
//! markdown:
//!   extensions: [extra, sane_lists, strikethrough]
//!   allowed_tags: [p, a, strong, em, del]
//!   allowed_attrs:
//!     a: [href]
//! service:
//!   key_validity_days: 90
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use courier_crypto::{DEFAULT_KEY_LENGTH, DEFAULT_KEY_PREFIX};
use courier_provider::SavePolicy;
use courier_render::{MarkdownExtension, MarkdownRenderer};
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub credentials: CredentialSettings,
    pub markdown: MarkdownSettings,
    pub service: ServiceSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CredentialSettings {
    pub length: usize,
    pub prefix: String,
}

impl Default for CredentialSettings {
    fn default() -> Self {
        Self {
            length: DEFAULT_KEY_LENGTH,
            prefix: DEFAULT_KEY_PREFIX.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkdownSettings {
    pub extensions: Vec<String>,
    pub allowed_tags: Option<Vec<String>>,
    pub allowed_attrs: Option<BTreeMap<String, Vec<String>>>,
}

impl Default for MarkdownSettings {
    fn default() -> Self {
        Self {
            extensions: courier_render::DEFAULT_EXTENSIONS
                .iter()
                .map(|e| e.as_str().to_string())
                .collect(),
            allowed_tags: None,
            allowed_attrs: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceSettings {
    pub key_validity_days: u32,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            key_validity_days: SavePolicy::default().key_validity_days,
        }
    }
}

impl Settings {
    /// Load settings from `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings: {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("invalid settings: {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Renderer configured from the `markdown` section.
    pub fn renderer(&self) -> Result<MarkdownRenderer> {
        let extensions = self
            .markdown
            .extensions
            .iter()
            .map(|name| name.parse::<MarkdownExtension>())
            .collect::<Result<Vec<_>, _>>()?;

        let mut renderer = MarkdownRenderer::new().with_extensions(extensions);
        if let Some(tags) = &self.markdown.allowed_tags {
            renderer = renderer.with_allowed_tags(tags.iter().cloned());
        }
        if let Some(attrs) = &self.markdown.allowed_attrs {
            renderer = renderer.with_allowed_attrs(attrs.clone());
        }
        Ok(renderer)
    }

    /// Credential policy applied when services are saved.
    pub fn save_policy(&self) -> SavePolicy {
        SavePolicy {
            key_length: self.credentials.length,
            key_prefix: self.credentials.prefix.clone(),
            key_validity_days: self.service.key_validity_days,
        }
    }
}
