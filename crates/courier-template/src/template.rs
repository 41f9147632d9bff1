//! The template record.

use courier_core::{ServiceId, TemplateId};
use serde::{Deserialize, Serialize};

use crate::placeholder::extract_placeholders;

/// A message template.
///
/// `placeholders` is never set directly. It is recomputed from `body` by
/// [`Template::new`], [`Template::set_body`] and deserialization, so a
/// stored list that disagrees with the stored body is corrected on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TemplateRecord")]
pub struct Template {
    id: TemplateId,
    pub title: String,
    pub subject: String,
    pub service_id: Option<ServiceId>,
    body: String,
    placeholders: Vec<String>,
    pub version: u32,
    pub enabled: bool,
}

/// Wire form of [`Template`]. Any stored `placeholders` value is discarded.
#[derive(Deserialize)]
struct TemplateRecord {
    #[serde(default)]
    id: Option<TemplateId>,
    title: String,
    subject: String,
    #[serde(default)]
    service_id: Option<ServiceId>,
    #[serde(default)]
    body: String,
    #[serde(default = "default_version")]
    version: u32,
    #[serde(default = "default_enabled")]
    enabled: bool,
}

fn default_version() -> u32 {
    1
}

fn default_enabled() -> bool {
    true
}

impl From<TemplateRecord> for Template {
    fn from(record: TemplateRecord) -> Self {
        let placeholders = extract_placeholders(&record.body);
        Self {
            id: record.id.unwrap_or_default(),
            title: record.title,
            subject: record.subject,
            service_id: record.service_id,
            body: record.body,
            placeholders,
            version: record.version,
            enabled: record.enabled,
        }
    }
}

impl Template {
    /// A new enabled, version 1 template not attached to any service.
    pub fn new(
        title: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        let body = body.into();
        Self {
            id: TemplateId::new(),
            title: title.into(),
            subject: subject.into(),
            service_id: None,
            placeholders: extract_placeholders(&body),
            body,
            version: default_version(),
            enabled: default_enabled(),
        }
    }

    /// Attach the template to a service.
    pub fn for_service(mut self, service_id: ServiceId) -> Self {
        self.service_id = Some(service_id);
        self
    }

    pub fn id(&self) -> TemplateId {
        self.id
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Distinct placeholder names of the body, in first-seen order.
    pub fn placeholders(&self) -> &[String] {
        &self.placeholders
    }

    /// Replace the body and recompute the placeholders.
    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
        self.placeholders = extract_placeholders(&self.body);
        tracing::debug!(
            template = %self.id,
            placeholders = self.placeholders.len(),
            "template body updated"
        );
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} v{}", self.title, self.version)
    }
}
