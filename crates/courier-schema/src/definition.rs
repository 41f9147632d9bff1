//! # Schema Definitions
//!
//! Explicit, data-driven description of a provider record shape: an ordered
//! list of named fields, each with a declared type and an optional default.
//! A field without a default is required.
//!
//! Definitions are interpreted by the generic validator in
//! [`crate::validate`]; nothing here performs validation itself.

use serde::Serialize;
use serde_json::{json, Map, Value};

/// Declared type of a schema field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "of")]
pub enum FieldType {
    /// UTF-8 string.
    String,
    /// Whole number.
    Integer,
    /// Any JSON number.
    Number,
    /// `true` / `false`.
    Boolean,
    /// Homogeneous list.
    List(Box<FieldType>),
    /// Free-form key-value object.
    Object,
    /// Any JSON value.
    Any,
    /// The inner type, or `null`.
    Nullable(Box<FieldType>),
}

impl FieldType {
    /// `list[inner]`
    pub fn list_of(inner: FieldType) -> Self {
        Self::List(Box::new(inner))
    }

    /// `inner | null`
    pub fn nullable(inner: FieldType) -> Self {
        Self::Nullable(Box::new(inner))
    }

    /// JSON Schema fragment accepting exactly the values of this type.
    pub fn json_schema(&self) -> Value {
        match self {
            Self::String => json!({ "type": "string" }),
            Self::Integer => json!({ "type": "integer" }),
            Self::Number => json!({ "type": "number" }),
            Self::Boolean => json!({ "type": "boolean" }),
            Self::List(inner) => json!({ "type": "array", "items": inner.json_schema() }),
            Self::Object => json!({ "type": "object" }),
            Self::Any => json!({}),
            Self::Nullable(inner) => json!({ "anyOf": [inner.json_schema(), { "type": "null" }] }),
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String => f.write_str("string"),
            Self::Integer => f.write_str("integer"),
            Self::Number => f.write_str("number"),
            Self::Boolean => f.write_str("boolean"),
            Self::List(inner) => write!(f, "list<{inner}>"),
            Self::Object => f.write_str("object"),
            Self::Any => f.write_str("any"),
            Self::Nullable(inner) => write!(f, "{inner}?"),
        }
    }
}

/// A single named field of a schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDef {
    name: String,
    #[serde(rename = "type")]
    field_type: FieldType,
    #[serde(skip_serializing_if = "Option::is_none")]
    default: Option<Value>,
}

impl FieldDef {
    /// A field that must be present in every bound record.
    pub fn required(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            default: None,
        }
    }

    /// A field that takes `default` when the key is absent.
    pub fn with_default(name: impl Into<String>, field_type: FieldType, default: Value) -> Self {
        Self {
            name: name.into(),
            field_type,
            default: Some(default),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_type(&self) -> &FieldType {
        &self.field_type
    }

    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// A field is required exactly when it declares no default.
    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }
}

/// A named record definition with attached documentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaDef {
    name: String,
    description: String,
    fields: Vec<FieldDef>,
}

impl SchemaDef {
    /// An empty schema named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            fields: Vec::new(),
        }
    }

    /// Attach human-readable documentation (markdown, may be indented).
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append a field. A later field with the same name replaces the earlier one.
    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.fields.retain(|existing| existing.name != field.name);
        self.fields.push(field);
        self
    }

    /// Registry key of this schema, e.g. `MailgunEmail`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw attached documentation, as written.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Names of fields that have no default, in declaration order.
    pub fn required_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| f.is_required())
            .map(|f| f.name.as_str())
            .collect()
    }

    /// Compile this definition to a closed JSON Schema object.
    ///
    /// Undeclared keys are rejected (`additionalProperties: false`) and every
    /// field without a default is listed under `required`.
    pub fn json_schema(&self) -> Value {
        let mut properties = Map::new();
        for field in &self.fields {
            let mut property = field.field_type.json_schema();
            if let (Some(default), Some(obj)) = (&field.default, property.as_object_mut()) {
                obj.insert("default".to_string(), default.clone());
            }
            properties.insert(field.name.clone(), property);
        }

        json!({
            "title": self.name,
            "type": "object",
            "properties": properties,
            "required": self.required_fields(),
            "additionalProperties": false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SchemaDef {
        SchemaDef::new("AcmeSms")
            .with_description("Acme SMS gateway.")
            .with_field(FieldDef::required("token", FieldType::String))
            .with_field(FieldDef::with_default(
                "region",
                FieldType::nullable(FieldType::String),
                json!("eu"),
            ))
    }

    #[test]
    fn test_required_derived_from_default() {
        let schema = sample();
        assert_eq!(schema.required_fields(), vec!["token"]);
        assert!(schema.field("token").unwrap().is_required());
        assert!(!schema.field("region").unwrap().is_required());
    }

    #[test]
    fn test_json_schema_is_closed() {
        let compiled = sample().json_schema();
        assert_eq!(compiled["type"], "object");
        assert_eq!(compiled["additionalProperties"], false);
        assert_eq!(compiled["required"], json!(["token"]));
        assert_eq!(compiled["properties"]["token"]["type"], "string");
        assert_eq!(compiled["properties"]["region"]["default"], "eu");
    }

    #[test]
    fn test_nullable_schema_accepts_null_branch() {
        let fragment = FieldType::nullable(FieldType::Integer).json_schema();
        assert_eq!(fragment["anyOf"][1]["type"], "null");
    }

    #[test]
    fn test_duplicate_field_replaced() {
        let schema = sample().with_field(FieldDef::required("region", FieldType::String));
        assert_eq!(schema.fields().len(), 2);
        assert!(schema.field("region").unwrap().is_required());
    }

    #[test]
    fn test_field_type_display() {
        assert_eq!(FieldType::list_of(FieldType::String).to_string(), "list<string>");
        assert_eq!(
            FieldType::nullable(FieldType::list_of(FieldType::String)).to_string(),
            "list<string>?"
        );
    }
}
