//! # Schema Subcommand
//!
//! Inspection of the schema registries and of what a given provider
//! resolves to.
//!
//! ```bash
//! courier schema list
//! courier schema list --request
//! courier schema show --code mailgun --type email
//! courier schema doc --code mailgun --type email --html
//! ```

use anyhow::Result;
use clap::{Args, Subcommand};
use courier_core::{ProviderIdentity, ProviderType};
use courier_provider::{
    DocumentationView, Provider, NO_REQUEST_SCHEMA_DOCUMENTATION, NO_SCHEMA_DOCUMENTATION,
};
use courier_schema::{config_registry, request_registry, RegistryKind, SchemaDef, SchemaResolver};

use crate::settings::Settings;

#[derive(Args, Debug)]
pub struct SchemaArgs {
    #[command(subcommand)]
    pub command: SchemaCommand,
}

#[derive(Subcommand, Debug)]
pub enum SchemaCommand {
    /// List registered schema names.
    List {
        /// List request schemas instead of configuration schemas.
        #[arg(long)]
        request: bool,
    },

    /// Show the schema a provider resolves to.
    Show {
        #[command(flatten)]
        provider: ProviderArgs,

        /// Resolve the request schema instead of the configuration schema.
        #[arg(long)]
        request: bool,
    },

    /// Print a provider's schema documentation.
    Doc {
        #[command(flatten)]
        provider: ProviderArgs,

        /// Document the request schema instead of the configuration schema.
        #[arg(long)]
        request: bool,

        /// Render to sanitized HTML instead of printing markdown.
        #[arg(long)]
        html: bool,
    },
}

/// Provider identity flags shared by several subcommands.
#[derive(Args, Debug, Clone)]
pub struct ProviderArgs {
    /// Provider code, e.g. `mailgun`.
    #[arg(long)]
    pub code: String,

    /// Provider type: `email`, `sms` or `push`.
    #[arg(long = "type", value_name = "TYPE")]
    pub provider_type: ProviderType,
}

impl ProviderArgs {
    pub fn identity(&self) -> Result<ProviderIdentity> {
        Ok(ProviderIdentity::new(self.code.clone(), self.provider_type)?)
    }

    /// A transient provider record named after its code.
    pub fn provider(&self) -> Result<Provider> {
        Ok(Provider::new(self.code.clone(), self.identity()?))
    }
}

pub fn run_schema(args: &SchemaArgs, settings: &Settings) -> Result<u8> {
    let resolver = SchemaResolver::global();
    match &args.command {
        SchemaCommand::List { request } => {
            let (kind, registry) = if *request {
                (RegistryKind::Request, request_registry())
            } else {
                (RegistryKind::Config, config_registry())
            };
            match registry {
                Some(registry) => {
                    for name in registry.names() {
                        println!("{name}");
                    }
                }
                None => tracing::warn!(%kind, "schema registry unavailable"),
            }
            Ok(0)
        }
        SchemaCommand::Show { provider, request } => {
            let identity = provider.identity()?;
            let schema = if *request {
                resolver.resolve_request(&identity)
            } else {
                resolver.resolve_config(&identity)
            };
            match schema {
                Some(schema) => print!("{}", format_schema(schema)),
                None => println!("no schema configured for {identity}"),
            }
            Ok(0)
        }
        SchemaCommand::Doc {
            provider,
            request,
            html,
        } => {
            let provider = provider.provider()?;
            let output = if *html {
                let view = DocumentationView::new(resolver).with_renderer(settings.renderer()?);
                if *request {
                    view.request_schema_documentation(&provider)
                } else {
                    view.schema_documentation(&provider)
                }
            } else {
                let (doc, fallback) = if *request {
                    (provider.request_schema_doc(&resolver), NO_REQUEST_SCHEMA_DOCUMENTATION)
                } else {
                    (provider.schema_doc(&resolver), NO_SCHEMA_DOCUMENTATION)
                };
                if doc.is_empty() {
                    fallback.to_string()
                } else {
                    doc
                }
            };
            println!("{}", output.trim_end());
            Ok(0)
        }
    }
}

/// Schema name followed by one aligned line per field:
/// name, type, and `required` or the default value.
pub fn format_schema(schema: &SchemaDef) -> String {
    let rows: Vec<(String, String, String)> = schema
        .fields()
        .iter()
        .map(|f| {
            let presence = match f.default() {
                Some(default) => format!("default {default}"),
                None => "required".to_string(),
            };
            (f.name().to_string(), f.field_type().to_string(), presence)
        })
        .collect();

    let name_width = rows.iter().map(|r| r.0.len()).max().unwrap_or(0);
    let type_width = rows.iter().map(|r| r.1.len()).max().unwrap_or(0);

    let mut out = format!("{}\n", schema.name());
    for (name, ty, presence) in rows {
        out.push_str(&format!(
            "  {name:<name_width$}  {ty:<type_width$}  {presence}\n"
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use courier_schema::catalog::mailgun_email;

    #[test]
    fn format_catalog_schema() {
        let table = format_schema(&mailgun_email());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "MailgunEmail");
        assert_eq!(lines[1], "  api_key   string   required");
        assert_eq!(
            lines[2],
            r#"  base_url  string?  default "https://api.mailgun.net/""#
        );
        assert_eq!(lines[3], r#"  username  string?  default "api""#);
    }

    #[test]
    fn format_fieldless_schema() {
        assert_eq!(format_schema(&SchemaDef::new("Empty")), "Empty\n");
    }

    #[test]
    fn provider_args_reject_blank_code() {
        let args = ProviderArgs {
            code: " ".to_string(),
            provider_type: ProviderType::Email,
        };
        assert!(args.identity().is_err());
    }
}
