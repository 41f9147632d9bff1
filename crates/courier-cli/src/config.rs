//! # Config Subcommand
//!
//! Validates a provider configuration file the same way a service save
//! does, without persisting anything.
//!
//! ```bash
//! courier config validate --code mailgun --type email --file mailgun.yaml
//! ```
//!
//! On success the bound configuration (schema defaults filled in) is
//! printed as JSON and the exit code is `0`. On rejection the field-scoped
//! message and each violation are printed and the exit code is `2`.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};
use courier_schema::{FieldValidationError, SchemaResolver};
use serde_json::Value;

use crate::input::read_config_map;
use crate::schema::ProviderArgs;
use crate::EXIT_INVALID;

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Validate a JSON or YAML configuration file for a provider.
    Validate {
        #[command(flatten)]
        provider: ProviderArgs,

        /// Configuration file (`.json`, `.yaml` or `.yml`).
        #[arg(long)]
        file: PathBuf,
    },
}

pub fn run_config(args: &ConfigArgs) -> Result<u8> {
    match &args.command {
        ConfigCommand::Validate { provider, file } => {
            let provider = provider.provider()?;
            let config = read_config_map(file)?;
            let resolver = SchemaResolver::global();

            if provider.config_schema(&resolver).is_none() {
                tracing::info!(provider = provider.code(), "no schema configured; accepting as-is");
            }

            match provider.bind_config(&resolver, &config) {
                Ok(bound) => {
                    println!("{}", serde_json::to_string_pretty(&Value::Object(bound))?);
                    Ok(0)
                }
                Err(err) => {
                    print!("{}", format_rejection(&err));
                    Ok(EXIT_INVALID)
                }
            }
        }
    }
}

/// The error line followed by one indented line per violation.
pub fn format_rejection(err: &FieldValidationError) -> String {
    let mut out = format!("{err}\n");
    for violation in &err.violations {
        out.push_str(&format!("  - {violation}\n"));
    }
    out
}
