//! # courier CLI entry point
//!
//! Parses command-line arguments, loads settings, and dispatches to
//! subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use courier_cli::config::{run_config, ConfigArgs};
use courier_cli::keygen::{run_keygen, KeygenArgs};
use courier_cli::normalize::{run_normalize, NormalizeArgs};
use courier_cli::render::{run_render, RenderArgs};
use courier_cli::schema::{run_schema, SchemaArgs};
use courier_cli::settings::Settings;
use courier_cli::template::{run_template, TemplateArgs};

/// Notification provider configuration engine.
///
/// Resolves provider schemas by naming convention, validates provider
/// configuration, renders schema documentation safely, and issues
/// service credentials.
#[derive(Parser, Debug)]
#[command(name = "courier", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML settings file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the canonical form of a provider code or type.
    Normalize(NormalizeArgs),

    /// List, inspect and document schemas.
    Schema(SchemaArgs),

    /// Validate provider configuration files.
    Config(ConfigArgs),

    /// Inspect template bodies.
    Template(TemplateArgs),

    /// Render a markdown file to sanitized HTML.
    Render(RenderArgs),

    /// Generate a service API key.
    Keygen(KeygenArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "courier starting");

    let settings = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(1);
        }
    };

    let result = match &cli.command {
        Commands::Normalize(args) => run_normalize(args),
        Commands::Schema(args) => run_schema(args, &settings),
        Commands::Config(args) => run_config(args),
        Commands::Template(args) => run_template(args),
        Commands::Render(args) => run_render(args, &settings),
        Commands::Keygen(args) => run_keygen(args, &settings),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use courier_cli::config::ConfigCommand;
    use courier_cli::schema::SchemaCommand;
    use courier_core::ProviderType;

    #[test]
    fn cli_parse_normalize() {
        let cli = Cli::try_parse_from(["courier", "normalize", "mail_gun"]).unwrap();
        if let Commands::Normalize(args) = cli.command {
            assert_eq!(args.value, "mail_gun");
        } else {
            panic!("expected normalize");
        }
    }

    #[test]
    fn cli_parse_schema_show() {
        let cli = Cli::try_parse_from([
            "courier", "schema", "show", "--code", "mailgun", "--type", "email", "--request",
        ])
        .unwrap();
        let Commands::Schema(args) = cli.command else {
            panic!("expected schema");
        };
        let SchemaCommand::Show { provider, request } = args.command else {
            panic!("expected show");
        };
        assert_eq!(provider.code, "mailgun");
        assert_eq!(provider.provider_type, ProviderType::Email);
        assert!(request);
    }

    #[test]
    fn cli_parse_rejects_unknown_type() {
        let result = Cli::try_parse_from([
            "courier", "schema", "show", "--code", "mailgun", "--type", "fax",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parse_schema_doc_flags() {
        let cli = Cli::try_parse_from([
            "courier", "schema", "doc", "--code", "mailgun", "--type", "email", "--html",
        ])
        .unwrap();
        let Commands::Schema(args) = cli.command else {
            panic!("expected schema");
        };
        assert!(matches!(
            args.command,
            SchemaCommand::Doc {
                html: true,
                request: false,
                ..
            }
        ));
    }

    #[test]
    fn cli_parse_config_validate() {
        let cli = Cli::try_parse_from([
            "courier", "config", "validate", "--code", "mailgun", "--type", "email", "--file",
            "mailgun.yaml",
        ])
        .unwrap();
        let Commands::Config(args) = cli.command else {
            panic!("expected config");
        };
        let ConfigCommand::Validate { file, .. } = args.command;
        assert_eq!(file, PathBuf::from("mailgun.yaml"));
    }

    #[test]
    fn cli_parse_keygen_options() {
        let cli =
            Cli::try_parse_from(["courier", "keygen", "--length", "40", "--prefix", "ntf_"]).unwrap();
        if let Commands::Keygen(args) = cli.command {
            assert_eq!(args.length, Some(40));
            assert_eq!(args.prefix.as_deref(), Some("ntf_"));
        } else {
            panic!("expected keygen");
        }
    }

    #[test]
    fn cli_parse_verbose_and_config() {
        let cli = Cli::try_parse_from([
            "courier", "-vv", "--config", "courier.yaml", "render", "--file", "doc.md",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("courier.yaml")));
    }

    #[test]
    fn cli_parse_no_subcommand_errors() {
        assert!(Cli::try_parse_from(["courier"]).is_err());
    }
}
