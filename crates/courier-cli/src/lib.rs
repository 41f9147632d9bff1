//! # courier-cli — Provider Engine Command-Line Interface
//!
//! Operator tooling over the provider configuration engine.
//!
//! ## Subcommands
//!
//! - `normalize`: canonical form of a provider code or type
//! - `schema`: list, inspect and document registered schemas
//! - `config`: validate a configuration file for a provider
//! - `template`: list the placeholders of a template body
//! - `render`: markdown to sanitized HTML
//! - `keygen`: generate a service API key
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the domain crates; handlers only
//!   delegate and format.
//! - Results go to stdout, diagnostics to stderr through `tracing`.
//! - Handlers return the process exit code: `0` success, `2` rejected
//!   input. Operational failures surface as `Err` and exit `1`.

pub mod config;
pub mod input;
pub mod keygen;
pub mod normalize;
pub mod render;
pub mod schema;
pub mod settings;
pub mod template;

/// Exit code for input that was read but rejected by validation.
pub const EXIT_INVALID: u8 = 2;
