//! `courier template`: template body inspection.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};
use courier_template::extract_placeholders;

use crate::input::read_text;

#[derive(Args, Debug)]
pub struct TemplateArgs {
    #[command(subcommand)]
    pub command: TemplateCommand,
}

#[derive(Subcommand, Debug)]
pub enum TemplateCommand {
    /// Print the placeholders of a template body, one per line, in order
    /// of first occurrence.
    Vars {
        /// File holding the template body.
        #[arg(long)]
        file: PathBuf,
    },
}

pub fn run_template(args: &TemplateArgs) -> Result<u8> {
    match &args.command {
        TemplateCommand::Vars { file } => {
            let body = read_text(file)?;
            for name in extract_placeholders(&body) {
                println!("{name}");
            }
            Ok(0)
        }
    }
}
