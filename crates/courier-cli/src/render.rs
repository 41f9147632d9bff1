//! `courier render`: markdown file to sanitized HTML.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::input::read_text;
use crate::settings::Settings;

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Markdown file to render.
    #[arg(long)]
    pub file: PathBuf,
}

pub fn run_render(args: &RenderArgs, settings: &Settings) -> Result<u8> {
    let text = read_text(&args.file)?;
    let html = settings.renderer()?.render(&text);
    if html.ends_with('\n') || html.is_empty() {
        print!("{html}");
    } else {
        println!("{html}");
    }
    Ok(0)
}
