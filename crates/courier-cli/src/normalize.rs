//! `courier normalize`: print the canonical form of a code or type.

use anyhow::Result;
use clap::Args;

#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Value to normalize, e.g. `mail_gun` or `amazon-ses`.
    pub value: String,
}

pub fn run_normalize(args: &NormalizeArgs) -> Result<u8> {
    println!("{}", courier_core::normalize(&args.value));
    Ok(0)
}
