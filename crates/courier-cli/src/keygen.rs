//! `courier keygen`: generate a service API key.

use anyhow::Result;
use clap::Args;
use courier_crypto::generate_api_key;

use crate::settings::Settings;

#[derive(Args, Debug)]
pub struct KeygenArgs {
    /// Total key length including the prefix. Defaults to `credentials.length`.
    #[arg(long)]
    pub length: Option<usize>,

    /// Key prefix. Defaults to `credentials.prefix`.
    #[arg(long)]
    pub prefix: Option<String>,
}

pub fn run_keygen(args: &KeygenArgs, settings: &Settings) -> Result<u8> {
    println!("{}", generate_key(args, settings));
    Ok(0)
}

fn generate_key(args: &KeygenArgs, settings: &Settings) -> String {
    let length = args.length.unwrap_or(settings.credentials.length);
    let prefix = args
        .prefix
        .as_deref()
        .unwrap_or(&settings.credentials.prefix);
    generate_api_key(length, prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_supply_defaults() {
        let args = KeygenArgs {
            length: None,
            prefix: None,
        };
        let key = generate_key(&args, &Settings::default());
        assert_eq!(key.len(), 32);
        assert!(key.starts_with("svc_"));
    }

    #[test]
    fn flags_override_settings() {
        let args = KeygenArgs {
            length: Some(12),
            prefix: Some("ab_".to_string()),
        };
        let key = generate_key(&args, &Settings::default());
        assert_eq!(key.len(), 12);
        assert!(key.starts_with("ab_"));
    }
}
