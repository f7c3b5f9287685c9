use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use super::load_config;
use crate::summary::print_content_summary;

#[derive(Args)]
pub struct ContentArgs {
    /// Config file (TOML); the built-in content is used when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &ContentArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    print_content_summary(&config);
    Ok(())
}
