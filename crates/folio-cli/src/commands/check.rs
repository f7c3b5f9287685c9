use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use super::load_config;

#[derive(Args)]
pub struct CheckArgs {
    /// Config file (TOML)
    pub file: PathBuf,
}

pub fn run(args: &CheckArgs) -> Result<()> {
    let config = load_config(Some(&args.file))?;
    let content = &config.content;

    println!("{}: ok", args.file.display());
    println!(
        "  {} projects, {} skills, {} education entries, {} certifications",
        content.projects.len(),
        content.skills.len(),
        content.education.len(),
        content.certifications.len()
    );
    let without_demo = content.projects_without_demo().count();
    if without_demo > 0 {
        println!("  {without_demo} project(s) without a demo use the detail view");
    }

    Ok(())
}
