use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct SectionsArgs {
    /// Config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &SectionsArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    let registry = config.registry()?;

    println!("{:>3}  {:<14}  {}", "#", "Id", "Label");
    println!("{}", "-".repeat(32));
    for (i, anchor) in registry.iter().enumerate() {
        println!("{:>3}  {:<14}  {}", i + 1, anchor.id, anchor.label);
    }

    Ok(())
}
