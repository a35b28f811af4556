use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use folio_core::geometry::StaticGeometry;
use folio_core::resolver::{is_at_bottom, resolve};

#[derive(Args)]
pub struct ResolveArgs {
    /// Scroll offset in pixels
    #[arg(long, allow_negative_numbers = true)]
    pub offset: f32,

    /// Viewport height in pixels
    #[arg(long, default_value = "900")]
    pub viewport: f32,

    /// Document height in pixels
    #[arg(long)]
    pub document: f32,

    /// Section top as ID=OFFSET (repeatable). Unlisted sections count as absent.
    #[arg(long = "section", value_name = "ID=OFFSET", value_parser = parse_section, required = true)]
    pub sections: Vec<(String, f32)>,

    /// Config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &ResolveArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    let registry = config.registry()?;

    for (id, _) in &args.sections {
        if !registry.contains(id) {
            anyhow::bail!("Unknown section '{id}'");
        }
    }

    let geometry =
        StaticGeometry::new(args.viewport, args.document).with_sections(args.sections.clone());
    let resolution = resolve(&registry, &geometry, args.offset, &config.nav);
    let anchor = resolution.anchor(&registry);

    println!("Offset:      {:.0}", args.offset);
    println!(
        "Viewport:    {:.0} of {:.0} ({})",
        args.viewport,
        args.document,
        if is_at_bottom(args.offset, &geometry, &config.nav) {
            "at bottom"
        } else {
            "not at bottom"
        }
    );
    println!("Active:      {} ({})", anchor.id, anchor.label);
    println!("Reason:      {}", resolution.reason);

    Ok(())
}

fn parse_section(s: &str) -> Result<(String, f32), String> {
    let (id, offset) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ID=OFFSET, got '{s}'"))?;
    let offset = offset
        .trim()
        .parse::<f32>()
        .map_err(|e| format!("invalid offset in '{s}': {e}"))?;
    Ok((id.trim().to_string(), offset))
}
