use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use folio_core::trace::{replay_reported, ReplayFrame, ScrollTrace};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::summary;

/// Traces with at least this many steps get a progress bar.
const PROGRESS_MIN_STEPS: usize = 1_000;

#[derive(Args)]
pub struct ReplayArgs {
    /// Scroll trace file (TOML)
    pub trace: PathBuf,

    /// Config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Only print frames where the navbar state changed
    #[arg(long)]
    pub changes_only: bool,
}

pub fn run(args: &ReplayArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    let contents = std::fs::read_to_string(&args.trace)
        .with_context(|| format!("Failed to read trace {}", args.trace.display()))?;
    let trace: ScrollTrace = toml::from_str(&contents)
        .with_context(|| format!("Invalid trace {}", args.trace.display()))?;
    debug!(path = %args.trace.display(), steps = trace.steps.len(), "Trace loaded");

    summary::print_replay_header(&args.trace, &trace, &config);

    let total = trace.steps.len();
    let pb = if total >= PROGRESS_MIN_STEPS {
        let pb = ProgressBar::new(total as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{msg} [{bar:40}] {pos}/{len}")?
                .progress_chars("=> "),
        );
        pb.set_message("Replaying");
        pb
    } else {
        ProgressBar::hidden()
    };

    let result = replay_reported(&trace, config.registry()?, &config.nav, |done, _| {
        pb.set_position(done as u64);
    })?;
    pb.finish_and_clear();

    let frames: Vec<&ReplayFrame> = if args.changes_only {
        result.state_changes().collect()
    } else {
        result.frames.iter().collect()
    };
    summary::print_frames(&frames);
    summary::print_replay_summary(&result);

    Ok(())
}
