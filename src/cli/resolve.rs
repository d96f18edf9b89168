//! Resolve command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;
use tracing::info;

use super::utils::SourceArgs;
use crate::render::{render, OutputFormat};

#[derive(Args)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

pub fn run(args: ResolveArgs) -> Result<()> {
    let site = args.source.load()?;
    let resolved = site.resolve();
    let text = render(&resolved, args.format)?;

    match args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed creating {}", parent.display()))?;
            }
            fs::write(&path, text)
                .with_context(|| format!("Failed writing {}", path.display()))?;
            info!(path = %path.display(), settings = resolved.len(), "Wrote effective settings");
        }
        None => print!("{}", text),
    }

    Ok(())
}
