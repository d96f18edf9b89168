//! Check command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::config::load_settings;

#[derive(Args)]
pub struct CheckArgs {
    /// Settings files to validate
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,
}

pub fn run(args: CheckArgs) -> Result<()> {
    let mut failed = 0usize;
    for file in &args.files {
        match load_settings(file) {
            Ok(config) => println!("ok: {} ({} settings)", file.display(), config.len()),
            Err(e) => {
                failed += 1;
                eprintln!("error: {:#}", e);
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} settings files failed validation", failed, args.files.len());
    }
    Ok(())
}
