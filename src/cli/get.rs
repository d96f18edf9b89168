//! Get command implementation

use anyhow::Result;
use clap::Args;

use super::utils::SourceArgs;
use crate::render::render_value;

#[derive(Args)]
pub struct GetArgs {
    /// Setting name, e.g. SITEURL
    #[arg(value_name = "KEY")]
    pub key: String,

    #[command(flatten)]
    pub source: SourceArgs,
}

pub fn run(args: GetArgs) -> Result<()> {
    let resolved = args.source.load()?.resolve();
    let Some(value) = resolved.get(&args.key) else {
        anyhow::bail!("Setting not found: {}", args.key);
    };
    println!("{}", render_value(value));
    Ok(())
}
