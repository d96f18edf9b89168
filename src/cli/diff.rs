//! Diff command implementation

use anyhow::Result;
use clap::Args;
use console::Term;

use super::utils::SourceArgs;
use crate::render::render_changes;
use crate::resolve::Change;

#[derive(Args)]
pub struct DiffArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Never colour the output
    #[arg(long)]
    pub no_color: bool,
}

pub fn run(args: DiffArgs) -> Result<()> {
    let site = args.source.load()?;
    let Some(changes) = site.changes() else {
        println!("No override applied");
        return Ok(());
    };

    let colored = !args.no_color && Term::stdout().features().colors_supported();
    print!("{}", render_changes(&changes, colored));

    let added = changes.iter().filter(|c| matches!(c, Change::Added { .. })).count();
    println!("{} settings overridden ({} added)", changes.len(), added);
    Ok(())
}
