//! Shared CLI arguments.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::config::{LoadedSite, SiteSources};

/// Where the base and override settings come from.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Site directory searched for pelicanconf.* and publishconf.*
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Base settings file (default: discovered in --dir)
    #[arg(short, long, value_name = "FILE")]
    pub base: Option<PathBuf>,

    /// Override settings file applied on top of the base
    #[arg(short = 'O', long = "override", value_name = "FILE")]
    pub overrides: Option<PathBuf>,

    /// Apply the publish settings discovered in --dir
    #[arg(short, long)]
    pub publish: bool,
}

impl SourceArgs {
    pub fn load(&self) -> Result<LoadedSite> {
        let sources = SiteSources::locate(
            &self.dir,
            self.base.as_deref(),
            self.overrides.as_deref(),
            self.publish,
        )?;
        sources.load()
    }
}
