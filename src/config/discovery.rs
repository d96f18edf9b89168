//! Locating the base and publish settings files of a site

use super::loader::load_settings;
use crate::domain::Configuration;
use crate::resolve::{changes, resolve, Change};
use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const BASE_CANDIDATES: [&str; 5] = [
    "pelicanconf.toml",
    "pelicanconf.yaml",
    "pelicanconf.yml",
    "pelicanconf.json",
    "siteconf.toml",
];

pub const OVERRIDE_CANDIDATES: [&str; 4] =
    ["publishconf.toml", "publishconf.yaml", "publishconf.yml", "publishconf.json"];

pub fn discover_base(dir: &Path) -> Option<PathBuf> {
    discover(dir, &BASE_CANDIDATES)
}

pub fn discover_override(dir: &Path) -> Option<PathBuf> {
    discover(dir, &OVERRIDE_CANDIDATES)
}

fn discover(dir: &Path, candidates: &[&str]) -> Option<PathBuf> {
    let mut found = candidates.iter().map(|c| dir.join(c)).filter(|p| p.is_file());
    let first = found.next()?;
    for shadowed in found {
        warn!("Ignoring {} because {} was found first", shadowed.display(), first.display());
    }
    Some(first)
}

/// The files one site's effective configuration is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSources {
    pub base: PathBuf,
    pub overrides: Option<PathBuf>,
}

impl SiteSources {
    /// Combine explicit paths with discovery in `dir`.
    ///
    /// Explicit paths always win. The publish override is only looked up when
    /// `publish` is set, and is then required to exist.
    pub fn locate(
        dir: &Path,
        base: Option<&Path>,
        overrides: Option<&Path>,
        publish: bool,
    ) -> Result<Self> {
        let base = match base {
            Some(path) => path.to_path_buf(),
            None => discover_base(dir).ok_or_else(|| {
                anyhow!(
                    "No base settings file found in {} (looked for {})",
                    dir.display(),
                    BASE_CANDIDATES.join(", ")
                )
            })?,
        };

        let overrides = match overrides {
            Some(path) => Some(path.to_path_buf()),
            None if publish => Some(discover_override(dir).ok_or_else(|| {
                anyhow!(
                    "No publish settings file found in {} (looked for {})",
                    dir.display(),
                    OVERRIDE_CANDIDATES.join(", ")
                )
            })?),
            None => None,
        };

        debug!(base = %base.display(), overrides = ?overrides, "Located settings files");
        Ok(Self { base, overrides })
    }

    pub fn load(&self) -> Result<LoadedSite> {
        let base = load_settings(&self.base)?;
        let overrides = self.overrides.as_deref().map(load_settings).transpose()?;
        Ok(LoadedSite { base, overrides })
    }
}

/// Parsed settings of one site, before resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedSite {
    pub base: Configuration,
    pub overrides: Option<Configuration>,
}

impl LoadedSite {
    pub fn resolve(&self) -> Configuration {
        resolve(&self.base, self.overrides.as_ref())
    }

    /// Per-key changes made by the override; `None` when there is no override.
    pub fn changes(&self) -> Option<Vec<Change>> {
        self.overrides.as_ref().map(|o| changes(&self.base, o))
    }
}
