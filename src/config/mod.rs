//! Settings file loading and discovery
//!
//! Reads base and publish settings from TOML, YAML or JSON files and finds
//! them in a site directory when no explicit path is given.

pub mod discovery;
pub mod loader;

pub use discovery::{discover_base, discover_override, LoadedSite, SiteSources};
pub use loader::{load_settings, parse_settings, FileFormat};
