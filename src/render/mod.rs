//! Output rendering (JSON, TOML, YAML, change listings)

pub mod changes;
pub mod formats;

pub use changes::render_changes;
pub use formats::{render, render_value, OutputFormat};
