//! siteconf: resolve static-site generator settings from a base file and a
//! publish override.

use anyhow::Result;

fn main() -> Result<()> {
    siteconf::cli::run()
}
