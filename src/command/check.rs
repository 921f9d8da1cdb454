//! Check command: report which data files already exist for a version.

use log::*;
use std::path::Path;

use crate::{cli::Args, pipeline::candidate_paths, result::Result};

/// Probe the output directory for an existing changelog table for
/// `version`, trying the patch-suffix filename variants.
pub fn execute(args: &Args, version: &str) -> Result<()> {
    let output_dir = Path::new(&args.output_dir);

    let found = candidate_paths(output_dir, version)
        .into_iter()
        .find(|p| p.exists());

    match found {
        Some(path) => {
            info!("changelog data for {version}: {}", path.display());
        }
        None => {
            warn!(
                "no changelog data found for {version}: run `release-scout changelog {version}` first"
            );
        }
    }

    Ok(())
}
