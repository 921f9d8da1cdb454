//! Changelog fetch command implementation.

use color_eyre::eyre::eyre;
use log::*;

use crate::{
    cli::Args, forge::github::Github, pipeline::ChangelogPipeline,
    result::Result,
};

/// Fetch changelog and PR data for a version and write the record table.
pub async fn execute(args: &Args, version: &str) -> Result<()> {
    if version.is_empty() {
        return Err(eyre!("version must not be empty"));
    }

    let config = args.remote_config()?;

    info!(
        "fetching changelog data for {} version {version}",
        config.path
    );

    let forge = Github::new(config)?;
    let pipeline = ChangelogPipeline::new(Box::new(forge), &args.output_dir);

    let path = pipeline.run(version).await?;

    info!("changelog table ready: {}", path.display());

    Ok(())
}
