//! Resolves a release version to its milestone on the issue tracker.

use log::*;

use crate::{error::Result, forge::traits::Forge};

/// Find the milestone whose title matches `version` exactly, by linear
/// scan of the milestone listing. Returns `None` when no title matches.
/// Title comparison is plain string equality; no version semantics.
pub async fn resolve_milestone(
    forge: &dyn Forge,
    version: &str,
) -> Result<Option<u64>> {
    let milestones = forge.list_milestones().await?;

    debug!("scanning {} milestones for {version}", milestones.len());

    Ok(milestones
        .into_iter()
        .find(|m| m.title == version)
        .map(|m| m.number))
}
