//! Traits related to remote issue trackers
use async_trait::async_trait;

use crate::{
    error::Result,
    forge::request::{IssuePage, IssuePageRequest, Milestone},
};

/// Narrow interface over the issue-tracker REST API consumed by the
/// changelog pipeline. Expected absences surface as `Ok(None)`; rate
/// limiting surfaces as [`crate::error::ScoutError::RateLimited`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Forge {
    /// Fetch the flat changelog file for a release version from the raw
    /// content endpoint. Returns `None` when no such file exists.
    async fn raw_changelog(&self, version: &str) -> Result<Option<String>>;

    /// List milestones. A single page is assumed, a caller-visible
    /// limitation of the upstream design.
    async fn list_milestones(&self) -> Result<Vec<Milestone>>;

    /// Fetch one page of closed issues filtered by milestone, following
    /// the cursor from a previous page when present.
    async fn closed_issues_page(
        &self,
        req: IssuePageRequest,
    ) -> Result<IssuePage>;

    /// Fetch the free-text body of a pull request. Returns `None` when the
    /// PR has no body or does not exist.
    async fn pull_request_body(&self, number: u64) -> Result<Option<String>>;
}
