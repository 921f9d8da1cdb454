//! Normalized request and response types shared across forge
//! implementations.

/// A release milestone as returned by the issue tracker.
#[derive(Debug, Clone, PartialEq)]
pub struct Milestone {
    pub number: u64,
    pub title: String,
}

/// Summary of a closed issue or pull request returned during milestone
/// collection. Order is whatever the API returned; callers do not re-sort.
#[derive(Debug, Clone, PartialEq)]
pub struct IssueSummary {
    pub number: u64,
    pub title: String,
    pub labels: Vec<String>,
    pub url: String,
    /// Issue endpoints return both issues and PRs; only entries carrying
    /// the pull-request marker are kept by the collector.
    pub is_pull_request: bool,
}

/// Request for one page of closed issues filtered by milestone.
#[derive(Debug, Clone, PartialEq)]
pub struct IssuePageRequest {
    pub milestone: u64,
    /// Full URL of the next page, taken from the previous response's Link
    /// header. `None` requests the first page.
    pub cursor: Option<String>,
}

/// One page of closed issues plus the cursor for the following page.
#[derive(Debug, Clone, PartialEq)]
pub struct IssuePage {
    pub issues: Vec<IssueSummary>,
    /// URL associated with the Link header's `rel="next"` relation, if any.
    pub next: Option<String>,
}
