use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GithubMilestone {
    pub number: u64,
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct GithubLabel {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct GithubIssue {
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub labels: Vec<GithubLabel>,
    pub html_url: String,
    /// Present only when the issue entry is a pull request.
    pub pull_request: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct GithubPull {
    pub body: Option<String>,
}
