//! Implements the Forge trait for GitHub
use async_trait::async_trait;
use reqwest::{
    Client, StatusCode, Url,
    header::{HeaderMap, HeaderValue},
};
use secrecy::ExposeSecret;

use crate::{
    error::Result,
    forge::{
        config::{DEFAULT_PAGE_SIZE, RemoteConfig},
        github::types::{GithubIssue, GithubMilestone, GithubPull},
        link,
        request::{IssuePage, IssuePageRequest, IssueSummary, Milestone},
        traits::Forge,
    },
};

mod types;

/// GitHub forge implementation using reqwest for API interactions with
/// milestones, closed issues, and pull request bodies.
pub struct Github {
    config: RemoteConfig,
    base_url: Url,
    client: Client,
    raw_client: Client,
}

impl Github {
    /// Create GitHub client with bearer token authentication and API base
    /// URL configuration.
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let token = config.token.expose_secret();

        let mut headers = HeaderMap::new();

        let mut token_value =
            HeaderValue::from_str(format!("Bearer {}", token).as_str())?;
        token_value.set_sensitive(true);

        headers.append("Authorization", token_value);
        headers.append(
            "Accept",
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );

        let user_agent = format!(
            "{}/{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        );

        let client = reqwest::Client::builder()
            .user_agent(user_agent.clone())
            .default_headers(headers)
            .build()?;

        // the raw content endpoint is unauthenticated
        let raw_client =
            reqwest::Client::builder().user_agent(user_agent).build()?;

        let base_url = Url::parse(&config.api_base_url)?;

        Ok(Self {
            config,
            base_url,
            client,
            raw_client,
        })
    }
}

#[async_trait]
impl Forge for Github {
    async fn raw_changelog(&self, version: &str) -> Result<Option<String>> {
        let raw_url = Url::parse(&format!(
            "{}/refs/heads/release/{}/{}",
            self.config.raw_base_url, version, self.config.changelog_path
        ))?;

        let request = self.raw_client.get(raw_url).build()?;
        let response = self.raw_client.execute(request).await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let result = response.error_for_status()?;
        let content = result.text().await?;

        Ok(Some(content))
    }

    async fn list_milestones(&self) -> Result<Vec<Milestone>> {
        let mut milestones_url = self.base_url.join("milestones")?;

        milestones_url
            .query_pairs_mut()
            .append_pair("state", "all")
            .append_pair("per_page", &DEFAULT_PAGE_SIZE.to_string());

        let request = self.client.get(milestones_url).build()?;
        let response = self.client.execute(request).await?;
        let result = response.error_for_status()?;
        let milestones: Vec<GithubMilestone> = result.json().await?;

        Ok(milestones
            .into_iter()
            .map(|m| Milestone {
                number: m.number,
                title: m.title,
            })
            .collect())
    }

    async fn closed_issues_page(
        &self,
        req: IssuePageRequest,
    ) -> Result<IssuePage> {
        let issues_url = match &req.cursor {
            Some(cursor) => Url::parse(cursor)?,
            None => {
                let mut url = self.base_url.join("issues")?;
                url.query_pairs_mut()
                    .append_pair("state", "closed")
                    .append_pair("milestone", &req.milestone.to_string())
                    .append_pair("per_page", &DEFAULT_PAGE_SIZE.to_string());
                url
            }
        };

        let request = self.client.get(issues_url).build()?;
        let response = self.client.execute(request).await?;

        let next = response
            .headers()
            .get("link")
            .and_then(|h| h.to_str().ok())
            .and_then(link::next_url);

        let result = response.error_for_status()?;
        let issues: Vec<GithubIssue> = result.json().await?;

        let issues = issues
            .into_iter()
            .map(|issue| IssueSummary {
                number: issue.number,
                title: issue.title,
                labels: issue
                    .labels
                    .into_iter()
                    .map(|l| l.name)
                    .collect::<Vec<String>>(),
                url: issue.html_url,
                is_pull_request: issue.pull_request.is_some(),
            })
            .collect::<Vec<IssueSummary>>();

        Ok(IssuePage { issues, next })
    }

    async fn pull_request_body(&self, number: u64) -> Result<Option<String>> {
        let pull_url = self.base_url.join(&format!("pulls/{number}"))?;

        let request = self.client.get(pull_url).build()?;
        let response = self.client.execute(request).await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let result = response.error_for_status()?;
        let pull: GithubPull = result.json().await?;

        Ok(pull.body)
    }
}
