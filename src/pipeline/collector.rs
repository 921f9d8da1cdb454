//! Collects a milestone's closed pull requests across paginated API
//! responses.

use log::*;

use crate::{
    error::Result,
    forge::{
        request::{IssuePageRequest, IssueSummary},
        traits::Forge,
    },
};

/// Walk cursor-linked pages of closed issues filtered by milestone and
/// accumulate the pull-request-shaped entries into one flat list.
///
/// Pagination terminates when a page comes back empty or carries no
/// `rel="next"` relation. Entries stay in the order the API returned them
/// (typically closure order). One HTTP round trip per page.
pub async fn collect_pull_requests(
    forge: &dyn Forge,
    milestone: u64,
) -> Result<Vec<IssueSummary>> {
    let mut pull_requests: Vec<IssueSummary> = vec![];
    let mut cursor: Option<String> = None;
    let mut page_count = 0;

    loop {
        let page = forge
            .closed_issues_page(IssuePageRequest {
                milestone,
                cursor: cursor.clone(),
            })
            .await?;

        page_count += 1;

        if page.issues.is_empty() {
            break;
        }

        debug!(
            "page {page_count}: {} closed issues for milestone {milestone}",
            page.issues.len()
        );

        pull_requests
            .extend(page.issues.into_iter().filter(|i| i.is_pull_request));

        match page.next {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    info!(
        "collected {} pull requests for milestone {milestone} across {page_count} pages",
        pull_requests.len()
    );

    Ok(pull_requests)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forge::{request::IssuePage, traits::MockForge};

    fn pr(number: u64) -> IssueSummary {
        IssueSummary {
            number,
            title: format!("PR {number}"),
            labels: vec![],
            url: format!("https://github.com/owner/repo/pull/{number}"),
            is_pull_request: true,
        }
    }

    fn plain_issue(number: u64) -> IssueSummary {
        IssueSummary {
            is_pull_request: false,
            ..pr(number)
        }
    }

    #[tokio::test]
    async fn accumulates_all_pages_in_order() {
        let mut forge = MockForge::new();

        forge.expect_closed_issues_page().returning(|req| {
            match req.cursor.as_deref() {
                None => Ok(IssuePage {
                    issues: (0..100).map(pr).collect(),
                    next: Some("https://api.test/page2".into()),
                }),
                Some("https://api.test/page2") => Ok(IssuePage {
                    issues: (100..200).map(pr).collect(),
                    next: Some("https://api.test/page3".into()),
                }),
                Some("https://api.test/page3") => Ok(IssuePage {
                    issues: (200..237).map(pr).collect(),
                    next: None,
                }),
                Some(other) => panic!("unexpected cursor: {other}"),
            }
        });

        let collected = collect_pull_requests(&forge, 12).await.unwrap();

        assert_eq!(collected.len(), 237);
        // original order preserved, no re-sort
        for (i, issue) in collected.iter().enumerate() {
            assert_eq!(issue.number, i as u64);
        }
    }

    #[tokio::test]
    async fn filters_entries_without_pull_request_marker() {
        let mut forge = MockForge::new();

        forge.expect_closed_issues_page().returning(|_| {
            let mut issues: Vec<IssueSummary> =
                (0..5).map(plain_issue).collect();
            issues.extend((5..15).map(pr));
            Ok(IssuePage {
                issues,
                next: None,
            })
        });

        let collected = collect_pull_requests(&forge, 12).await.unwrap();

        assert_eq!(collected.len(), 10);
        assert!(collected.iter().all(|i| i.is_pull_request));
    }

    #[tokio::test]
    async fn empty_first_page_terminates_immediately() {
        let mut forge = MockForge::new();

        forge.expect_closed_issues_page().times(1).returning(|_| {
            Ok(IssuePage {
                issues: vec![],
                next: Some("https://api.test/ignored".into()),
            })
        });

        let collected = collect_pull_requests(&forge, 12).await.unwrap();

        assert!(collected.is_empty());
    }
}
