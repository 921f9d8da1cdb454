//! Assembles the final tabular records from collected pull requests.

use serde::{Deserialize, Serialize};

use crate::forge::request::IssueSummary;

/// Label carried by every PR in the audited repository; dropped from the
/// output since it adds no signal.
pub const EXCLUDED_LABEL: &str = "plugin: woocommerce";

/// One row of the output table. `ranking` is a placeholder for later
/// manual annotation and is always empty on write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangelogRecord {
    #[serde(rename = "ID")]
    pub id: Option<u64>,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Labels")]
    pub labels: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Ranking")]
    pub ranking: String,
}

/// Pair collector output with enricher output, one record per pull
/// request, applying the label filter.
pub fn build_records(
    pull_requests: &[IssueSummary],
    descriptions: &[String],
) -> Vec<ChangelogRecord> {
    pull_requests
        .iter()
        .zip(descriptions.iter())
        .map(|(pr, description)| ChangelogRecord {
            id: Some(pr.number),
            title: pr.title.clone(),
            labels: format_labels(&pr.labels),
            url: pr.url.clone(),
            description: description.clone(),
            ranking: String::new(),
        })
        .collect()
}

/// Wrap a raw changelog section as a single synthetic record when no PR
/// collection occurred.
pub fn fallback_record(version: &str, section: &str) -> Vec<ChangelogRecord> {
    vec![ChangelogRecord {
        id: None,
        title: format!("Changelog for version {version}"),
        labels: String::new(),
        url: String::new(),
        description: section.to_string(),
        ranking: String::new(),
    }]
}

/// Join labels with ", " after removing the excluded label. The exclusion
/// match is case-insensitive; surviving labels keep their original casing.
fn format_labels(labels: &[String]) -> String {
    labels
        .iter()
        .filter(|l| !l.eq_ignore_ascii_case(EXCLUDED_LABEL))
        .map(String::as_str)
        .collect::<Vec<&str>>()
        .join(", ")
}
