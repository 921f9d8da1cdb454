//! Enriches pull requests with a parsed "changes proposed" description.

use log::*;
use regex::Regex;
use std::{sync::LazyLock, time::Duration};
use tokio::time::sleep;

use crate::{
    error::{Result, ScoutError},
    forge::traits::Forge,
};

/// Marker opening the structured description in a PR body.
const CHANGES_MARKER: &str = "Changes proposed in this Pull Request:";
/// Marker opening the testing instructions, which bound the description.
const TESTING_MARKER: &str = "How to test the changes in this Pull Request:";

/// Fixed wait before retrying a rate-limited request.
pub const RATE_LIMIT_BACKOFF: Duration = Duration::from_secs(60);
/// Maximum rate-limit retries per pull request before giving up.
pub const MAX_RATE_LIMIT_RETRIES: u32 = 3;

/// Span between the changes marker and the testing marker (or end of
/// text), compiled once since extraction runs once per collected PR.
static CHANGES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "(?s){}(.*?)(?:{}|$)",
        regex::escape(CHANGES_MARKER),
        regex::escape(TESTING_MARKER)
    ))
    .unwrap()
});

/// Inline HTML tags. Matching stays within a single line so that bare
/// comment delimiters survive for the line filter.
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^<>\n]*>").unwrap());

/// Fetch a pull request's body and extract its "changes proposed" section.
///
/// Absence of a body or of the section markers is a legitimate PR state and
/// yields an empty string. Rate limiting (HTTP 403) blocks for
/// [`RATE_LIMIT_BACKOFF`] and retries, bounded by
/// [`MAX_RATE_LIMIT_RETRIES`]; other transport failures are logged and
/// degrade to an empty description rather than failing the run.
pub async fn fetch_description(
    forge: &dyn Forge,
    number: u64,
) -> Result<String> {
    let mut attempts = 0;

    let body = loop {
        match forge.pull_request_body(number).await {
            Ok(body) => break body,
            Err(ScoutError::RateLimited) => {
                attempts += 1;

                if attempts > MAX_RATE_LIMIT_RETRIES {
                    return Err(ScoutError::RetriesExhausted(
                        MAX_RATE_LIMIT_RETRIES,
                    ));
                }

                warn!(
                    "rate limited fetching pr {number}: waiting {}s before retry {attempts}/{MAX_RATE_LIMIT_RETRIES}",
                    RATE_LIMIT_BACKOFF.as_secs()
                );

                sleep(RATE_LIMIT_BACKOFF).await;
            }
            Err(ScoutError::Transport { status, message }) => {
                warn!("error fetching pr {number}: status {status}: {message}");
                return Ok(String::new());
            }
            Err(ScoutError::NetworkError(message)) => {
                warn!("error fetching pr {number}: {message}");
                return Ok(String::new());
            }
            Err(err) => return Err(err),
        }
    };

    match body {
        Some(body) => Ok(extract_changes_section(&body)),
        None => Ok(String::new()),
    }
}

/// Extract the span between the changes marker and the testing marker (or
/// end of text), after stripping HTML tags and unescaping entities.
/// Returns an empty string when the changes marker is absent.
pub fn extract_changes_section(body: &str) -> String {
    let text = clean_html(body);

    let Some(captures) = CHANGES_RE.captures(&text) else {
        return String::new();
    };

    captures
        .get(1)
        .map(|m| m.as_str())
        .unwrap_or_default()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !is_comment_delimiter(line))
        .collect::<Vec<&str>>()
        .join("\n")
}

/// Strip inline HTML tags and unescape HTML entities.
fn clean_html(body: &str) -> String {
    let stripped = TAG_RE.replace_all(body, "");
    html_escape::decode_html_entities(&stripped).to_string()
}

fn is_comment_delimiter(line: &str) -> bool {
    line.starts_with("<!--") || line == "-->"
}
