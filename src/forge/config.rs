//! Configuration for remote issue-tracker connections.
use secrecy::SecretString;

/// Page size for paginated closed-issue queries.
pub const DEFAULT_PAGE_SIZE: u8 = 100;
/// Changelog section header in the flat changelog file.
pub const CHANGELOG_HEADER: &str = "== Changelog ==";

/// Remote repository connection configuration, built once from CLI
/// arguments and environment and threaded into the forge client.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Remote host (e.g., "github.com").
    pub host: String,
    /// URL scheme (http or https).
    pub scheme: String,
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Full repository path ("owner/repo").
    pub path: String,
    /// Access token for authentication.
    pub token: SecretString,
    /// Base URL for REST API requests, ending in "repos/{owner}/{repo}/".
    pub api_base_url: String,
    /// Base URL for raw file content.
    pub raw_base_url: String,
    /// Path of the flat changelog file within the repository.
    pub changelog_path: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            host: "".to_string(),
            scheme: "".to_string(),
            owner: "".to_string(),
            repo: "".to_string(),
            path: "".to_string(),
            token: SecretString::from("".to_string()),
            api_base_url: "".to_string(),
            raw_base_url: "".to_string(),
            changelog_path: "".to_string(),
        }
    }
}
