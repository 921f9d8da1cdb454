//! CLI argument parsing and remote repository configuration.
use clap::{Parser, Subcommand};
use color_eyre::eyre::{ContextCompat, eyre};
use git_url_parse::GitUrl;
use secrecy::SecretString;
use std::env;

use crate::{forge::config::RemoteConfig, result::Result};

/// Repository audited when no `--repo` override is given.
pub const DEFAULT_REPO_URL: &str = "https://github.com/woocommerce/woocommerce";
/// Default directory for generated changelog tables.
pub const DEFAULT_OUTPUT_DIR: &str = "changelogs";
/// Default in-repo path of the flat changelog file.
pub const DEFAULT_CHANGELOG_PATH: &str = "plugins/woocommerce/readme.txt";

/// Global CLI arguments for remote configuration and debugging.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value = DEFAULT_REPO_URL, global = true)]
    /// Repository URL (https://github.com/owner/repo).
    pub repo: String,

    #[arg(long, default_value = "", global = true)]
    /// Personal access token. Falls back to GITHUB_TOKEN env var.
    pub token: String,

    #[arg(long, default_value = DEFAULT_OUTPUT_DIR, global = true)]
    /// Directory the changelog table is written to.
    pub output_dir: String,

    #[arg(long, default_value = DEFAULT_CHANGELOG_PATH, global = true)]
    /// Path of the flat changelog file within the repository.
    pub changelog_path: String,

    #[arg(long, default_value_t = false, global = true)]
    /// Enable debug logging.
    pub debug: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Release data subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch changelog and PR data for a version and write the CSV table.
    Changelog {
        /// Release version (e.g. 9.9.0).
        version: String,
    },

    /// Report which data files already exist for a version.
    Check {
        /// Release version (e.g. 9.9.0).
        version: String,
    },
}

impl Args {
    /// Build the remote configuration once from CLI arguments and
    /// environment, threading it explicitly into the forge client instead
    /// of re-reading ambient state per call.
    pub fn remote_config(&self) -> Result<RemoteConfig> {
        let parsed = GitUrl::parse(&self.repo)?;

        validate_scheme(parsed.scheme)?;

        let mut token = self.token.clone();

        if token.is_empty()
            && let Some(parsed_token) = parsed.token
        {
            token = parsed_token;
        }

        if token.is_empty()
            && let Ok(env_var_token) = env::var("GITHUB_TOKEN")
        {
            token = env_var_token;
        }

        if token.is_empty() {
            return Err(eyre!("must set github token"));
        }

        let host = parsed
            .host
            .ok_or(eyre!("unable to parse host from repo url"))?;

        let owner = parsed
            .owner
            .ok_or(eyre!("unable to parse owner from repo url"))?;

        let project_path = parsed
            .path
            .strip_prefix("/")
            .wrap_err("failed to process project path")?
            .to_string();

        let api_base_url = format!(
            "{}://api.{}/repos/{}/",
            parsed.scheme, host, project_path
        );

        // github.com serves raw file content from a dedicated host
        let raw_base_url = if host == "github.com" {
            format!("https://raw.githubusercontent.com/{}", project_path)
        } else {
            format!("{}://{}/{}/raw", parsed.scheme, host, project_path)
        };

        Ok(RemoteConfig {
            host,
            scheme: parsed.scheme.to_string(),
            owner,
            repo: parsed.name,
            path: project_path,
            token: SecretString::from(token),
            api_base_url,
            raw_base_url,
            changelog_path: self.changelog_path.clone(),
        })
    }
}

/// Validate repository URL uses HTTP or HTTPS scheme.
fn validate_scheme(scheme: git_url_parse::Scheme) -> Result<()> {
    match scheme {
        git_url_parse::Scheme::Http => Ok(()),
        git_url_parse::Scheme::Https => Ok(()),
        _ => Err(eyre!(
            "only http and https schemes are supported for repo urls"
        )),
    }
}
