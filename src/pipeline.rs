//! Changelog acquisition and normalization pipeline.
//!
//! Fetch the raw changelog and try to locate the version's section first;
//! when that fails, fall back to resolving the release milestone,
//! collecting its closed pull requests page by page, and enriching each
//! one with a parsed description. Either path ends in one CSV table.

use log::*;
use std::path::{Path, PathBuf};

use crate::{
    error::{Result, ScoutError},
    forge::traits::Forge,
    persist,
    pipeline::records::ChangelogRecord,
};

pub mod collector;
pub mod enricher;
pub mod locator;
pub mod milestone;
pub mod records;

/// Sequential, single-run pipeline over one forge connection. Stages are
/// plain functions composed here; failure of a stage fails the run.
pub struct ChangelogPipeline {
    forge: Box<dyn Forge>,
    output_dir: PathBuf,
}

impl ChangelogPipeline {
    pub fn new(forge: Box<dyn Forge>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            forge,
            output_dir: output_dir.into(),
        }
    }

    /// Run the full pipeline for one release version and write the record
    /// table. Returns the path of the written file.
    pub async fn run(&self, version: &str) -> Result<PathBuf> {
        let records = self.gather_records(version).await?;

        let path = self.output_path(version);
        persist::write_records(&path, &records)?;

        info!("wrote {} records to {}", records.len(), path.display());

        Ok(path)
    }

    /// Destination file for a version's table, derived from the version
    /// string.
    pub fn output_path(&self, version: &str) -> PathBuf {
        self.output_dir.join(format!("{version}.csv"))
    }

    async fn gather_records(
        &self,
        version: &str,
    ) -> Result<Vec<ChangelogRecord>> {
        if let Some(section) = self.locate_section(version).await? {
            info!("found changelog section for {version}");
            return Ok(records::fallback_record(version, &section));
        }

        info!(
            "no published changelog section for {version}: falling back to milestone lookup"
        );

        let milestone =
            milestone::resolve_milestone(self.forge.as_ref(), version)
                .await?
                .ok_or_else(|| {
                    ScoutError::NotFound(format!(
                        "changelog section and milestone for version {version}"
                    ))
                })?;

        debug!("resolved {version} to milestone {milestone}");

        let pull_requests =
            collector::collect_pull_requests(self.forge.as_ref(), milestone)
                .await?;

        let mut descriptions: Vec<String> = vec![];

        for pr in pull_requests.iter() {
            let description =
                enricher::fetch_description(self.forge.as_ref(), pr.number)
                    .await?;
            descriptions.push(description);
        }

        Ok(records::build_records(&pull_requests, &descriptions))
    }

    async fn locate_section(&self, version: &str) -> Result<Option<String>> {
        let Some(raw) = self.forge.raw_changelog(version).await? else {
            return Ok(None);
        };

        let Some(body) = locator::strip_preamble(&raw) else {
            warn!("changelog file has no changelog header");
            return Ok(None);
        };

        Ok(locator::locate_version_section(body, version))
    }
}

/// Candidate output files for a version, probed by the `check` command.
/// Mirrors the ad hoc trailing-".0" stripping used when versions are
/// written with or without a patch component.
pub fn candidate_paths(output_dir: &Path, version: &str) -> Vec<PathBuf> {
    let stripped = version.trim_end_matches(".0");

    let names = [
        format!("{version}.csv"),
        format!("{version}.0.csv"),
        format!("{stripped}.csv"),
        format!("{version}.txt"),
        format!("{version}.0.txt"),
        format!("{stripped}.txt"),
    ];

    let mut paths: Vec<PathBuf> = vec![];

    for name in names {
        let path = output_dir.join(name);
        if !paths.contains(&path) {
            paths.push(path);
        }
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forge::{
        request::{IssuePage, IssueSummary, Milestone},
        traits::MockForge,
    };
    use tempfile::tempdir;

    const CHANGELOG: &str = "\
readme preamble\n\
\n\
== Changelog ==\n\
\n\
= 9.9.0 2025-06-09 =\n\
* Fix - Resolve checkout crash.\n\
\n\
= 9.8.5 2025-05-12 =\n\
* Fix - Older fix.\n";

    fn pipeline(forge: MockForge, dir: &Path) -> ChangelogPipeline {
        ChangelogPipeline::new(Box::new(forge), dir)
    }

    fn read_rows(path: &Path) -> Vec<records::ChangelogRecord> {
        let mut reader = csv::Reader::from_path(path).unwrap();
        reader
            .deserialize()
            .collect::<std::result::Result<Vec<_>, _>>()
            .unwrap()
    }

    #[test_log::test(tokio::test)]
    async fn published_section_short_circuits_api_fallback() {
        let mut forge = MockForge::new();
        forge
            .expect_raw_changelog()
            .returning(|_| Ok(Some(CHANGELOG.to_string())));
        // no milestone/issue expectations: the fallback must not run

        let dir = tempdir().unwrap();
        let path = pipeline(forge, dir.path()).run("9.9.0").await.unwrap();

        let rows = read_rows(&path);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "Changelog for version 9.9.0");
        assert!(rows[0].description.contains("Resolve checkout crash"));
        assert!(!rows[0].description.contains("Older fix"));
    }

    #[test_log::test(tokio::test)]
    async fn falls_back_to_milestone_prs_when_section_missing() {
        let mut forge = MockForge::new();
        forge.expect_raw_changelog().returning(|_| Ok(None));
        forge.expect_list_milestones().returning(|| {
            Ok(vec![Milestone {
                number: 12,
                title: "9.9.0".into(),
            }])
        });
        forge.expect_closed_issues_page().returning(|_| {
            Ok(IssuePage {
                issues: vec![IssueSummary {
                    number: 101,
                    title: "Fix checkout".into(),
                    labels: vec![
                        "plugin: woocommerce".into(),
                        "bug".into(),
                    ],
                    url: "https://github.com/owner/repo/pull/101".into(),
                    is_pull_request: true,
                }],
                next: None,
            })
        });
        forge.expect_pull_request_body().returning(|_| {
            Ok(Some(
                "Changes proposed in this Pull Request:\nFix X\n\nHow to test the changes in this Pull Request:\nDo Y"
                    .into(),
            ))
        });

        let dir = tempdir().unwrap();
        let path = pipeline(forge, dir.path()).run("9.9.0").await.unwrap();

        let rows = read_rows(&path);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, Some(101));
        assert_eq!(rows[0].labels, "bug");
        assert_eq!(rows[0].description, "Fix X");
        assert_eq!(rows[0].ranking, "");
    }

    #[test_log::test(tokio::test)]
    async fn missing_section_and_milestone_is_terminal() {
        let mut forge = MockForge::new();
        forge.expect_raw_changelog().returning(|_| Ok(None));
        forge.expect_list_milestones().returning(|| Ok(vec![]));

        let dir = tempdir().unwrap();
        let result = pipeline(forge, dir.path()).run("9.9.0").await;

        assert!(matches!(result, Err(ScoutError::NotFound(_))));
        // no partial output file is left behind as valid data
        assert!(!dir.path().join("9.9.0.csv").exists());
    }

    #[test]
    fn candidate_paths_cover_patch_suffix_variants() {
        let paths = candidate_paths(Path::new("changelogs"), "9.9.0");
        let names: Vec<String> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();

        assert!(names.contains(&"9.9.0.csv".to_string()));
        assert!(names.contains(&"9.9.0.0.csv".to_string()));
        assert!(names.contains(&"9.9.csv".to_string()));
        assert!(names.contains(&"9.9.txt".to_string()));
    }

    #[test]
    fn candidate_paths_never_probe_the_same_file_twice() {
        // a two-component version survives the ".0" strip unchanged, so
        // the stripped variants collide with the originals
        let paths = candidate_paths(Path::new("changelogs"), "9.9");

        let mut deduped = paths.clone();
        deduped.sort();
        deduped.dedup();

        assert_eq!(paths.len(), deduped.len());
        assert!(paths.contains(&Path::new("changelogs/9.9.csv").to_path_buf()));
        assert!(
            paths.contains(&Path::new("changelogs/9.9.0.csv").to_path_buf())
        );
    }
}
