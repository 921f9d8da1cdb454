//! Locates a version's section inside a flat changelog text blob.
//!
//! Sections are delimited by literal markers of the form `"= 9.9.0 "`.
//! Matching is exact substring search: no case folding, no fuzzy matching,
//! no version parsing. The trailing space in the marker is what keeps a
//! version from matching inside a longer one (e.g. "9.9" inside "9.9.1"),
//! which only works while upstream keeps that padding format.

use crate::forge::config::CHANGELOG_HEADER;

/// Generic marker opening every version section.
const SECTION_MARKER: &str = "= ";

/// Drop everything before the changelog header. Returns `None` when the
/// file carries no changelog section at all.
pub fn strip_preamble(content: &str) -> Option<&str> {
    let idx = content.find(CHANGELOG_HEADER)?;
    Some(content[idx + CHANGELOG_HEADER.len()..].trim_start())
}

/// Extract the text belonging to `version`'s section: everything between
/// the `"= {version} "` marker and the next `"= "` marker, or end of text.
/// Returns `None` when the version has no section, which triggers the
/// API-based fallback.
pub fn locate_version_section(
    changelog: &str,
    version: &str,
) -> Option<String> {
    let marker = format!("{SECTION_MARKER}{version} ");

    let start = changelog.find(&marker)? + marker.len();
    let rest = &changelog[start..];

    let section = match rest.find(SECTION_MARKER) {
        Some(end) => &rest[..end],
        None => rest,
    };

    Some(section.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHANGELOG: &str = "\
= 9.9.0 2025-06-09 =\n\
**WooCommerce**\n\
* Fix - Resolve checkout crash. [#101](https://github.com/woocommerce/woocommerce/pull/101)\n\
* Add - New shipping option. [#102](https://github.com/woocommerce/woocommerce/pull/102)\n\
\n\
= 9.8.5 2025-05-12 =\n\
* Fix - Older fix.\n";

    #[test]
    fn extracts_text_between_markers() {
        let section = locate_version_section(CHANGELOG, "9.9.0").unwrap();

        assert!(section.starts_with("2025-06-09"));
        assert!(section.contains("Resolve checkout crash"));
        assert!(section.contains("New shipping option"));
        assert!(!section.contains("9.8.5"));
        assert!(!section.contains("Older fix"));
    }

    #[test]
    fn last_section_runs_to_end_of_text() {
        let section = locate_version_section(CHANGELOG, "9.8.5").unwrap();

        assert!(section.contains("Older fix"));
    }

    #[test]
    fn missing_version_returns_none() {
        assert_eq!(locate_version_section(CHANGELOG, "9.7.0"), None);
    }

    #[test]
    fn marker_padding_disambiguates_prefix_versions() {
        let changelog = "= 9.9.1 2025-07-01 =\none\n= 9.9 2025-06-01 =\ntwo\n";

        let section = locate_version_section(changelog, "9.9").unwrap();
        assert!(section.contains("two"));
        assert!(!section.contains("one"));
    }

    #[test]
    fn strips_preamble_before_changelog_header() {
        let content = "Plugin readme text\n\n== Changelog ==\n\n= 1.0 =\nfix";

        let body = strip_preamble(content).unwrap();
        assert!(body.starts_with("= 1.0 ="));
    }

    #[test]
    fn missing_changelog_header_returns_none() {
        assert_eq!(strip_preamble("no changelog here"), None);
    }
}
