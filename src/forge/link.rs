//! HTTP Link-header parsing for cursor pagination.

/// Extract the URL associated with `rel="next"` from a Link header value.
///
/// Link headers carry comma-separated entries of the form
/// `<https://...>; rel="next"`. Returns `None` when no next relation is
/// present, which terminates pagination.
pub fn next_url(header: &str) -> Option<String> {
    for entry in header.split(',') {
        let mut parts = entry.trim().split(';');

        let url_part = parts.next()?.trim();
        let url = url_part
            .strip_prefix('<')
            .and_then(|u| u.strip_suffix('>'));

        let Some(url) = url else {
            continue;
        };

        for param in parts {
            if param.trim() == r#"rel="next""# {
                return Some(url.to_string());
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_next_relation_from_github_style_header() {
        let header = r#"<https://api.github.com/repositories/1/issues?page=2>; rel="next", <https://api.github.com/repositories/1/issues?page=5>; rel="last""#;

        assert_eq!(
            next_url(header),
            Some(
                "https://api.github.com/repositories/1/issues?page=2"
                    .to_string()
            )
        );
    }

    #[test]
    fn returns_none_without_next_relation() {
        let header = r#"<https://api.github.com/repositories/1/issues?page=1>; rel="first", <https://api.github.com/repositories/1/issues?page=1>; rel="prev""#;

        assert_eq!(next_url(header), None);
    }

    #[test]
    fn ignores_malformed_entries() {
        assert_eq!(next_url(""), None);
        assert_eq!(next_url("not a link header"), None);
        assert_eq!(next_url(r#"https://no.brackets; rel="next""#), None);
    }

    #[test]
    fn next_relation_position_does_not_matter() {
        let header = r#"<https://api.github.com/x?page=5>; rel="last", <https://api.github.com/x?page=3>; rel="next""#;

        assert_eq!(
            next_url(header),
            Some("https://api.github.com/x?page=3".to_string())
        );
    }
}
