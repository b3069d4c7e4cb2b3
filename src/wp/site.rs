//! Reading the network's site list.

use serde::Deserialize;

use crate::error::OnboardError;

/// One record of `site list --fields=url --format=json`.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteRecord {
    pub url: String,
}

pub fn parse_site_list(output: &str) -> Result<Vec<SiteRecord>, OnboardError> {
    serde_json::from_str(output).map_err(|_| OnboardError::SiteListUnparsable {
        output: output.to_string(),
    })
}

/// Find the site whose URL starts with the expected one.
///
/// The expected URL ends in a slash, so `…/petramuster/` never matches a
/// sibling like `…/petramuster-2/`. Returns the URL normalized to a
/// trailing slash.
pub fn find_site_url(records: &[SiteRecord], expected_url: &str) -> Option<String> {
    records.iter().find_map(|record| {
        let mut url = record.url.clone();
        if !url.ends_with('/') {
            url.push('/');
        }
        url.starts_with(expected_url).then_some(url)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(urls: &[&str]) -> Vec<SiteRecord> {
        urls.iter()
            .map(|url| SiteRecord {
                url: url.to_string(),
            })
            .collect()
    }

    #[test]
    fn parses_wp_cli_json() {
        let output = r#"[{"url":"https://www.gruene.ch/"},{"url":"https://www.gruene.ch/petramuster/"}]"#;
        let records = parse_site_list(output).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].url, "https://www.gruene.ch/petramuster/");
    }

    #[test]
    fn garbage_output_is_an_error() {
        let err = parse_site_list("Error: This does not seem to be a multisite.").unwrap_err();
        assert!(matches!(err, OnboardError::SiteListUnparsable { .. }));
    }

    #[test]
    fn finds_site_by_prefix() {
        let records = records(&[
            "https://www.gruene.ch/",
            "https://www.gruene.ch/petramuster/",
        ]);
        assert_eq!(
            find_site_url(&records, "https://www.gruene.ch/petramuster/").as_deref(),
            Some("https://www.gruene.ch/petramuster/")
        );
    }

    #[test]
    fn sibling_slug_does_not_match() {
        let records = records(&["https://www.gruene.ch/petramuster-2/"]);
        assert_eq!(
            find_site_url(&records, "https://www.gruene.ch/petramuster/"),
            None
        );
    }

    #[test]
    fn missing_trailing_slash_is_normalized() {
        let records = records(&["https://www.gruene.ch/petramuster"]);
        assert_eq!(
            find_site_url(&records, "https://www.gruene.ch/petramuster/").as_deref(),
            Some("https://www.gruene.ch/petramuster/")
        );
    }
}
