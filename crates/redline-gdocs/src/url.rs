//! Google URL inspection: file ids, application kind, export format.

use reqwest::Url;
use serde::{Deserialize, Serialize};

/// Minimum length of a Drive file id.
const MIN_ID_LEN: usize = 20;

/// Which Google application a URL points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoogleApp {
    Docs,
    Sheets,
    Slides,
    Drive,
    Unknown,
}

fn is_file_id(candidate: &str) -> bool {
    candidate.len() >= MIN_ID_LEN
        && candidate
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

/// The Drive file id in `url`.
///
/// Looks for a `/d/<id>` path segment pair (this also covers `/file/d/<id>`),
/// then an `id=` query parameter. A bare id is returned as-is.
#[must_use]
pub fn extract_file_id(url: &str) -> Option<String> {
    let trimmed = url.trim();
    if is_file_id(trimmed) {
        return Some(trimmed.to_string());
    }

    let parsed = Url::parse(trimmed).ok()?;
    if let Some(segments) = parsed.path_segments() {
        let segments: Vec<&str> = segments.collect();
        if let Some(id) = segments
            .windows(2)
            .find(|pair| pair[0] == "d" && is_file_id(pair[1]))
            .map(|pair| pair[1])
        {
            return Some(id.to_string());
        }
    }

    parsed
        .query_pairs()
        .find(|(key, value)| key == "id" && !value.is_empty())
        .map(|(_, value)| value.into_owned())
}

/// Classify `url` by host and path prefix.
#[must_use]
pub fn detect_app(url: &str) -> GoogleApp {
    let Ok(parsed) = Url::parse(url.trim()) else {
        return GoogleApp::Unknown;
    };
    let host = parsed.host_str().unwrap_or_default();
    let path = parsed.path();

    if host.contains("docs.google.com") {
        if path.starts_with("/document/") {
            return GoogleApp::Docs;
        }
        if path.starts_with("/spreadsheets/") {
            return GoogleApp::Sheets;
        }
        if path.starts_with("/presentation/") {
            return GoogleApp::Slides;
        }
    }
    if host.contains("drive.google.com") {
        return GoogleApp::Drive;
    }
    GoogleApp::Unknown
}

/// Text export format for `app`, or `None` when the file must be downloaded raw.
#[must_use]
pub const fn export_mime(app: GoogleApp) -> Option<&'static str> {
    match app {
        GoogleApp::Docs | GoogleApp::Slides => Some("text/plain"),
        GoogleApp::Sheets => Some("text/csv"),
        GoogleApp::Drive | GoogleApp::Unknown => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    const ID: &str = "1AbCdEfGhIjKlMnOpQrStUvWxYz_0123-456";

    #[rstest]
    #[case::docs_edit(format!("https://docs.google.com/document/d/{ID}/edit#heading=h.1"))]
    #[case::drive_file(format!("https://drive.google.com/file/d/{ID}/view?usp=sharing"))]
    #[case::open_query(format!("https://drive.google.com/open?id={ID}"))]
    #[case::bare(format!("  {ID} "))]
    fn extracts_file_id(#[case] url: String) {
        assert_eq!(extract_file_id(&url).as_deref(), Some(ID));
    }

    #[rstest]
    #[case::short_id("https://docs.google.com/document/d/short/edit")]
    #[case::no_id("https://docs.google.com/document/")]
    #[case::empty_query("https://drive.google.com/open?id=")]
    #[case::not_a_url("hello world")]
    fn rejects_urls_without_ids(#[case] url: &str) {
        assert_eq!(extract_file_id(url), None);
    }

    #[rstest]
    #[case("https://docs.google.com/document/d/x/edit", GoogleApp::Docs)]
    #[case("https://docs.google.com/spreadsheets/d/x/edit", GoogleApp::Sheets)]
    #[case("https://docs.google.com/presentation/d/x/edit", GoogleApp::Slides)]
    #[case("https://drive.google.com/file/d/x/view", GoogleApp::Drive)]
    #[case("https://docs.google.com/forms/d/x/edit", GoogleApp::Unknown)]
    #[case("https://example.com/document/d/x", GoogleApp::Unknown)]
    fn detects_app(#[case] url: &str, #[case] expected: GoogleApp) {
        assert_eq!(detect_app(url), expected);
    }

    #[test]
    fn export_formats() {
        assert_eq!(export_mime(GoogleApp::Docs), Some("text/plain"));
        assert_eq!(export_mime(GoogleApp::Sheets), Some("text/csv"));
        assert_eq!(export_mime(GoogleApp::Slides), Some("text/plain"));
        assert_eq!(export_mime(GoogleApp::Drive), None);
    }
}
