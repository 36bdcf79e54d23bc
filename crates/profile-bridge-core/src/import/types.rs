use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Saved login credentials read from the source browser
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordForm {
    pub signon_realm: String,
    pub username_value: String,
    pub password_value: String,
}

/// One page of browsing history
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRow {
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub visit_count: i32,
    #[serde(default)]
    pub last_visit: Option<DateTime<Utc>>,
}

/// Where a batch of history visits came from
///
/// The numeric codes are part of the notification contract and must not be
/// renumbered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitSource {
    Synced,
    #[default]
    Browsed,
    Extension,
    FirefoxImported,
    IeImported,
    SafariImported,
}

impl VisitSource {
    /// Numeric code sent alongside `add-history-page`
    pub fn code(&self) -> u32 {
        match self {
            VisitSource::Synced => 0,
            VisitSource::Browsed => 1,
            VisitSource::Extension => 2,
            VisitSource::FirefoxImported => 3,
            VisitSource::IeImported => 4,
            VisitSource::SafariImported => 5,
        }
    }
}

/// A bookmark or bookmark folder
///
/// `path` lists the enclosing folders from outermost to innermost.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportedBookmarkEntry {
    #[serde(default)]
    pub in_toolbar: bool,
    #[serde(default)]
    pub is_folder: bool,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub path: Vec<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub creation_time: Option<DateTime<Utc>>,
}

/// A favicon together with the pages that use it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaviconUsageData {
    pub favicon_url: String,
    /// Raw PNG bytes
    #[serde(default)]
    pub png_data: Vec<u8>,
    #[serde(default)]
    pub urls: BTreeSet<String>,
}

/// Form field name and the value typed into it
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AutofillKey {
    pub name: String,
    pub value: String,
}

/// Autofill value saved for a form field, with its usage dates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutofillEntry {
    pub key: AutofillKey,
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub date_last_used: Option<DateTime<Utc>>,
}

impl AutofillEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: AutofillKey {
                name: name.into(),
                value: value.into(),
            },
            date_created: None,
            date_last_used: None,
        }
    }
}

/// Cookie read from the source browser's cookie store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportedCookieEntry {
    #[serde(default)]
    pub domain: String,
    pub host: String,
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub expiry_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub secure: bool,
    #[serde(default)]
    pub httponly: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visit_source_codes() {
        assert_eq!(VisitSource::Synced.code(), 0);
        assert_eq!(VisitSource::Browsed.code(), 1);
        assert_eq!(VisitSource::FirefoxImported.code(), 3);
        assert_eq!(VisitSource::SafariImported.code(), 5);
    }

    #[test]
    fn test_visit_source_from_snake_case() {
        let source: VisitSource = serde_json::from_str("\"ie_imported\"").unwrap();
        assert_eq!(source, VisitSource::IeImported);
    }

    #[test]
    fn test_cookie_defaults() {
        let json = r#"{"host": "example.com", "name": "sid"}"#;
        let cookie: ImportedCookieEntry = serde_json::from_str(json).unwrap();

        assert_eq!(cookie.host, "example.com");
        assert!(cookie.value.is_empty());
        assert!(cookie.expiry_date.is_none());
        assert!(!cookie.secure);
        assert!(!cookie.httponly);
    }

    #[test]
    fn test_favicon_urls_are_ordered_and_unique() {
        let json = r#"{
            "favicon_url": "https://b.test/favicon.ico",
            "urls": ["https://b.test/2", "https://b.test/1", "https://b.test/2"]
        }"#;
        let favicon: FaviconUsageData = serde_json::from_str(json).unwrap();

        let urls: Vec<&str> = favicon.urls.iter().map(String::as_str).collect();
        assert_eq!(urls, vec!["https://b.test/1", "https://b.test/2"]);
    }

    #[test]
    fn test_bookmark_creation_time_parses_rfc3339() {
        let json = r#"{"title": "Rust", "url": "https://www.rust-lang.org/",
                       "creation_time": "2020-01-02T03:04:05Z"}"#;
        let bookmark: ImportedBookmarkEntry = serde_json::from_str(json).unwrap();

        assert_eq!(bookmark.creation_time.unwrap().timestamp(), 1_577_934_245);
        assert!(bookmark.path.is_empty());
    }
}
