use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Utc};
use profile_bridge_core::import::{
    AutofillEntry, FaviconUsageData, ImportedBookmarkEntry, ImportedCookieEntry, PasswordForm,
    UrlRow,
};
use serde_json::{Value, json};

pub const FAVICON_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Whole seconds since the Unix epoch truncated toward zero, 0 for a null time
fn epoch_seconds(time: Option<&DateTime<Utc>>) -> i64 {
    let Some(time) = time else {
        return 0;
    };

    // `timestamp` floors, so pre-epoch times with a fraction are one second low
    let seconds = time.timestamp();
    if seconds < 0 && time.timestamp_subsec_nanos() > 0 {
        seconds + 1
    } else {
        seconds
    }
}

pub(crate) fn password_form(form: &PasswordForm) -> Value {
    json!({
        "signon_realm": form.signon_realm,
        "username_value": form.username_value,
        "password_value": form.password_value,
    })
}

pub(crate) fn history_rows(rows: &[UrlRow]) -> Value {
    rows.iter()
        .map(|row| {
            json!({
                "title": row.title,
                "url": row.url,
                "visit_count": row.visit_count,
                "last_visit": epoch_seconds(row.last_visit.as_ref()),
            })
        })
        .collect()
}

pub(crate) fn bookmarks(entries: &[ImportedBookmarkEntry]) -> Value {
    entries
        .iter()
        .map(|bookmark| {
            json!({
                "in_toolbar": bookmark.in_toolbar,
                "is_folder": bookmark.is_folder,
                "url": bookmark.url,
                "title": bookmark.title,
                "creation_time": epoch_seconds(bookmark.creation_time.as_ref()),
                "path": bookmark.path,
            })
        })
        .collect()
}

pub(crate) fn favicon_data_url(png_data: &[u8]) -> String {
    format!("{}{}", FAVICON_DATA_URL_PREFIX, STANDARD.encode(png_data))
}

pub(crate) fn favicons(favicons: &[FaviconUsageData]) -> Value {
    favicons
        .iter()
        .map(|favicon| {
            json!({
                "favicon_url": favicon.favicon_url,
                "png_data": favicon_data_url(&favicon.png_data),
                "urls": favicon.urls,
            })
        })
        .collect()
}

pub(crate) fn autofill_entries(entries: &[AutofillEntry]) -> Value {
    entries
        .iter()
        .map(|entry| {
            json!({
                "name": entry.key.name,
                "value": entry.key.value,
            })
        })
        .collect()
}

/// URL the cookie is re-set against
///
/// The scheme follows `httponly`, not `secure`.
pub(crate) fn cookie_url(cookie: &ImportedCookieEntry) -> String {
    let scheme = if cookie.httponly { "http://" } else { "https://" };
    format!("{}{}", scheme, cookie.host)
}

pub(crate) fn cookies(cookies: &[ImportedCookieEntry]) -> Value {
    cookies
        .iter()
        .map(|cookie| {
            json!({
                "url": cookie_url(cookie),
                "domain": cookie.domain,
                "name": cookie.name,
                "value": cookie.value,
                "path": cookie.path,
                "expiry_date": epoch_seconds(cookie.expiry_date.as_ref()),
                "secure": cookie.secure,
                "httponly": cookie.httponly,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_epoch_seconds_truncates_and_defaults() {
        let time = Utc.timestamp_millis_opt(1_500_000_000_999).unwrap();
        assert_eq!(epoch_seconds(Some(&time)), 1_500_000_000);
        assert_eq!(epoch_seconds(None), 0);
    }

    #[test]
    fn test_epoch_seconds_truncates_pre_epoch_toward_zero() {
        let half_second_before = Utc.timestamp_millis_opt(-500).unwrap();
        assert_eq!(epoch_seconds(Some(&half_second_before)), 0);

        let before = Utc.timestamp_millis_opt(-86_400_250).unwrap();
        assert_eq!(epoch_seconds(Some(&before)), -86_400);

        let whole = Utc.timestamp_opt(-3_600, 0).unwrap();
        assert_eq!(epoch_seconds(Some(&whole)), -3_600);
    }

    #[test]
    fn test_pre_epoch_last_visit_payload() {
        let rows = vec![UrlRow {
            url: "https://old.example/".to_string(),
            last_visit: Some(Utc.timestamp_millis_opt(-500).unwrap()),
            ..Default::default()
        }];

        assert_eq!(history_rows(&rows)[0]["last_visit"], json!(0));
    }

    #[test]
    fn test_favicon_data_url() {
        let png = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
        assert_eq!(favicon_data_url(&png), "data:image/png;base64,iVBORw0KGgo=");
    }

    #[test]
    fn test_favicon_data_url_empty() {
        assert_eq!(favicon_data_url(&[]), FAVICON_DATA_URL_PREFIX);
    }

    #[test]
    fn test_cookie_url_scheme_follows_httponly() {
        let mut cookie = ImportedCookieEntry {
            host: "example.com".to_string(),
            httponly: true,
            ..Default::default()
        };
        assert_eq!(cookie_url(&cookie), "http://example.com");

        cookie.httponly = false;
        cookie.secure = false;
        assert_eq!(cookie_url(&cookie), "https://example.com");
    }

    #[test]
    fn test_empty_batches_are_empty_lists() {
        assert_eq!(bookmarks(&[]), json!([]));
        assert_eq!(history_rows(&[]), json!([]));
        assert_eq!(favicons(&[]), json!([]));
        assert_eq!(autofill_entries(&[]), json!([]));
        assert_eq!(cookies(&[]), json!([]));
    }

    #[test]
    fn test_history_row_fields() {
        let rows = vec![UrlRow {
            url: "https://news.example/".to_string(),
            title: "News".to_string(),
            visit_count: 12,
            last_visit: Some(Utc.with_ymd_and_hms(2021, 6, 1, 0, 0, 0).unwrap()),
        }];

        assert_eq!(
            history_rows(&rows),
            json!([{
                "title": "News",
                "url": "https://news.example/",
                "visit_count": 12,
                "last_visit": 1_622_505_600,
            }])
        );
    }
}
