//! Named notifications delivered to the embedding application.
//!
//! The wire names and payload field names are a compatibility contract with
//! existing listeners: renaming any of them breaks those listeners.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// One notification name per import category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationKind {
    AddPasswordForm,
    AddHistoryPage,
    AddHomepage,
    AddBookmarks,
    AddFavicons,
    AddAutofillFormDataEntries,
    AddCookies,
    ShowWarningDialog,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 8] = [
        NotificationKind::AddPasswordForm,
        NotificationKind::AddHistoryPage,
        NotificationKind::AddHomepage,
        NotificationKind::AddBookmarks,
        NotificationKind::AddFavicons,
        NotificationKind::AddAutofillFormDataEntries,
        NotificationKind::AddCookies,
        NotificationKind::ShowWarningDialog,
    ];

    /// Wire name of the notification
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::AddPasswordForm => "add-password-form",
            NotificationKind::AddHistoryPage => "add-history-page",
            NotificationKind::AddHomepage => "add-homepage",
            NotificationKind::AddBookmarks => "add-bookmarks",
            NotificationKind::AddFavicons => "add-favicons",
            NotificationKind::AddAutofillFormDataEntries => "add-autofill-form-data-entries",
            NotificationKind::AddCookies => "add-cookies",
            NotificationKind::ShowWarningDialog => "show-warning-dialog",
        }
    }

    /// Field names of a single payload record
    ///
    /// Empty for notifications whose payload is a scalar or absent.
    pub fn payload_fields(&self) -> &'static [&'static str] {
        match self {
            NotificationKind::AddPasswordForm => {
                &["signon_realm", "username_value", "password_value"]
            }
            NotificationKind::AddHistoryPage => &["title", "url", "visit_count", "last_visit"],
            NotificationKind::AddHomepage => &[],
            NotificationKind::AddBookmarks => &[
                "in_toolbar",
                "is_folder",
                "url",
                "title",
                "creation_time",
                "path",
            ],
            NotificationKind::AddFavicons => &["favicon_url", "png_data", "urls"],
            NotificationKind::AddAutofillFormDataEntries => &["name", "value"],
            NotificationKind::AddCookies => &[
                "url",
                "domain",
                "name",
                "value",
                "path",
                "expiry_date",
                "secure",
                "httponly",
            ],
            NotificationKind::ShowWarningDialog => &[],
        }
    }

    /// Whether the payload is a list of records rather than a single value
    pub fn is_batch(&self) -> bool {
        !matches!(
            self,
            NotificationKind::AddPasswordForm
                | NotificationKind::AddHomepage
                | NotificationKind::ShowWarningDialog
        )
    }

    /// Meaning of the optional second argument, if the notification has one
    pub fn secondary_argument(&self) -> Option<&'static str> {
        match self {
            NotificationKind::AddHistoryPage => Some("visit_source"),
            NotificationKind::AddBookmarks => Some("top_level_folder_name"),
            _ => None,
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named notification and its arguments
///
/// `args[0]` carries the payload and `args[1]`, when present, the secondary
/// scalar (visit source code or top-level folder name).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub name: NotificationKind,
    #[serde(default)]
    pub args: Vec<Value>,
}

impl Notification {
    pub fn new(name: NotificationKind) -> Self {
        Self { name, args: Vec::new() }
    }

    pub fn with_arg(mut self, arg: impl Into<Value>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// The first argument, if any
    pub fn payload(&self) -> Option<&Value> {
        self.args.first()
    }

    /// Number of records in a list payload (0 for anything else)
    pub fn record_count(&self) -> usize {
        self.payload()
            .and_then(Value::as_array)
            .map(Vec::len)
            .unwrap_or(0)
    }
}
