use super::types::{
    AutofillEntry, FaviconUsageData, ImportedBookmarkEntry, ImportedCookieEntry, PasswordForm,
    UrlRow, VisitSource,
};
use serde::{Deserialize, Serialize};

/// Bookmarks plus the folder name the importer proposes for them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookmarkBatch {
    #[serde(default)]
    pub top_level_folder_name: String,
    #[serde(default)]
    pub entries: Vec<ImportedBookmarkEntry>,
}

/// History rows that share one visit source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryBatch {
    #[serde(default)]
    pub visit_source: VisitSource,
    #[serde(default)]
    pub rows: Vec<UrlRow>,
}

/// Everything one import run produced, at most one batch per category
///
/// Categories the source browser did not provide are left as `None` so that
/// an absent batch and an empty batch stay distinguishable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportBundle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bookmarks: Option<BookmarkBatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicons: Option<Vec<FaviconUsageData>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<HistoryBatch>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub password_forms: Vec<PasswordForm>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autofill_entries: Option<Vec<AutofillEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookies: Option<Vec<ImportedCookieEntry>>,
    #[serde(default)]
    pub show_warning: bool,
}

impl ImportBundle {
    /// True when replaying the bundle would not produce any notification
    pub fn is_empty(&self) -> bool {
        self.batch_count() == 0
    }

    /// Number of notifications a replay of this bundle produces
    ///
    /// Password forms are delivered one at a time, every other category as a
    /// single batch.
    pub fn batch_count(&self) -> usize {
        let batches = [
            self.homepage.is_some(),
            self.bookmarks.is_some(),
            self.favicons.is_some(),
            self.history.is_some(),
            self.autofill_entries.is_some(),
            self.cookies.is_some(),
            self.show_warning,
        ];

        batches.iter().filter(|present| **present).count() + self.password_forms.len()
    }
}
