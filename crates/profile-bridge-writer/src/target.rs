use crate::Result;
use profile_bridge_core::import::{
    AutofillEntry, FaviconUsageData, ImportedBookmarkEntry, ImportedCookieEntry, PasswordForm,
    UrlRow, VisitSource,
};

/// Callbacks an import engine drives, one per data category
pub trait ImportTarget {
    fn add_password_form(&self, form: &PasswordForm) -> Result<()>;

    fn add_history_page(&self, rows: &[UrlRow], visit_source: VisitSource) -> Result<()>;

    fn add_homepage(&self, home_page: &str) -> Result<()>;

    /// `top_level_folder_name` is the folder the importer proposes for
    /// bookmarks that do not go straight to the toolbar.
    fn add_bookmarks(
        &self,
        bookmarks: &[ImportedBookmarkEntry],
        top_level_folder_name: &str,
    ) -> Result<()>;

    fn add_favicons(&self, favicons: &[FaviconUsageData]) -> Result<()>;

    fn add_autofill_form_data_entries(&self, entries: &[AutofillEntry]) -> Result<()>;

    fn add_cookies(&self, cookies: &[ImportedCookieEntry]) -> Result<()>;

    fn show_warning_dialog(&self) -> Result<()>;
}
