use crate::payload;
use crate::sink::NotificationSink;
use crate::target::ImportTarget;
use crate::{Error, Result};
use profile_bridge_core::import::{
    AutofillEntry, FaviconUsageData, ImportedBookmarkEntry, ImportedCookieEntry, PasswordForm,
    UrlRow, VisitSource,
};
use profile_bridge_core::{Notification, NotificationKind};
use std::sync::{Arc, Weak};

/// Turns imported batches into notifications for an attached sink
///
/// The writer never owns its sink. Until [`ProfileWriter::initialize`] is
/// called, or once the sink has been dropped, data-bearing operations do
/// nothing.
#[derive(Default)]
pub struct ProfileWriter {
    sink: Option<Weak<dyn NotificationSink>>,
}

impl ProfileWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the sink that receives every notification
    pub fn initialize<S: NotificationSink + 'static>(&mut self, sink: &Arc<S>) {
        if self.is_attached() {
            tracing::debug!("Replacing attached notification sink");
        }
        let weak: Weak<S> = Arc::downgrade(sink);
        self.sink = Some(weak);
    }

    /// Release the sink reference
    pub fn detach(&mut self) {
        self.sink = None;
    }

    pub fn is_attached(&self) -> bool {
        self.sink().is_some()
    }

    /// Bookmark storage is external, so it is always ready
    pub fn bookmark_model_is_loaded(&self) -> bool {
        true
    }

    /// Search engine storage is external, so it is always ready
    pub fn template_url_service_is_loaded(&self) -> bool {
        true
    }

    fn sink(&self) -> Option<Arc<dyn NotificationSink>> {
        self.sink.as_ref().and_then(Weak::upgrade)
    }

    /// Emit through the sink, or skip silently when none is attached.
    /// The payload is only built when there is somewhere to send it.
    fn emit_with<F>(&self, name: NotificationKind, build: F) -> Result<()>
    where
        F: FnOnce() -> Notification,
    {
        let Some(sink) = self.sink() else {
            tracing::trace!("No sink attached, skipping {}", name);
            return Ok(());
        };

        let notification = build();
        tracing::debug!(
            "Emitting {} ({} record(s))",
            name,
            notification.record_count()
        );
        sink.emit(notification)
    }
}

impl ImportTarget for ProfileWriter {
    fn add_password_form(&self, form: &PasswordForm) -> Result<()> {
        self.emit_with(NotificationKind::AddPasswordForm, || {
            Notification::new(NotificationKind::AddPasswordForm)
                .with_arg(payload::password_form(form))
        })
    }

    fn add_history_page(&self, rows: &[UrlRow], visit_source: VisitSource) -> Result<()> {
        self.emit_with(NotificationKind::AddHistoryPage, || {
            Notification::new(NotificationKind::AddHistoryPage)
                .with_arg(payload::history_rows(rows))
                .with_arg(visit_source.code())
        })
    }

    fn add_homepage(&self, home_page: &str) -> Result<()> {
        self.emit_with(NotificationKind::AddHomepage, || {
            Notification::new(NotificationKind::AddHomepage).with_arg(home_page)
        })
    }

    fn add_bookmarks(
        &self,
        bookmarks: &[ImportedBookmarkEntry],
        top_level_folder_name: &str,
    ) -> Result<()> {
        self.emit_with(NotificationKind::AddBookmarks, || {
            Notification::new(NotificationKind::AddBookmarks)
                .with_arg(payload::bookmarks(bookmarks))
                .with_arg(top_level_folder_name)
        })
    }

    fn add_favicons(&self, favicons: &[FaviconUsageData]) -> Result<()> {
        self.emit_with(NotificationKind::AddFavicons, || {
            Notification::new(NotificationKind::AddFavicons).with_arg(payload::favicons(favicons))
        })
    }

    fn add_autofill_form_data_entries(&self, entries: &[AutofillEntry]) -> Result<()> {
        self.emit_with(NotificationKind::AddAutofillFormDataEntries, || {
            Notification::new(NotificationKind::AddAutofillFormDataEntries)
                .with_arg(payload::autofill_entries(entries))
        })
    }

    fn add_cookies(&self, cookies: &[ImportedCookieEntry]) -> Result<()> {
        self.emit_with(NotificationKind::AddCookies, || {
            Notification::new(NotificationKind::AddCookies).with_arg(payload::cookies(cookies))
        })
    }

    /// Unlike the batch operations this fails when no sink is attached.
    fn show_warning_dialog(&self) -> Result<()> {
        let sink = self.sink().ok_or(Error::SinkDetached)?;
        tracing::debug!("Emitting {}", NotificationKind::ShowWarningDialog);
        sink.emit(Notification::new(NotificationKind::ShowWarningDialog))
    }
}
