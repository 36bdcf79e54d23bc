use crate::Result;
use crate::target::ImportTarget;
use profile_bridge_core::import::{BundleReader, ImportBundle};
use std::path::Path;

/// Deliver every batch of a bundle to `target`, in importer order
///
/// Absent batches are skipped. Returns the number of calls made on `target`.
pub fn replay<T: ImportTarget + ?Sized>(bundle: &ImportBundle, target: &T) -> Result<usize> {
    let mut calls = 0;

    if let Some(home_page) = &bundle.homepage {
        target.add_homepage(home_page)?;
        calls += 1;
    }

    if let Some(bookmarks) = &bundle.bookmarks {
        target.add_bookmarks(&bookmarks.entries, &bookmarks.top_level_folder_name)?;
        calls += 1;
    }

    if let Some(favicons) = &bundle.favicons {
        target.add_favicons(favicons)?;
        calls += 1;
    }

    if let Some(history) = &bundle.history {
        target.add_history_page(&history.rows, history.visit_source)?;
        calls += 1;
    }

    for form in &bundle.password_forms {
        target.add_password_form(form)?;
        calls += 1;
    }

    if let Some(entries) = &bundle.autofill_entries {
        target.add_autofill_form_data_entries(entries)?;
        calls += 1;
    }

    if let Some(cookies) = &bundle.cookies {
        target.add_cookies(cookies)?;
        calls += 1;
    }

    if bundle.show_warning {
        target.show_warning_dialog()?;
        calls += 1;
    }

    tracing::debug!("Replayed {} import call(s)", calls);
    Ok(calls)
}

/// Read a bundle file and replay it into `target`
pub fn replay_file<T: ImportTarget + ?Sized>(path: &Path, target: &T) -> Result<usize> {
    let bundle = BundleReader::from_file(path)?;
    replay(&bundle, target)
}
