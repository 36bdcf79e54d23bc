use crate::Result;
use super::bundle::ImportBundle;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub struct BundleReader;

impl BundleReader {
    /// Read and parse an import bundle from the given path
    pub fn from_file(path: &Path) -> Result<ImportBundle> {
        tracing::debug!("Reading import bundle from: {}", path.display());

        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let bundle: ImportBundle = serde_json::from_reader(reader)?;
        Self::check(&bundle);

        tracing::info!(
            "Parsed import bundle with {} notification(s) from {}",
            bundle.batch_count(),
            path.display()
        );

        Ok(bundle)
    }

    /// Parse an import bundle from a JSON string
    pub fn from_str(content: &str) -> Result<ImportBundle> {
        tracing::debug!("Parsing import bundle from string");

        let bundle: ImportBundle = serde_json::from_str(content)?;
        Self::check(&bundle);

        tracing::info!(
            "Parsed import bundle with {} notification(s)",
            bundle.batch_count()
        );

        Ok(bundle)
    }

    // Record contents pass through uninterpreted; suspicious batches are only logged.
    fn check(bundle: &ImportBundle) {
        if let Some(history) = &bundle.history {
            if history.rows.is_empty() {
                tracing::warn!("History batch contains no rows");
            }
        }

        if let Some(cookies) = &bundle.cookies {
            let hostless = cookies.iter().filter(|c| c.host.is_empty()).count();
            if hostless > 0 {
                tracing::warn!("{} cookie(s) have an empty host", hostless);
            }
        }

        if bundle.is_empty() {
            tracing::warn!("Import bundle contains no batches");
        }
    }
}
