//! Print the notification contract: every name the adapter can emit and the
//! shape of its payload.

use crate::OutputFormat;
use anyhow::Result;
use profile_bridge_core::NotificationKind;
use serde::Serialize;

/// Contract of one notification, as shown to listener authors
#[derive(Debug, Clone, Serialize)]
pub struct CategoryInfo {
    pub name: &'static str,
    /// `list`, `record`, `scalar` or `none`
    pub payload: &'static str,
    pub fields: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_argument: Option<&'static str>,
}

impl From<NotificationKind> for CategoryInfo {
    fn from(kind: NotificationKind) -> Self {
        let payload = match kind {
            NotificationKind::ShowWarningDialog => "none",
            NotificationKind::AddHomepage => "scalar",
            _ if kind.is_batch() => "list",
            _ => "record",
        };

        Self {
            name: kind.as_str(),
            payload,
            fields: kind.payload_fields().to_vec(),
            secondary_argument: kind.secondary_argument(),
        }
    }
}

pub fn contract() -> Vec<CategoryInfo> {
    NotificationKind::ALL.into_iter().map(CategoryInfo::from).collect()
}

pub fn execute(format: OutputFormat) -> Result<()> {
    tracing::debug!("Listing notification contract as {}", format.as_str());
    let categories = contract();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&categories)?);
        }
        OutputFormat::Pretty => {
            println!("Notifications ({}):", categories.len());
            println!();
            for category in &categories {
                println!("  {}", category.name);
                match category.payload {
                    "list" => println!("    payload: list of {{{}}}", category.fields.join(", ")),
                    "record" => println!("    payload: {{{}}}", category.fields.join(", ")),
                    "scalar" => println!("    payload: URL string"),
                    _ => println!("    payload: none"),
                }
                if let Some(secondary) = category.secondary_argument {
                    println!("    second argument: {}", secondary);
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_lists_every_notification() {
        let names: Vec<_> = contract().iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec![
                "add-password-form",
                "add-history-page",
                "add-homepage",
                "add-bookmarks",
                "add-favicons",
                "add-autofill-form-data-entries",
                "add-cookies",
                "show-warning-dialog",
            ]
        );
    }

    #[test]
    fn test_payload_shapes() {
        let by_name = |name: &str| contract().into_iter().find(|c| c.name == name).unwrap();

        assert_eq!(by_name("add-password-form").payload, "record");
        assert_eq!(by_name("add-homepage").payload, "scalar");
        assert_eq!(by_name("show-warning-dialog").payload, "none");

        let cookies = by_name("add-cookies");
        assert_eq!(cookies.payload, "list");
        assert!(cookies.fields.contains(&"httponly"));
        assert_eq!(
            by_name("add-bookmarks").secondary_argument,
            Some("top_level_folder_name")
        );
    }
}
