//! External job posting record. Every field is optional and defensively
//! coerced: a malformed posting must never abort scoring the rest of a batch.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Sentinel shown for absent posting fields.
pub const UNSPECIFIED: &str = "Not specified";

/// One job listing as received from discovery or fabrication.
///
/// Non-string JSON values for any field deserialize to `None` instead of
/// failing the batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(default, deserialize_with = "coerce_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "coerce_string")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "coerce_string")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "coerce_string")]
    pub salary: Option<String>,
    #[serde(default, deserialize_with = "coerce_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "coerce_string")]
    pub source: Option<String>,
    #[serde(default, deserialize_with = "coerce_string")]
    pub contact_email: Option<String>,
}

impl JobPosting {
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(UNSPECIFIED)
    }

    pub fn display_company(&self) -> &str {
        self.company.as_deref().unwrap_or(UNSPECIFIED)
    }

    pub fn display_location(&self) -> &str {
        self.location.as_deref().unwrap_or(UNSPECIFIED)
    }

    pub fn display_salary(&self) -> &str {
        self.salary.as_deref().unwrap_or(UNSPECIFIED)
    }

    pub fn display_source(&self) -> &str {
        self.source.as_deref().unwrap_or(UNSPECIFIED)
    }

    /// Lowercased concatenation of title, company, and description; the text
    /// every keyword sub-score scans.
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {}",
            self.title.as_deref().unwrap_or(""),
            self.company.as_deref().unwrap_or(""),
            self.description.as_deref().unwrap_or(""),
        )
        .to_lowercase()
    }
}

fn coerce_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => Some(text),
        _ => None,
    })
}
