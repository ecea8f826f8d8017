//! Event details entered in the wizard step before the designer.

use serde::{Deserialize, Serialize};

/// Details of the event being invited to.
///
/// Read-only to the designer. Every field may be empty; the layout engine
/// substitutes placeholders where that matters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventData {
    pub title: String,
    pub description: String,
    /// Calendar date, `YYYY-MM-DD`.
    #[serde(alias = "eventDate")]
    pub date: String,
    /// Local time of day, `HH:MM` (24h).
    #[serde(alias = "eventTime")]
    pub time: String,
    pub location: String,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    #[serde(alias = "dresscode")]
    pub dress_code: String,
    pub notes: String,
}

impl EventData {
    /// Create event data with only a title set.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Deserialize event data from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
