use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// A latitude/longitude fix in decimal degrees. No range checks are applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Parses a `"lat,lng"` pair as written into the free-text `local` field.
    pub fn parse(text: &str) -> Option<Self> {
        let (latitude, longitude) = text.split_once(',')?;
        let latitude = latitude.trim().parse::<f64>().ok()?;
        let longitude = longitude.trim().parse::<f64>().ok()?;
        if !latitude.is_finite() || !longitude.is_finite() {
            return None;
        }
        Some(Self { latitude, longitude })
    }
}

/// A stored place. `id` and `created_at` are always assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    #[serde(alias = "_id")]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(flatten)]
    pub location: Coordinates,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,

    // legacy registro fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub laboratory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captured_at: Option<String>,
}

/// Validated create input, independent of which route set it arrived on.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecord {
    pub title: String,
    pub description: String,
    pub location: Coordinates,
    pub photo: Option<String>,
    pub site: Option<String>,
    pub laboratory: Option<String>,
    pub captured_at: Option<String>,
}

impl NewRecord {
    pub fn new(title: String, description: String, location: Coordinates) -> Self {
        Self {
            title,
            description,
            location,
            photo: None,
            site: None,
            laboratory: None,
            captured_at: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{0} is required")]
pub struct MissingField(pub &'static str);

/// Whitespace-only text counts as missing. Accepted text is returned exactly as given.
pub fn required_text(field: &'static str, value: Option<String>) -> Result<String, MissingField> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(MissingField(field)),
    }
}
