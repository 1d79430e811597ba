use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::record::{required_text, Coordinates, MissingField, NewRecord, Record};

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistroBody {
    pub titulo: Option<String>,
    pub descricao: Option<String>,
    pub local: Option<String>,
    pub foto: Option<String>,
    pub data_hora: Option<String>,
    pub laboratorio: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl RegistroBody {
    /// Explicit `latitude`/`longitude` win; otherwise `local` is read as `"lat,lng"`.
    /// `local` itself is always kept verbatim as the record's site.
    pub fn into_new_record(self) -> Result<NewRecord, MissingField> {
        let title = required_text("titulo", self.titulo)?;
        let description = required_text("descricao", self.descricao)?;

        let location = match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Coordinates { latitude, longitude },
            _ => self
                .local
                .as_deref()
                .and_then(Coordinates::parse)
                .ok_or(MissingField("local"))?,
        };

        Ok(NewRecord {
            title,
            description,
            location,
            photo: self.foto,
            site: self.local,
            laboratory: self.laboratorio,
            captured_at: self.data_hora,
        })
    }
}

/// A record as rendered on the `registro` routes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registro {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub titulo: String,
    pub descricao: String,
    pub local: String,
    pub foto: Option<String>,
    pub data_hora: Option<String>,
    pub laboratorio: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<Record> for Registro {
    fn from(record: Record) -> Self {
        let Coordinates { latitude, longitude } = record.location;
        Self {
            id: record.id,
            titulo: record.title,
            descricao: record.description,
            local: record.site.unwrap_or_else(|| format!("{latitude},{longitude}")),
            foto: record.photo,
            data_hora: record.captured_at,
            laboratorio: record.laboratory,
            latitude,
            longitude,
            created_at: record.created_at,
        }
    }
}
