use axum::{debug_handler, extract::{rejection::JsonRejection, State}, http::StatusCode, Json};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::{
    record::{required_text, Coordinates, MissingField, NewRecord, Record},
    store, AppResult, AppState,
};

/// Create body for the `places` routes. Every field is optional at the parsing
/// stage so that a missing one is reported as a missing field, not a parse error.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct PlaceBody {
    pub title: Option<String>,
    pub description: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub photo: Option<String>,
}

impl PlaceBody {
    pub fn into_new_record(self) -> Result<NewRecord, MissingField> {
        let title = required_text("title", self.title)?;
        let description = required_text("description", self.description)?;
        let (Some(latitude), Some(longitude)) = (self.latitude, self.longitude) else {
            return Err(MissingField("location"));
        };

        let mut new = NewRecord::new(title, description, Coordinates { latitude, longitude });
        new.photo = self.photo;
        Ok(new)
    }
}

#[debug_handler(state = AppState)]
pub(crate) async fn create_place(
    State(db_pool): State<SqlitePool>,
    body: Result<Json<PlaceBody>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Record>)> {
    let Json(body) = body?;
    let new = body.into_new_record()?;
    let record = store::insert_record(&db_pool, new).await?;

    Ok((StatusCode::CREATED, Json(record)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_body() -> PlaceBody {
        PlaceBody {
            title: Some("Lab A".into()),
            description: Some("Main lab".into()),
            latitude: Some(-23.55),
            longitude: Some(-46.63),
            photo: None,
        }
    }

    #[test]
    fn test_full_body_maps_to_record() {
        let new = full_body().into_new_record().expect("valid body");
        assert_eq!(new.title, "Lab A");
        assert_eq!(new.description, "Main lab");
        assert_eq!(new.location, Coordinates::new(-23.55, -46.63));
        assert_eq!(new.photo, None);
        assert_eq!(new.site, None);
    }

    #[test]
    fn test_missing_fields_are_named() {
        let body = PlaceBody { title: Some(String::new()), ..full_body() };
        assert_eq!(body.into_new_record(), Err(MissingField("title")));

        let body = PlaceBody { description: None, ..full_body() };
        assert_eq!(body.into_new_record(), Err(MissingField("description")));

        let body = PlaceBody { longitude: None, ..full_body() };
        assert_eq!(body.into_new_record(), Err(MissingField("location")));
    }

    #[test]
    fn test_text_is_not_trimmed() {
        let body = PlaceBody {
            title: Some("  Lab A ".into()),
            description: Some("Main lab\n".into()),
            photo: Some(String::new()),
            ..full_body()
        };
        let new = body.into_new_record().expect("valid body");
        assert_eq!(new.title, "  Lab A ");
        assert_eq!(new.description, "Main lab\n");
        assert_eq!(new.photo.as_deref(), Some(""));
    }

    #[test]
    fn test_photo_is_kept_inline() {
        let body = PlaceBody {
            photo: Some("data:image/jpeg;base64,/9j/4AAQ".into()),
            ..full_body()
        };
        let new = body.into_new_record().expect("valid body");
        assert_eq!(new.photo.as_deref(), Some("data:image/jpeg;base64,/9j/4AAQ"));
    }
}
