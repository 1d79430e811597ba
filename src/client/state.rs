use crate::record::{required_text, Coordinates, MissingField, Record};

use super::api::NewPlace;

/// The records shown on screen. Only the capture session owns and mutates it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceList {
    items: Vec<Record>,
}

impl PlaceList {
    /// Swaps in a freshly fetched list.
    pub fn replace(&mut self, records: Vec<Record>) {
        self.items = records;
    }

    /// Puts a just-created record at the head without refetching.
    pub fn apply(&mut self, record: Record) {
        self.items.insert(0, record);
    }

    pub fn items(&self) -> &[Record] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceForm {
    pub title: String,
    pub description: String,
    pub location: Option<Coordinates>,
    pub photo: Option<String>,
}

impl PlaceForm {
    pub fn validate(&self) -> Result<NewPlace, MissingField> {
        let title = required_text("title", Some(self.title.clone()))?;
        let description = required_text("description", Some(self.description.clone()))?;
        let Some(Coordinates { latitude, longitude }) = self.location else {
            return Err(MissingField("location"));
        };

        Ok(NewPlace {
            title,
            description,
            latitude,
            longitude,
            photo: self.photo.clone(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
