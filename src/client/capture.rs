use std::{collections::VecDeque, fmt};

use crate::record::{Coordinates, MissingField, Record};

use super::{
    api::ApiClient,
    capability::{CameraProvider, Capability, LocationProvider, Outcome},
    error::ClientError,
    state::{PlaceForm, PlaceList},
};

/// A user-visible alert raised by the capture screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    LoadFailed(String),
    PermissionDenied(Capability),
    CapabilityFailed(Capability, String),
    MissingField(MissingField),
    SaveFailed(String),
    ConnectionFailed(String),
    Saved,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Notice::LoadFailed(_) => write!(f, "Could not load the saved places."),
            Notice::PermissionDenied(capability) => {
                write!(f, "Permission denied: {capability} access is required.")
            }
            Notice::CapabilityFailed(capability, reason) => {
                write!(f, "The {capability} request failed: {reason}")
            }
            Notice::MissingField(_) => {
                write!(f, "Fill in title, description and location.")
            }
            Notice::SaveFailed(_) => write!(f, "Failed to save the place."),
            Notice::ConnectionFailed(_) => write!(f, "Could not connect to the backend."),
            Notice::Saved => write!(f, "Place saved."),
        }
    }
}

/// The capture screen: a form, two capabilities, and the list of known places.
pub struct CaptureSession<L, C> {
    api: ApiClient,
    location: L,
    camera: C,
    form: PlaceForm,
    places: PlaceList,
    notices: VecDeque<Notice>,
}

impl<L: LocationProvider, C: CameraProvider> CaptureSession<L, C> {
    pub fn new(api: ApiClient, location: L, camera: C) -> Self {
        Self {
            api,
            location,
            camera,
            form: PlaceForm::default(),
            places: PlaceList::default(),
            notices: VecDeque::new(),
        }
    }

    pub fn form(&self) -> &PlaceForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut PlaceForm {
        &mut self.form
    }

    pub fn places(&self) -> &PlaceList {
        &self.places
    }

    pub fn drain_notices(&mut self) -> Vec<Notice> {
        self.notices.drain(..).collect()
    }

    fn notify(&mut self, notice: Notice) {
        tracing::debug!(?notice, "notice raised");
        self.notices.push_back(notice);
    }

    /// Fetches every place once and replaces the list. On failure the list is left as is.
    pub async fn load(&mut self) -> bool {
        match self.api.list_places().await {
            Ok(records) => {
                tracing::info!(count = records.len(), "places loaded");
                self.places.replace(records);
                true
            }
            Err(err) => {
                tracing::warn!(%err, "loading places failed");
                self.notify(Notice::LoadFailed(err.to_string()));
                false
            }
        }
    }

    pub async fn request_location(&mut self) -> Option<Coordinates> {
        match self.location.current_position().await {
            Outcome::Fulfilled(fix) => {
                self.form.location = Some(fix);
                Some(fix)
            }
            Outcome::Denied => {
                self.notify(Notice::PermissionDenied(Capability::Location));
                None
            }
            Outcome::Failed(reason) => {
                self.notify(Notice::CapabilityFailed(Capability::Location, reason));
                None
            }
        }
    }

    pub async fn take_photo(&mut self) -> bool {
        match self.camera.take_photo().await {
            Outcome::Fulfilled(photo) => {
                self.form.photo = Some(photo.into_payload());
                true
            }
            Outcome::Denied => {
                self.notify(Notice::PermissionDenied(Capability::Camera));
                false
            }
            Outcome::Failed(reason) => {
                self.notify(Notice::CapabilityFailed(Capability::Camera, reason));
                false
            }
        }
    }

    /// Validates the form locally and posts it. A missing field stops here without
    /// touching the network. On success the new record heads the list and the form
    /// is cleared; on failure the form keeps what was typed.
    pub async fn submit(&mut self) -> Option<Record> {
        let place = match self.form.validate() {
            Ok(place) => place,
            Err(missing) => {
                self.notify(Notice::MissingField(missing));
                return None;
            }
        };

        match self.api.create_place(&place).await {
            Ok(record) => {
                self.places.apply(record.clone());
                self.form.clear();
                self.notify(Notice::Saved);
                Some(record)
            }
            Err(err @ ClientError::Network(_)) => {
                tracing::error!(%err, "saving place failed");
                self.notify(Notice::ConnectionFailed(err.to_string()));
                None
            }
            Err(err) => {
                tracing::error!(%err, "saving place failed");
                self.notify(Notice::SaveFailed(err.to_string()));
                None
            }
        }
    }
}
