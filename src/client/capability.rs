//! Device capabilities as single-shot providers.
//!
//! Each call asks once and answers once: the value, a permission refusal, or a
//! failure message. Nothing is subscribed to or polled.

use std::{fmt, future::Future, path::PathBuf};

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::record::Coordinates;

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Fulfilled(T),
    Denied,
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Location,
    Camera,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Capability::Location => write!(f, "location"),
            Capability::Camera => write!(f, "camera"),
        }
    }
}

pub trait LocationProvider {
    fn current_position(&mut self) -> impl Future<Output = Outcome<Coordinates>> + Send;
}

pub trait CameraProvider {
    fn take_photo(&mut self) -> impl Future<Output = Outcome<Photo>> + Send;
}

/// What the camera hands back: either the encoded image or a reference to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Photo {
    /// Raw base64 of a JPEG, without the data-URI prefix.
    Base64(String),
    Uri(String),
}

impl Photo {
    /// The string stored in a record's `photo` field.
    pub fn into_payload(self) -> String {
        match self {
            Photo::Base64(data) => format!("data:image/jpeg;base64,{data}"),
            Photo::Uri(uri) => uri,
        }
    }
}

/// A location provider that answers with a preset fix, or refuses when it has none.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedLocation {
    fix: Option<Coordinates>,
}

impl FixedLocation {
    pub fn granted(fix: Coordinates) -> Self {
        Self { fix: Some(fix) }
    }

    pub fn denied() -> Self {
        Self { fix: None }
    }
}

impl LocationProvider for FixedLocation {
    async fn current_position(&mut self) -> Outcome<Coordinates> {
        match self.fix {
            Some(fix) => Outcome::Fulfilled(fix),
            None => Outcome::Denied,
        }
    }
}

/// A camera backed by something already on disk or already addressable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaticCamera {
    /// Reads the file and hands it back base64-encoded.
    File(PathBuf),
    Uri(String),
    Unavailable,
}

impl CameraProvider for StaticCamera {
    async fn take_photo(&mut self) -> Outcome<Photo> {
        match self {
            StaticCamera::File(path) => match tokio::fs::read(&*path).await {
                Ok(bytes) => Outcome::Fulfilled(Photo::Base64(STANDARD.encode(bytes))),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "could not read photo");
                    Outcome::Failed(format!("could not read {}: {err}", path.display()))
                }
            },
            StaticCamera::Uri(uri) => Outcome::Fulfilled(Photo::Uri(uri.clone())),
            StaticCamera::Unavailable => Outcome::Denied,
        }
    }
}
