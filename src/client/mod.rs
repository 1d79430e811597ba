//! The capture client: the form, device capabilities and record list that sit on
//! the device side of the HTTP contract.

pub mod api;
pub mod capability;
pub mod capture;
pub mod error;
pub mod render;
pub mod state;

pub use api::{ApiClient, NewPlace};
pub use capability::{CameraProvider, Capability, FixedLocation, LocationProvider, Outcome, Photo, StaticCamera};
pub use capture::{CaptureSession, Notice};
pub use error::ClientError;
pub use state::{PlaceForm, PlaceList};
