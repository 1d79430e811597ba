mod create;
mod by_id;
mod list;

use axum::{routing::get, Router};

use crate::AppState;

pub use create::PlaceBody;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_places).post(create::create_place))
        .route("/{id}", get(by_id::get_place))
}
