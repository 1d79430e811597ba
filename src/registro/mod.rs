//! The `registro` route set: the same record collection exposed under the field
//! names of the first version of the capture form (`titulo`, `descricao`, `local`,
//! `foto`, `dataHora`, `laboratorio`). Only the field mapping differs; storage and
//! validation are shared with `places`.

mod handlers;
mod schema;

use axum::{routing::get, Router};

use crate::AppState;

pub use schema::{Registro, RegistroBody};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_registros).post(handlers::create_registro))
        .route("/{id}", get(handlers::get_registro))
}
