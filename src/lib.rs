pub mod appresult;
pub mod client;
pub mod config;
pub mod logging;
pub mod places;
pub mod record;
pub mod registro;
pub mod store;

use axum::{extract::FromRef, Router};
use sqlx::SqlitePool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use appresult::{AppError, AppResult};
pub use record::{Coordinates, MissingField, NewRecord, Record};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub db_pool: SqlitePool,
}

/// Builds the full HTTP surface: the English `places` routes (also mounted under
/// `/api/places`, where the mobile app looks for them) and the `registro` route set.
pub fn app(app_state: AppState) -> Router {
    Router::new()
        .nest("/places", places::router())
        .nest("/api/places", places::router())
        .nest("/registro", registro::router())

        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
