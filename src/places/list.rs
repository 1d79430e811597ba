use axum::{debug_handler, extract::State, Json};
use sqlx::SqlitePool;

use crate::{record::Record, store, AppResult, AppState};

#[debug_handler(state = AppState)]
pub(crate) async fn list_places(
    State(db_pool): State<SqlitePool>,
) -> AppResult<Json<Vec<Record>>> {
    Ok(Json(store::list_records(&db_pool).await?))
}
