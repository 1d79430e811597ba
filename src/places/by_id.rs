use axum::{debug_handler, extract::{Path, State}, Json};
use sqlx::SqlitePool;

use crate::{appresult::parse_id, record::Record, store, AppError, AppResult, AppState};

#[debug_handler(state = AppState)]
pub(crate) async fn get_place(
    State(db_pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> AppResult<Json<Record>> {
    let id = parse_id(&id)?;

    let Some(record) = store::find_record(&db_pool, id).await? else {
        return Err(AppError::not_found());
    };

    Ok(Json(record))
}
