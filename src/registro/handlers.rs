use axum::{debug_handler, extract::{rejection::JsonRejection, Path, State}, http::StatusCode, Json};
use sqlx::SqlitePool;

use crate::{appresult::parse_id, store, AppError, AppResult, AppState};

use super::schema::{Registro, RegistroBody};

#[debug_handler(state = AppState)]
pub(crate) async fn create_registro(
    State(db_pool): State<SqlitePool>,
    body: Result<Json<RegistroBody>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Registro>)> {
    let Json(body) = body?;
    let new = body.into_new_record()?;
    let record = store::insert_record(&db_pool, new).await?;

    Ok((StatusCode::CREATED, Json(record.into())))
}

#[debug_handler(state = AppState)]
pub(crate) async fn list_registros(
    State(db_pool): State<SqlitePool>,
) -> AppResult<Json<Vec<Registro>>> {
    let records = store::list_records(&db_pool).await?;
    Ok(Json(records.into_iter().map(Registro::from).collect()))
}

#[debug_handler(state = AppState)]
pub(crate) async fn get_registro(
    State(db_pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> AppResult<Json<Registro>> {
    let id = parse_id(&id)?;

    let Some(record) = store::find_record(&db_pool, id).await? else {
        return Err(AppError::not_found());
    };

    Ok(Json(record.into()))
}
