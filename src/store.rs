//! Persistence for place records.
//!
//! Records live in a single `records` table. The store only ever inserts; rows are
//! never updated or deleted, and listing returns them in insertion (`rowid`) order.

use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use time::{format_description::well_known::Rfc3339, OffsetDateTime};
use uuid::Uuid;

use crate::record::{Coordinates, NewRecord, Record};

const CREATE_RECORDS: &str = r#"
CREATE TABLE IF NOT EXISTS records (
    id          TEXT PRIMARY KEY NOT NULL,
    title       TEXT NOT NULL,
    description TEXT NOT NULL,
    latitude    REAL NOT NULL,
    longitude   REAL NOT NULL,
    photo       TEXT,
    created_at  TEXT NOT NULL,
    site        TEXT,
    laboratory  TEXT,
    captured_at TEXT
)"#;

const SELECT_RECORD: &str = "SELECT id,title,description,latitude,longitude,photo,created_at,site,laboratory,captured_at FROM records";

type RecordRow = (
    String,
    String,
    String,
    f64,
    f64,
    Option<String>,
    String,
    Option<String>,
    Option<String>,
    Option<String>,
);

pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(16)
        .connect(database_url)
        .await
}

/// A private in-memory database. Pinned to a single connection that is never
/// recycled, since every sqlite `:memory:` connection is its own database.
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
}

pub async fn migrate(db_pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_RECORDS).execute(db_pool).await?;
    Ok(())
}

pub async fn insert_record(db_pool: &SqlitePool, new: NewRecord) -> Result<Record, sqlx::Error> {
    let id = Uuid::now_v7();
    let created_at = OffsetDateTime::now_utc();
    let created_at_text = created_at
        .format(&Rfc3339)
        .map_err(|err| sqlx::Error::Encode(err.into()))?;

    sqlx::query("INSERT INTO records (id,title,description,latitude,longitude,photo,created_at,site,laboratory,captured_at) VALUES (?,?,?,?,?,?,?,?,?,?)")
        .bind(id.to_string())
        .bind(&new.title)
        .bind(&new.description)
        .bind(new.location.latitude)
        .bind(new.location.longitude)
        .bind(&new.photo)
        .bind(&created_at_text)
        .bind(&new.site)
        .bind(&new.laboratory)
        .bind(&new.captured_at)
        .execute(db_pool)
        .await?;

    tracing::info!(%id, title = %new.title, "record created");

    Ok(Record {
        id,
        title: new.title,
        description: new.description,
        location: new.location,
        photo: new.photo,
        created_at,
        site: new.site,
        laboratory: new.laboratory,
        captured_at: new.captured_at,
    })
}

pub async fn list_records(db_pool: &SqlitePool) -> Result<Vec<Record>, sqlx::Error> {
    let rows: Vec<RecordRow> = sqlx::query_as(&format!("{SELECT_RECORD} ORDER BY rowid"))
        .fetch_all(db_pool)
        .await?;
    tracing::debug!(count = rows.len(), "listing records");

    rows.into_iter().map(record_from_row).collect()
}

pub async fn find_record(db_pool: &SqlitePool, id: Uuid) -> Result<Option<Record>, sqlx::Error> {
    let row: Option<RecordRow> = sqlx::query_as(&format!("{SELECT_RECORD} WHERE id=?"))
        .bind(id.to_string())
        .fetch_optional(db_pool)
        .await?;
    tracing::debug!(%id, found = row.is_some(), "record lookup");

    row.map(record_from_row).transpose()
}

fn record_from_row(
    (id, title, description, latitude, longitude, photo, created_at, site, laboratory, captured_at): RecordRow,
) -> Result<Record, sqlx::Error> {
    Ok(Record {
        id: Uuid::parse_str(&id).map_err(|err| sqlx::Error::Decode(err.into()))?,
        title,
        description,
        location: Coordinates { latitude, longitude },
        photo,
        created_at: OffsetDateTime::parse(&created_at, &Rfc3339)
            .map_err(|err| sqlx::Error::Decode(err.into()))?,
        site,
        laboratory,
        captured_at,
    })
}
