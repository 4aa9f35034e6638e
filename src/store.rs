use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Open (or create) the occupancy database and make sure the single
/// counter row exists.
pub async fn connect(database_file: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(database_file)
        .create_if_missing(true);

    // one connection: the store is a single row, and `:memory:` databases
    // are per-connection
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    init(&pool).await?;
    Ok(pool)
}

async fn init(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS occupancy (
            id INTEGER PRIMARY KEY,
            count INTEGER NOT NULL,
            updated_at TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    // seed the counter row exactly once; restarts keep the last count
    sqlx::query("INSERT OR IGNORE INTO occupancy (id, count, updated_at) VALUES (1, 0, ?)")
        .bind(Utc::now().to_rfc3339())
        .execute(pool)
        .await?;

    Ok(())
}

pub async fn count(pool: &SqlitePool) -> Result<u32, sqlx::Error> {
    let row: (u32,) = sqlx::query_as("SELECT count FROM occupancy WHERE id = 1")
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}

pub async fn set_count(pool: &SqlitePool, count: u32) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE occupancy SET count = ?, updated_at = ? WHERE id = 1")
        .bind(count)
        .bind(Utc::now().to_rfc3339())
        .execute(pool)
        .await?;
    Ok(())
}
