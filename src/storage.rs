//! SQLite persistence for fetched exchange rates.
//!
//! The database file is opened fresh for every save. Saves are serialized by
//! an in-process lock so concurrent requests never race on the file.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use log::info;
use sqlx::{Connection, SqliteConnection, sqlite::SqliteConnectOptions};
use tokio::{sync::Mutex, time::timeout};

use crate::{config::DEFAULT_INSERT_TIMEOUT, error::StorageError, exchange_rate::ExchangeRateRecord};

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS exchange_rates (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        code TEXT NOT NULL,
        codein TEXT NOT NULL,
        name TEXT NOT NULL,
        high TEXT NOT NULL,
        low TEXT NOT NULL,
        var_bid TEXT NOT NULL,
        pct_change TEXT NOT NULL,
        bid TEXT NOT NULL,
        ask TEXT NOT NULL,
        timestamp TEXT NOT NULL,
        create_date TEXT NOT NULL
    )
"#;

#[derive(Debug)]
pub struct Storage {
    path: PathBuf,
    insert_timeout: Duration,
    write_lock: Mutex<()>,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            insert_timeout: DEFAULT_INSERT_TIMEOUT,
            write_lock: Mutex::new(()),
        }
    }

    pub fn with_insert_timeout(mut self, insert_timeout: Duration) -> Self {
        self.insert_timeout = insert_timeout;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the `exchange_rates` table if it is missing. Safe to call repeatedly.
    pub async fn migrate(&self) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        let mut conn = self.open().await?;
        migrate(&mut conn).await
    }

    /// Inserts `record` and returns it with the id assigned by SQLite.
    pub async fn save(&self, record: &ExchangeRateRecord) -> Result<ExchangeRateRecord, StorageError> {
        info!("Saving in database file {}...", self.path.display());

        let _guard = self.write_lock.lock().await;
        let mut conn = self.open().await?;
        migrate(&mut conn).await?;

        let id = timeout(self.insert_timeout, insert(&mut conn, record))
            .await
            .map_err(|_| StorageError::InsertTimeout(self.insert_timeout))?
            .map_err(StorageError::Insert)?;

        Ok(record.with_id(id))
    }

    pub async fn records(&self) -> Result<Vec<ExchangeRateRecord>, StorageError> {
        let mut conn = self.open().await?;
        migrate(&mut conn).await?;

        sqlx::query_as::<_, ExchangeRateRecord>("SELECT * FROM exchange_rates ORDER BY id")
            .fetch_all(&mut conn)
            .await
            .map_err(StorageError::Read)
    }

    async fn open(&self) -> Result<SqliteConnection, StorageError> {
        let options = SqliteConnectOptions::new()
            .filename(&self.path)
            .create_if_missing(true);

        SqliteConnection::connect_with(&options)
            .await
            .map_err(StorageError::Open)
    }
}

async fn migrate(conn: &mut SqliteConnection) -> Result<(), StorageError> {
    sqlx::query(CREATE_TABLE)
        .execute(&mut *conn)
        .await
        .map_err(StorageError::Migration)?;

    Ok(())
}

async fn insert(conn: &mut SqliteConnection, record: &ExchangeRateRecord) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO exchange_rates
            (code, codein, name, high, low, var_bid, pct_change, bid, ask, timestamp, create_date)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&record.code)
    .bind(&record.codein)
    .bind(&record.name)
    .bind(&record.high)
    .bind(&record.low)
    .bind(&record.var_bid)
    .bind(&record.pct_change)
    .bind(&record.bid)
    .bind(&record.ask)
    .bind(&record.timestamp)
    .bind(&record.create_date)
    .execute(&mut *conn)
    .await?;

    Ok(result.last_insert_rowid())
}
