use std::{path::PathBuf, time::Duration};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Can't build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Upstream request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Can't read upstream body: {0}")]
    Body(#[source] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Can't open database: {0}")]
    Open(#[source] sqlx::Error),

    #[error("Can't migrate schema: {0}")]
    Migration(#[source] sqlx::Error),

    #[error("Can't insert exchange rate: {0}")]
    Insert(#[source] sqlx::Error),

    #[error("Insert exceeded {0:?}")]
    InsertTimeout(Duration),

    #[error("Can't read exchange rates: {0}")]
    Read(#[source] sqlx::Error),
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request to rate server failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Rate server replied {0}")]
    Status(reqwest::StatusCode),

    #[error("Can't write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
