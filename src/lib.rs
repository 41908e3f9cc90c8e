//! USD-BRL exchange-rate relay.
//!
//! `cotacao-server` fetches the quote from the upstream API, stores it in a
//! SQLite file and serves the bid on `/cotacao`. `cotacao-client` asks the
//! server for that bid and writes it to a text file.
//!
//! Both binaries take no arguments. With no environment set they use the fixed
//! port, URLs, file names and timeouts in [`config`]. Optional `COTACAO_*`
//! variables (or a `.env` file) override those values; see
//! [`ServerConfig::from_lookup`] and [`ClientConfig::from_lookup`] for the
//! variable names.

pub mod client;
pub mod config;
pub mod error;
pub mod exchange_rate;
pub mod fetcher;
pub mod quote;
pub mod server;
pub mod storage;

pub use client::RateClient;
pub use config::{ClientConfig, ServerConfig};
pub use error::{ClientError, FetchError, StorageError};
pub use exchange_rate::ExchangeRateRecord;
pub use fetcher::Fetcher;
pub use quote::{ExternalQuoteEnvelope, RateReply};
pub use storage::Storage;
