use std::time::Duration;

use log::info;
use reqwest::Client;

use crate::{error::FetchError, exchange_rate::ExchangeRateRecord, quote::decode_envelope};

/// Pulls the current USD-BRL quote from the upstream API.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    url: String,
}

impl Fetcher {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub async fn fetch(&self) -> Result<ExchangeRateRecord, FetchError> {
        info!("Finding dollar rate on the internet, url={}", self.url);

        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(FetchError::Request)?;
        let body = resp.bytes().await.map_err(FetchError::Body)?;

        Ok(decode_envelope(&body))
    }
}
