use std::{path::Path, time::Duration};

use log::info;
use reqwest::Client;

use crate::{
    config::ClientConfig,
    error::ClientError,
    quote::{RateReply, decode_reply},
};

/// Asks the rate server for the current dollar bid.
#[derive(Debug, Clone)]
pub struct RateClient {
    client: Client,
    url: String,
}

impl RateClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub async fn fetch_rate(&self) -> Result<RateReply, ClientError> {
        info!("Finding dollar rate in the server, url={}", self.url);

        let resp = self.client.get(&self.url).send().await?;
        if !resp.status().is_success() {
            return Err(ClientError::Status(resp.status()));
        }

        let body = resp.bytes().await?;

        Ok(decode_reply(&body))
    }
}

/// Overwrites `path` with the `Dolar: <bid>` line.
pub fn write_rate_file(path: &Path, reply: &RateReply) -> Result<(), ClientError> {
    info!("Saving in the file {}, dollar={}", path.display(), reply.dollar);

    std::fs::write(path, reply.output_line()).map_err(|source| ClientError::Write {
        path: path.to_path_buf(),
        source,
    })
}

pub async fn run(config: &ClientConfig) -> Result<RateReply, ClientError> {
    let client = RateClient::new(config.rate_url(), config.timeout)?;
    let reply = client.fetch_rate().await?;
    write_rate_file(&config.output_path, &reply)?;

    Ok(reply)
}
