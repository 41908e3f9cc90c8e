//! Wire shapes exchanged with the upstream API and between server and client.
//!
//! Both decoders are lenient: a body that is not valid JSON, or lacks the
//! expected keys, decodes to empty fields and a warning is logged.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::exchange_rate::ExchangeRateRecord;

pub const OUTPUT_PREFIX: &str = "Dolar: ";

#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ExternalQuoteEnvelope {
    #[serde(rename = "USDBRL")]
    pub usdbrl: ExchangeRateRecord,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct RateReply {
    pub dollar: String,
}

impl RateReply {
    pub fn new(bid: impl Into<String>) -> Self {
        Self { dollar: bid.into() }
    }

    /// Contents of the client's output file. No trailing newline.
    pub fn output_line(&self) -> String {
        format!("{OUTPUT_PREFIX}{}", self.dollar)
    }
}

pub fn decode_envelope(body: &[u8]) -> ExchangeRateRecord {
    match serde_json::from_slice::<ExternalQuoteEnvelope>(body) {
        Ok(envelope) => envelope.usdbrl,
        Err(err) => {
            warn!("Can't decode upstream quote, using empty record: {err}");
            ExchangeRateRecord::default()
        }
    }
}

pub fn decode_reply(body: &[u8]) -> RateReply {
    serde_json::from_slice(body).unwrap_or_else(|err| {
        warn!("Can't decode server reply, using empty rate: {err}");
        RateReply::default()
    })
}
