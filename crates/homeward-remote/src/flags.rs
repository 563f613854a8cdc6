//! [`HttpFlagSource`] — remote parameter lookup over HTTP.

use std::time::Duration;

use homeward_core::store::FlagSource;
use reqwest::{Client, StatusCode};

use crate::{Error, Result};

const LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Reads named flags from a parameter endpoint: `GET <base_url>/<name>`
/// returns the raw value in the body; 404 reads as absent.
///
/// Failures here are the caller's problem —
/// [`FailureModeGate`](homeward_core::gate::FailureModeGate) is the layer
/// that absorbs them into a safe default.
#[derive(Debug, Clone)]
pub struct HttpFlagSource {
  client:   Client,
  base_url: String,
}

impl HttpFlagSource {
  pub fn new(base_url: impl Into<String>) -> Result<Self> {
    let client = Client::builder().timeout(LOOKUP_TIMEOUT).build()?;
    let base_url = base_url.into().trim_end_matches('/').to_string();
    Ok(Self { client, base_url })
  }
}

impl FlagSource for HttpFlagSource {
  type Error = Error;

  async fn get(&self, name: &str) -> Result<Option<String>> {
    let url = format!("{}/{name}", self.base_url);
    let response = self.client.get(&url).send().await?;

    if response.status() == StatusCode::NOT_FOUND {
      return Ok(None);
    }
    if !response.status().is_success() {
      return Err(Error::FlagStatus(response.status()));
    }

    // Strip surrounding whitespace so a trailing newline in the stored
    // value does not defeat the exact-match gate.
    Ok(Some(response.text().await?.trim().to_string()))
  }
}
