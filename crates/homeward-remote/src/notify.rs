//! [`AvailabilityNotifier`] — concurrent fan-out of the two downstream
//! availability calls with first-error-wins aggregation.

use std::time::Duration;

use homeward_core::adoption::Adoption;
use reqwest::Client;
use serde::Serialize;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::{Error, Result};

/// Each downstream call is bounded by its own 5-second timeout.
const CALL_TIMEOUT: Duration = Duration::from_secs(5);

/// Body of the status-update call. Field names are a fixed wire contract.
#[derive(Serialize)]
struct StatusUpdateRequest {
  #[serde(rename = "PetId")]
  pet_id:   String,
  #[serde(rename = "PetType")]
  pet_type: String,
}

/// Notifies downstream services that a pet's availability changed.
///
/// `notify` launches two independent tasks — a status-update PUT and a
/// probe GET — and returns the first error either one reports, or success
/// once both have finished cleanly. When an error is returned early the
/// sibling task is NOT cancelled; it runs to completion detached. Relative
/// completion order between the two calls is unspecified.
#[derive(Debug, Clone)]
pub struct AvailabilityNotifier {
  client:     Client,
  status_url: String,
  probe_url:  String,
}

impl AvailabilityNotifier {
  pub fn new(
    status_url: impl Into<String>,
    probe_url: impl Into<String>,
  ) -> Result<Self> {
    let client = Client::builder().timeout(CALL_TIMEOUT).build()?;
    Ok(Self {
      client,
      status_url: status_url.into(),
      probe_url: probe_url.into(),
    })
  }

  /// Fan out both downstream calls for `adoption`.
  ///
  /// First-error-wins: the channel carries errors from both tasks; once
  /// each task has finished its sender is dropped, so `recv` yields `None`
  /// exactly when both completed without error.
  pub async fn notify(&self, adoption: &Adoption) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<Error>(2);

    {
      let client = self.client.clone();
      let url = self.status_url.clone();
      let body = StatusUpdateRequest {
        pet_id:   adoption.pet_id.clone(),
        pet_type: adoption.pet_type.clone(),
      };
      let tx = tx.clone();
      tokio::spawn(async move {
        if let Err(err) = update_status(&client, &url, &body).await {
          warn!(error = %err, "status update call failed");
          let _ = tx.send(err).await;
        }
      });
    }

    {
      let client = self.client.clone();
      let url = self.probe_url.clone();
      let tx = tx.clone();
      tokio::spawn(async move {
        if let Err(err) = probe(&client, &url).await {
          warn!(error = %err, "probe call failed");
          let _ = tx.send(err).await;
        }
      });
    }

    // Both task senders are live; this one must go so the channel closes
    // when they finish.
    drop(tx);

    match rx.recv().await {
      Some(err) => Err(err),
      None => Ok(()),
    }
  }
}

/// PUT the availability status update and discard the response body.
///
/// Non-2xx statuses are deliberately not checked — only transport-level
/// failures (connect, timeout, body read) surface.
async fn update_status(
  client: &Client,
  url: &str,
  body: &StatusUpdateRequest,
) -> Result<()> {
  let response = client.put(url).json(body).send().await?;
  let text = response.text().await?;
  debug!(response = %text, "status update completed");
  Ok(())
}

/// GET the probe endpoint; the response is not inspected at all.
async fn probe(client: &Client, url: &str) -> Result<()> {
  client.get(url).send().await?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;
  use wiremock::{
    matchers::{body_json, method, path},
    Mock, MockServer, ResponseTemplate,
  };

  use super::*;

  fn adoption() -> Adoption {
    Adoption {
      pet_id:         "p1".into(),
      pet_type:       "puppy".into(),
      transaction_id: "t1".into(),
      adoption_date:  NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    }
  }

  /// A URL that refuses connections — port 1 is never listening.
  const DEAD_URL: &str = "http://127.0.0.1:1/";

  #[tokio::test]
  async fn both_calls_succeed() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
      .and(path("/status"))
      .and(body_json(serde_json::json!({"PetId": "p1", "PetType": "puppy"})))
      .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
      .expect(1)
      .mount(&server)
      .await;
    Mock::given(method("GET"))
      .and(path("/probe"))
      .respond_with(ResponseTemplate::new(200))
      .expect(1)
      .mount(&server)
      .await;

    let notifier = AvailabilityNotifier::new(
      format!("{}/status", server.uri()),
      format!("{}/probe", server.uri()),
    )
    .unwrap();

    notifier.notify(&adoption()).await.unwrap();
  }

  #[tokio::test]
  async fn status_failure_surfaces_while_probe_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/probe"))
      .respond_with(ResponseTemplate::new(200))
      .mount(&server)
      .await;

    let notifier =
      AvailabilityNotifier::new(DEAD_URL, format!("{}/probe", server.uri()))
        .unwrap();

    let err = notifier.notify(&adoption()).await.unwrap_err();
    assert!(matches!(err, Error::Http(_)));
  }

  #[tokio::test]
  async fn probe_failure_surfaces_while_status_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
      .and(path("/status"))
      .respond_with(ResponseTemplate::new(200))
      .mount(&server)
      .await;

    let notifier =
      AvailabilityNotifier::new(format!("{}/status", server.uri()), DEAD_URL)
        .unwrap();

    let err = notifier.notify(&adoption()).await.unwrap_err();
    assert!(matches!(err, Error::Http(_)));
  }

  #[tokio::test]
  async fn both_failing_always_returns_an_error() {
    let notifier = AvailabilityNotifier::new(DEAD_URL, DEAD_URL).unwrap();

    // Whichever side loses the race, the result must never be success.
    for _ in 0..10 {
      assert!(notifier.notify(&adoption()).await.is_err());
    }
  }

  #[tokio::test]
  async fn non_2xx_status_is_not_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
      .and(path("/status"))
      .respond_with(ResponseTemplate::new(500))
      .mount(&server)
      .await;
    Mock::given(method("GET"))
      .and(path("/probe"))
      .respond_with(ResponseTemplate::new(503))
      .mount(&server)
      .await;

    let notifier = AvailabilityNotifier::new(
      format!("{}/status", server.uri()),
      format!("{}/probe", server.uri()),
    )
    .unwrap();

    // Only transport errors count as faults.
    notifier.notify(&adoption()).await.unwrap();
  }
}
