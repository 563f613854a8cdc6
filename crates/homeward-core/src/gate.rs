//! The failure-mode gate — a fail-safe read of a remote feature flag.

use tracing::debug;

use crate::store::FlagSource;

/// Flag value that switches failure mode on. Anything else — including
/// absence and read errors — leaves it off.
const ENABLED_VALUE: &str = "true";

/// Decides whether the system should simulate failure, based on a single
/// named flag in a remote parameter store.
///
/// The lookup is explicitly default-valued: the flag read produces
/// `Option<String>`, and every failure path (unreachable source, missing
/// flag, unexpected value) collapses to `false`. No error ever reaches the
/// caller.
#[derive(Debug, Clone)]
pub struct FailureModeGate<F> {
  source:    F,
  flag_name: String,
}

impl<F: FlagSource> FailureModeGate<F> {
  pub fn new(source: F, flag_name: impl Into<String>) -> Self {
    Self { source, flag_name: flag_name.into() }
  }

  /// `true` only when the flag exists and its value is the literal
  /// `"true"`.
  pub async fn is_failure_mode_enabled(&self) -> bool {
    match self.source.get(&self.flag_name).await {
      Ok(Some(value)) => value == ENABLED_VALUE,
      Ok(None) => false,
      Err(err) => {
        debug!(flag = %self.flag_name, error = %err, "flag read failed, failure mode stays off");
        false
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  /// A flag source scripted with one fixed outcome.
  struct FixedFlag(Result<Option<String>, std::io::Error>);

  impl FlagSource for FixedFlag {
    type Error = std::io::Error;

    async fn get(&self, _name: &str) -> Result<Option<String>, Self::Error> {
      match &self.0 {
        Ok(v) => Ok(v.clone()),
        Err(e) => Err(std::io::Error::new(e.kind(), e.to_string())),
      }
    }
  }

  #[tokio::test]
  async fn exact_true_enables() {
    let gate = FailureModeGate::new(FixedFlag(Ok(Some("true".into()))), "errormode");
    assert!(gate.is_failure_mode_enabled().await);
  }

  #[tokio::test]
  async fn other_values_disable() {
    for value in ["false", "TRUE", "True", "1", "yes", " true"] {
      let gate =
        FailureModeGate::new(FixedFlag(Ok(Some(value.into()))), "errormode");
      assert!(!gate.is_failure_mode_enabled().await, "value {value:?}");
    }
  }

  #[tokio::test]
  async fn absent_flag_disables() {
    let gate = FailureModeGate::new(FixedFlag(Ok(None)), "errormode");
    assert!(!gate.is_failure_mode_enabled().await);
  }

  #[tokio::test]
  async fn read_error_disables() {
    let gate = FailureModeGate::new(
      FixedFlag(Err(std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        "parameter store unreachable",
      ))),
      "errormode",
    );
    assert!(!gate.is_failure_mode_enabled().await);
  }
}
