//! Error type for `homeward-remote`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("http transport error: {0}")]
  Http(#[from] reqwest::Error),

  #[error("flag source returned {0}")]
  FlagStatus(reqwest::StatusCode),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
