//! Outbound HTTP for Homeward: the availability fan-out notifier and the
//! remote feature-flag source.
//!
//! Everything here goes through [`reqwest`] with a per-call timeout; there
//! is no retry logic anywhere in this crate.

mod flags;
mod notify;

pub mod error;

pub use error::{Error, Result};
pub use flags::HttpFlagSource;
pub use notify::AvailabilityNotifier;
