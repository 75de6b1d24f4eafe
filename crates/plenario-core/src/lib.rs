//! Plenário Core — configuration, errors, response envelopes.

pub mod config;
pub mod envelope;
pub mod error;

pub use config::PlenarioConfig;
pub use error::{Error, Result};
