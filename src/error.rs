//! .
//!
//! Packing and composition never fail: a region too small for its circles simply
//! ends up with fewer children. Errors only come from the edges of the crate,
//! configuration and files.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid configuration: {0}")]
  InvalidConfiguration(String),

  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  #[cfg(feature = "drawing")]
  #[cfg_attr(docsrs, doc(cfg(feature = "drawing")))]
  #[error("image error: {0}")]
  Image(#[from] image::ImageError),
}

impl Error {
  pub fn invalid(msg: impl Into<String>) -> Self {
    Error::InvalidConfiguration(msg.into())
  }
}

/// Convenient wrapper around `std::Result`.
pub type Result<T> = std::result::Result<T, Error>;
