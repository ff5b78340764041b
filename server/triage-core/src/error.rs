//! Structured error types for the triage core.

use thiserror::Error;
use tokio_util::codec::LinesCodecError;

/// Failures at the live-connection transport layer.
///
/// These never escape [`crate::session::StreamSession`] as values; the
/// session observes them and transitions to `Errored`.
#[derive(Debug, Error)]
pub enum TransportError {
  #[error("connect: {0}")]
  Connect(String),

  #[error("io: {0}")]
  Io(#[from] std::io::Error),

  #[error("codec: {0}")]
  Codec(String),

  #[error("connection closed")]
  Closed,
}

impl From<LinesCodecError> for TransportError {
  fn from(err: LinesCodecError) -> Self {
    match err {
      LinesCodecError::Io(e) => Self::Io(e),
      LinesCodecError::MaxLineLengthExceeded => {
        Self::Codec("max line length exceeded".to_string())
      }
    }
  }
}
