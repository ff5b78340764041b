//! Transport abstraction for the live log stream, plus the concrete
//! newline-delimited TCP implementation.

use async_trait::async_trait;
use futures::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_util::codec::{Framed, LinesCodec};

use crate::error::TransportError;

/// Longest accepted line on the live connection.
const MAX_LINE_BYTES: usize = 64 * 1024;

/// One duplex live-log connection: raw text lines out, one JSON-encoded
/// classified event per line in.
///
/// `recv_line` returning `None` means the peer closed the connection in an
/// orderly way; `Some(Err(_))` is a transport failure. `close` must be safe
/// to call once on any transport, connected or broken.
#[async_trait]
pub trait Transport: Send {
  async fn send_line(&mut self, line: &str) -> Result<(), TransportError>;
  async fn recv_line(&mut self) -> Option<Result<String, TransportError>>;
  async fn close(&mut self);
}

/// Newline-delimited duplex transport over a TCP stream.
pub struct TcpLineTransport {
  framed: Framed<TcpStream, LinesCodec>,
}

impl TcpLineTransport {
  /// Dial the live endpoint. Connection establishment (and any handshake or
  /// authentication) is entirely this layer's concern.
  pub async fn connect(addr: &str) -> Result<Self, TransportError> {
    let stream = TcpStream::connect(addr)
      .await
      .map_err(|e| TransportError::Connect(format!("{}: {}", addr, e)))?;
    Ok(Self {
      framed: Framed::new(stream, LinesCodec::new_with_max_length(MAX_LINE_BYTES)),
    })
  }
}

#[async_trait]
impl Transport for TcpLineTransport {
  async fn send_line(&mut self, line: &str) -> Result<(), TransportError> {
    self.framed.send(line).await?;
    Ok(())
  }

  async fn recv_line(&mut self) -> Option<Result<String, TransportError>> {
    self
      .framed
      .next()
      .await
      .map(|result| result.map_err(TransportError::from))
  }

  async fn close(&mut self) {
    let _ = SinkExt::<&str>::close(&mut self.framed).await;
  }
}
