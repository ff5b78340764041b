//! Live-stream session: an explicit state machine over one duplex log
//! connection, with a bounded rolling history and last-known classification.

use tracing::{debug, warn};

use crate::buffer::RollingBuffer;
use crate::error::TransportError;
use crate::transport::Transport;
use crate::types::StreamEvent;

/// Raw log lines retained per live session.
pub const LIVE_LOG_CAPACITY: usize = 10;

/// Session lifecycle. Transitions only move forward:
/// `Disconnected -> Connecting -> Open -> {Closed, Errored}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
  Disconnected,
  Connecting,
  Open,
  Closed,
  Errored,
}

/// One live monitoring session over a duplex transport.
///
/// Single-writer: every mutation goes through `&mut self`, so the owning
/// task is the only inbound-message handler and events are folded in strict
/// arrival order. An errored session never reconnects; create a new session
/// to retry.
pub struct StreamSession<T: Transport> {
  state: SessionState,
  transport: Option<T>,
  recent: RollingBuffer,
  last_summary: String,
  last_root_cause: String,
}

impl<T: Transport> StreamSession<T> {
  pub fn new() -> Self {
    Self {
      state: SessionState::Disconnected,
      transport: None,
      recent: RollingBuffer::new(LIVE_LOG_CAPACITY),
      last_summary: String::new(),
      last_root_cause: String::new(),
    }
  }

  /// Establish the connection. Only meaningful from `Disconnected`; the
  /// session is `Connecting` while `dial` is pending, then `Open` on
  /// success or `Errored` on failure.
  pub async fn connect<F>(&mut self, dial: F)
  where
    F: std::future::Future<Output = Result<T, TransportError>>,
  {
    if self.state != SessionState::Disconnected {
      return;
    }
    self.state = SessionState::Connecting;
    match dial.await {
      Ok(transport) => {
        self.transport = Some(transport);
        self.state = SessionState::Open;
      }
      Err(e) => {
        warn!(error = %e, "live session connect failed");
        self.state = SessionState::Errored;
      }
    }
  }

  /// Send one raw log line, trimmed. Silent no-op when the trimmed line is
  /// empty or the session is not `Open` — nothing is queued for later. A
  /// transport failure moves the session to `Errored` instead of returning
  /// an error.
  pub async fn send(&mut self, line: &str) {
    let trimmed = line.trim();
    if trimmed.is_empty() || self.state != SessionState::Open {
      return;
    }
    let Some(transport) = self.transport.as_mut() else {
      return;
    };
    if let Err(e) = transport.send_line(trimmed).await {
      warn!(error = %e, "live session send failed");
      self.release(SessionState::Errored).await;
    }
  }

  /// Wait for the next classified event. Returns `None` once the session
  /// leaves `Open`: orderly peer close lands in `Closed`, transport failure
  /// in `Errored`.
  ///
  /// Payloads that fail to decode are dropped with a diagnostic log only;
  /// the session stays `Open`. A decoded event appends its raw log to the
  /// rolling history (evicting the oldest entry at capacity) and replaces
  /// the last-known summary and root cause wholesale.
  pub async fn next_event(&mut self) -> Option<StreamEvent> {
    loop {
      if self.state != SessionState::Open {
        return None;
      }
      let transport = self.transport.as_mut()?;
      match transport.recv_line().await {
        None => {
          self.release(SessionState::Closed).await;
          return None;
        }
        Some(Err(e)) => {
          warn!(error = %e, "live session receive failed");
          self.release(SessionState::Errored).await;
          return None;
        }
        Some(Ok(payload)) => match serde_json::from_str::<StreamEvent>(&payload) {
          Err(e) => {
            debug!(error = %e, "dropping undecodable stream payload");
            continue;
          }
          Ok(event) => {
            self.fold(&event);
            return Some(event);
          }
        },
      }
    }
  }

  /// Close the session. Safe from any state and idempotent; the underlying
  /// connection is released exactly once. An errored session stays
  /// `Errored`.
  pub async fn close(&mut self) {
    let next = match self.state {
      SessionState::Errored => SessionState::Errored,
      _ => SessionState::Closed,
    };
    self.release(next).await;
  }

  pub fn state(&self) -> SessionState {
    self.state
  }

  /// The retained raw log lines, oldest first.
  pub fn recent_logs(&self) -> Vec<String> {
    self.recent.to_vec()
  }

  pub fn last_summary(&self) -> &str {
    &self.last_summary
  }

  pub fn last_root_cause(&self) -> &str {
    &self.last_root_cause
  }

  fn fold(&mut self, event: &StreamEvent) {
    self.recent.push(event.raw_log.clone());
    self.last_summary = event.summary.clone();
    self.last_root_cause = event.root_cause.clone();
  }

  /// Release the transport (at most once) and move to `next`. After this,
  /// no inbound message can mutate session state.
  async fn release(&mut self, next: SessionState) {
    if let Some(mut transport) = self.transport.take() {
      transport.close().await;
    }
    self.state = next;
  }
}

impl<T: Transport> Default for StreamSession<T> {
  fn default() -> Self {
    Self::new()
  }
}
