//! Triage Incident Core — deterministic, rule-based.
//!
//! Normalizes raw incident log text into structured drafts, aggregates
//! persisted incident records into dashboard analytics, and manages live
//! duplex log sessions with inline classification.
//!
//! No ML, no DB; root-cause prediction, summarization, search, and history
//! storage are external services. This crate only prepares their inputs and
//! folds their outputs.

pub mod aggregate;
pub mod buffer;
pub mod error;
pub mod normalize;
pub mod session;
pub mod transport;
pub mod types;

pub use aggregate::aggregate;
pub use buffer::RollingBuffer;
pub use error::TransportError;
pub use normalize::{normalize, parse_structured_log};
pub use session::{SessionState, StreamSession, LIVE_LOG_CAPACITY};
pub use transport::{TcpLineTransport, Transport};
pub use types::{DashboardSnapshot, IncidentDraft, IncidentRecord, Severity, StreamEvent};
