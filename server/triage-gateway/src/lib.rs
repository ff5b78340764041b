//! Triage Gateway
//!
//! HTTP surface around triage-core: normalization on demand, dashboard
//! aggregation over the external history store, and the external
//! predict/summarize/search calls with all-or-nothing failure collapse.
//! Bind to 127.0.0.1 by default (internal only).

pub mod client;
pub mod handlers;
pub mod state;
pub mod types;

pub use client::{ServiceClient, ServiceError};
pub use handlers::{analyze, dashboard, health, normalize_text, search};
pub use state::AppState;
