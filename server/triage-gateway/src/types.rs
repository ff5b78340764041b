//! Request/response types for the gateway surface and the external
//! classification services.

use serde::{Deserialize, Serialize};
use triage_core::IncidentDraft;

// ---------------------------------------------------------------------------
// Inbound (what callers send us)
// ---------------------------------------------------------------------------

/// Raw incident text to normalize. `structured` selects the literal
/// record-shaped parse instead of the heuristics.
#[derive(Debug, Deserialize)]
pub struct NormalizeRequest {
  pub text: String,
  #[serde(default)]
  pub structured: bool,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
  pub log_text: String,
}

// ---------------------------------------------------------------------------
// Outbound (what we answer)
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
  pub draft: IncidentDraft,
  pub predicted_root_cause: String,
  pub summary: String,
}

/// Generic error body; upstream failure details never reach the caller.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
  pub detail: String,
}

// ---------------------------------------------------------------------------
// External service contract (responses we consume)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct PredictResponse {
  pub predicted_root_cause: String,
}

#[derive(Debug, Deserialize)]
pub struct SummarizeResponse {
  pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarIncident {
  pub log_text: String,
  pub root_cause: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
  pub similar_incidents: Vec<SimilarIncident>,
}
