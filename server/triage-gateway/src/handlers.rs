//! HTTP handlers for the triage gateway.

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use triage_core::{aggregate, normalize, parse_structured_log, DashboardSnapshot, IncidentDraft};

use crate::client::ServiceError;
use crate::state::AppState;
use crate::types::{AnalyzeResponse, ErrorBody, NormalizeRequest, SearchRequest, SearchResponse};

type Failure = (StatusCode, Json<ErrorBody>);

pub async fn health() -> &'static str {
  "ok"
}

/// Normalize pasted or record-shaped incident text into a draft. Total:
/// normalization cannot fail, so neither can this handler.
pub async fn normalize_text(Json(payload): Json<NormalizeRequest>) -> Json<IncidentDraft> {
  Json(draft_from(&payload))
}

/// Normalize, then classify: predict and summarize run concurrently and
/// both must succeed. One upstream failure fails the whole operation with
/// a single generic error — no partial results.
pub async fn analyze(
  State(state): State<Arc<AppState>>,
  Json(payload): Json<NormalizeRequest>,
) -> Result<Json<AnalyzeResponse>, Failure> {
  let draft = draft_from(&payload);

  let (prediction, summary) = tokio::try_join!(
    state.client.predict(&draft),
    state.client.summarize(&draft.log_text),
  )
  .map_err(upstream_failure)?;

  Ok(Json(AnalyzeResponse {
    draft,
    predicted_root_cause: prediction.predicted_root_cause,
    summary: summary.summary,
  }))
}

/// Fetch the incident history and aggregate it into a fresh snapshot. A
/// failed fetch is one retrieval failure; the aggregator is not invoked.
pub async fn dashboard(
  State(state): State<Arc<AppState>>,
) -> Result<Json<DashboardSnapshot>, Failure> {
  let records = state.client.history().await.map_err(upstream_failure)?;
  Ok(Json(aggregate(&records)))
}

/// Proxy the similar-incident search.
pub async fn search(
  State(state): State<Arc<AppState>>,
  Json(payload): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, Failure> {
  let results = state
    .client
    .search(&payload.log_text)
    .await
    .map_err(upstream_failure)?;
  Ok(Json(results))
}

fn draft_from(request: &NormalizeRequest) -> IncidentDraft {
  if request.structured {
    parse_structured_log(&request.text)
  } else {
    normalize(&request.text)
  }
}

fn upstream_failure(err: ServiceError) -> Failure {
  (
    StatusCode::BAD_GATEWAY,
    Json(ErrorBody {
      detail: err.to_string(),
    }),
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn draft_from_heuristic_path() {
    let request = NormalizeRequest {
      text: "[auth-core] CRITICAL token failures".into(),
      structured: false,
    };
    let draft = draft_from(&request);
    assert_eq!(draft.component, "auth-core");
    assert_eq!(draft.severity, "critical");
  }

  #[test]
  fn draft_from_structured_path_is_literal() {
    let request = NormalizeRequest {
      text: "2024-06-20 00:10:12,api-gateway,ERROR,surge".into(),
      structured: true,
    };
    let draft = draft_from(&request);
    assert_eq!(draft.timestamp, "2024-06-20T00:10:12");
    assert_eq!(draft.severity, "error");
  }

  #[test]
  fn upstream_failure_maps_to_bad_gateway() {
    let (status, Json(body)) = upstream_failure(ServiceError);
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body.detail, "external service call failed");
  }
}
