//! Client for the external classification, summarization, search, and
//! history services.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tracing::warn;

use triage_core::{IncidentDraft, IncidentRecord};

use crate::types::{PredictResponse, SearchResponse, SummarizeResponse};

/// One generic failure for every upstream problem — network, non-success
/// status, or undecodable payload. Details go to the log, never to the
/// caller.
#[derive(Debug, Error)]
#[error("external service call failed")]
pub struct ServiceError;

/// Thin HTTP client over the external service endpoints. No retry, no
/// timeout, no cancellation at this layer.
pub struct ServiceClient {
  http: reqwest::Client,
  base_url: String,
}

impl ServiceClient {
  pub fn new(base_url: impl Into<String>) -> Self {
    let base_url = base_url.into().trim_end_matches('/').to_string();
    Self {
      http: reqwest::Client::new(),
      base_url,
    }
  }

  /// `POST /predict`: draft in, predicted root cause out.
  pub async fn predict(&self, draft: &IncidentDraft) -> Result<PredictResponse, ServiceError> {
    self.post("/predict", draft).await
  }

  /// `POST /summarize`: free text in, summary out.
  pub async fn summarize(&self, text: &str) -> Result<SummarizeResponse, ServiceError> {
    self.post("/summarize", &json!({ "text": text })).await
  }

  /// `POST /search`: log text in, similar incidents out.
  pub async fn search(&self, log_text: &str) -> Result<SearchResponse, ServiceError> {
    self.post("/search", &json!({ "log_text": log_text })).await
  }

  /// `GET /history`: the full list of persisted incident records.
  pub async fn history(&self) -> Result<Vec<IncidentRecord>, ServiceError> {
    let url = format!("{}/history", self.base_url);
    let response = self
      .http
      .get(&url)
      .send()
      .await
      .map_err(|e| fail("/history", &e))?;
    decode("/history", response).await
  }

  async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ServiceError>
  where
    B: Serialize + ?Sized,
    R: DeserializeOwned,
  {
    let url = format!("{}{}", self.base_url, path);
    let response = self
      .http
      .post(&url)
      .json(body)
      .send()
      .await
      .map_err(|e| fail(path, &e))?;
    decode(path, response).await
  }
}

async fn decode<R: DeserializeOwned>(
  path: &str,
  response: reqwest::Response,
) -> Result<R, ServiceError> {
  if !response.status().is_success() {
    warn!(path, status = %response.status(), "upstream returned non-success");
    return Err(ServiceError);
  }
  response.json().await.map_err(|e| fail(path, &e))
}

fn fail(path: &str, err: &reqwest::Error) -> ServiceError {
  warn!(path, error = %err, "upstream call failed");
  ServiceError
}
