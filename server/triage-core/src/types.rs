//! Core types for the triage engine (JSON contracts + internal models).

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Severity (closed set of canonical urgency levels)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
  Critical,
  High,
  Medium,
  Low,
}

impl Severity {
  /// Parse one of the four canonical names, case-insensitively.
  ///
  /// Aliases like "error" or "warn" are NOT accepted here; keyword mapping
  /// belongs to the normalization heuristics. Records carrying any other
  /// severity string are counted nowhere by the aggregator.
  pub fn from_str_loose(s: &str) -> Option<Self> {
    match s.to_ascii_lowercase().as_str() {
      "critical" => Some(Self::Critical),
      "high" => Some(Self::High),
      "medium" => Some(Self::Medium),
      "low" => Some(Self::Low),
      _ => None,
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Critical => "critical",
      Self::High => "high",
      Self::Medium => "medium",
      Self::Low => "low",
    }
  }
}

// ---------------------------------------------------------------------------
// Incident draft / record (JSON contract with the external services)
// ---------------------------------------------------------------------------

/// Unclassified incident produced by normalization, consumed immediately by
/// the external classification calls. Not persisted by the core.
///
/// `severity` stays a string at the wire level: the heuristic path only ever
/// writes the four canonical values, but the structured-log path passes the
/// header severity through literally (e.g. "error").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidentDraft {
  pub timestamp: String,
  pub component: String,
  pub severity: String,
  pub log_text: String,
}

/// One classified incident row as served by the external history store.
/// The core only ever reads sequences of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidentRecord {
  pub timestamp: String,
  pub component: String,
  pub severity: String,
  pub log_text: String,
  pub predicted_root_cause: String,
}

// ---------------------------------------------------------------------------
// Dashboard snapshot (output of aggregation)
// ---------------------------------------------------------------------------

/// Count per canonical severity. Non-canonical severity strings land in no
/// bucket at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
  pub critical: u64,
  pub high: u64,
  pub medium: u64,
  pub low: u64,
}

impl SeverityCounts {
  pub fn bump(&mut self, severity: Severity) {
    match severity {
      Severity::Critical => self.critical += 1,
      Severity::High => self.high += 1,
      Severity::Medium => self.medium += 1,
      Severity::Low => self.low += 1,
    }
  }

  pub fn get(&self, severity: Severity) -> u64 {
    match severity {
      Severity::Critical => self.critical,
      Severity::High => self.high,
      Severity::Medium => self.medium,
      Severity::Low => self.low,
    }
  }

  pub fn total(&self) -> u64 {
    self.critical + self.high + self.medium + self.low
  }
}

/// One day in the dashboard trend: calendar date ("YYYY-MM-DD") and the
/// number of incidents whose timestamp falls on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
  pub date: String,
  pub count: u64,
}

/// Fully recomputed aggregate view for the dashboard. Never cached or merged
/// with a previous snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSnapshot {
  pub severity_counts: SeverityCounts,
  pub daily_trend: Vec<TrendPoint>,
  pub recent_incidents: Vec<IncidentRecord>,
}

// ---------------------------------------------------------------------------
// Live stream payload
// ---------------------------------------------------------------------------

/// One classified event arriving over the live connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamEvent {
  pub raw_log: String,
  pub summary: String,
  pub root_cause: String,
}
