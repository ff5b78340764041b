//! Normalize raw incident log text into structured incident drafts.
//!
//! Two paths: `normalize` runs heuristic matchers over arbitrary pasted text
//! and never fails; `parse_structured_log` takes record-shaped logs (CSV
//! header + body) literally, with no heuristics.

use std::sync::LazyLock;

use chrono::{DateTime, Local};
use regex::Regex;

use crate::types::{IncidentDraft, Severity};

/// Date-plus-time in the header line: `YYYY-MM-DD` then `HH:MM:SS`,
/// separated by a space or `T`.
static TIMESTAMP_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(\d{4}-\d{2}-\d{2})[T ](\d{2}:\d{2}:\d{2})").expect("timestamp pattern")
});

/// Ordered component matchers, highest priority first. Evaluated against the
/// header line only; the first pattern that matches wins and capture group 1
/// is the component name.
static COMPONENT_MATCHERS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
  [
    ("bracket-tag", r"\[([^\]]+)\]"),
    ("service-label", r"(?i)service:\s*(\S+)"),
    ("component-label", r"(?i)component:\s*(\S+)"),
    ("camel-service", r"([A-Z][a-z]+Service)"),
  ]
  .into_iter()
  .map(|(name, pattern)| (name, Regex::new(pattern).expect("component pattern")))
  .collect()
});

/// Severity keyword rules, highest priority first. The first rule with any
/// keyword present anywhere in the lower-cased text decides the severity.
const SEVERITY_RULES: [(&[&str], Severity); 4] = [
  (&["critical", "error"], Severity::Critical),
  (&["high", "warning"], Severity::High),
  (&["medium", "info"], Severity::Medium),
  (&["low", "debug"], Severity::Low),
];

/// Normalize arbitrary incident text into a best-effort draft.
///
/// Total: any input, including empty or malformed text, yields a draft.
/// Unmatched fields fall back to documented defaults — current local time,
/// empty component, `medium` severity.
pub fn normalize(text: &str) -> IncidentDraft {
  normalize_at(text, Local::now())
}

/// Clock-injected variant of [`normalize`]; `now` supplies the timestamp
/// default when the header carries none.
pub fn normalize_at(text: &str, now: DateTime<Local>) -> IncidentDraft {
  let header = text.lines().find(|line| !line.trim().is_empty()).unwrap_or("");

  let timestamp = match_timestamp(header)
    .unwrap_or_else(|| now.format("%Y-%m-%dT%H:%M:%S").to_string());
  let component = match_component(header).unwrap_or_default();
  let severity = match_severity(text).unwrap_or(Severity::Medium);

  IncidentDraft {
    timestamp,
    component,
    severity: severity.as_str().to_string(),
    log_text: text.to_string(),
  }
}

/// Strict variant for record-shaped input: one comma-separated header line
/// (`timestamp,component,severity,tag+message`) followed by free body lines.
///
/// Header fields are taken literally. The timestamp separator is normalized
/// to `T`; the severity is lower-cased with no keyword search, so
/// non-canonical values like "error" pass through unchanged. `log_text` is
/// the remainder of the header after the severity field (commas preserved)
/// plus all body lines, joined by newlines.
pub fn parse_structured_log(text: &str) -> IncidentDraft {
  let mut lines = text.split('\n');
  let header = lines.next().unwrap_or("");
  let mut fields = header.split(',');

  let timestamp = fields.next().unwrap_or("").trim().replacen(' ', "T", 1);
  let component = fields.next().unwrap_or("").trim().to_string();
  let severity = match fields.next().map(str::trim).filter(|s| !s.is_empty()) {
    Some(s) => s.to_lowercase(),
    None => "medium".to_string(),
  };

  let message = fields.collect::<Vec<_>>().join(",");
  let mut log_lines = vec![message.trim().to_string()];
  log_lines.extend(lines.map(str::to_string));

  IncidentDraft {
    timestamp,
    component,
    severity,
    log_text: log_lines.join("\n"),
  }
}

fn match_timestamp(header: &str) -> Option<String> {
  TIMESTAMP_RE
    .captures(header)
    .map(|caps| format!("{}T{}", &caps[1], &caps[2]))
}

fn match_component(header: &str) -> Option<String> {
  COMPONENT_MATCHERS
    .iter()
    .find_map(|(_, re)| re.captures(header).map(|caps| caps[1].to_string()))
}

fn match_severity(text: &str) -> Option<Severity> {
  let lower = text.to_lowercase();
  SEVERITY_RULES
    .iter()
    .find_map(|(keywords, severity)| {
      keywords.iter().any(|kw| lower.contains(kw)).then_some(*severity)
    })
}
