//! Aggregate incident records into the dashboard snapshot: severity
//! distribution, 14-day trend, most recent incidents.

use chrono::{Days, Local, NaiveDate};

use crate::types::{DashboardSnapshot, IncidentRecord, Severity, SeverityCounts, TrendPoint};

/// Days covered by the dashboard trend, ending today.
pub const TREND_DAYS: u64 = 14;

/// Maximum number of incidents in the "recent" panel.
pub const RECENT_LIMIT: usize = 5;

/// Compute a fresh dashboard snapshot from a batch of incident records.
///
/// Pure and total over any input, including empty. The snapshot is fully
/// recomputed on every call; nothing is merged with a prior snapshot.
pub fn aggregate(records: &[IncidentRecord]) -> DashboardSnapshot {
  aggregate_at(records, Local::now().date_naive())
}

/// Clock-injected variant of [`aggregate`]; `today` is the last trend date.
pub fn aggregate_at(records: &[IncidentRecord], today: NaiveDate) -> DashboardSnapshot {
  DashboardSnapshot {
    severity_counts: count_severities(records),
    daily_trend: daily_trend(records, today),
    recent_incidents: recent_incidents(records),
  }
}

/// Count records per canonical severity, compared case-insensitively.
/// Records whose severity matches none of the four canonical values are
/// counted nowhere — no catch-all bucket.
fn count_severities(records: &[IncidentRecord]) -> SeverityCounts {
  let mut counts = SeverityCounts::default();
  for record in records {
    if let Some(severity) = Severity::from_str_loose(&record.severity) {
      counts.bump(severity);
    }
  }
  counts
}

/// One bucket per calendar day for the trailing [`TREND_DAYS`] days,
/// oldest first, last bucket = `today`.
///
/// A record lands in a bucket when its timestamp string starts with the
/// bucket date. This is a literal prefix comparison, not timezone-aware
/// date equality: records stamped with a different UTC offset than the
/// comparison clock may bucket under the neighboring day.
fn daily_trend(records: &[IncidentRecord], today: NaiveDate) -> Vec<TrendPoint> {
  (0..TREND_DAYS)
    .rev()
    .map(|offset| {
      let date = today
        .checked_sub_days(Days::new(offset))
        .unwrap_or(today)
        .format("%Y-%m-%d")
        .to_string();
      let count = records
        .iter()
        .filter(|record| record.timestamp.starts_with(&date))
        .count() as u64;
      TrendPoint { date, count }
    })
    .collect()
}

/// The last [`RECENT_LIMIT`] records of the batch in reverse input order
/// (most recently submitted first). Not a timestamp sort.
fn recent_incidents(records: &[IncidentRecord]) -> Vec<IncidentRecord> {
  let start = records.len().saturating_sub(RECENT_LIMIT);
  records[start..].iter().rev().cloned().collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn record(timestamp: &str, severity: &str, log_text: &str) -> IncidentRecord {
    IncidentRecord {
      timestamp: timestamp.into(),
      component: "api".into(),
      severity: severity.into(),
      log_text: log_text.into(),
      predicted_root_cause: "unknown".into(),
    }
  }

  fn day(n: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, n).unwrap()
  }

  #[test]
  fn severity_distribution_counts_case_insensitively() {
    let records: Vec<_> = ["critical", "CRITICAL", "high", "Medium", "low", "low", "low"]
      .iter()
      .map(|sev| record("2025-01-15T10:00:00", sev, "x"))
      .collect();
    let snapshot = aggregate_at(&records, day(15));
    assert_eq!(snapshot.severity_counts.critical, 2);
    assert_eq!(snapshot.severity_counts.high, 1);
    assert_eq!(snapshot.severity_counts.medium, 1);
    assert_eq!(snapshot.severity_counts.low, 3);
  }

  #[test]
  fn non_canonical_severity_counts_nowhere() {
    let records = vec![
      record("2025-01-15T10:00:00", "error", "x"),
      record("2025-01-15T10:00:00", "sev1", "x"),
      record("2025-01-15T10:00:00", "", "x"),
      record("2025-01-15T10:00:00", "high", "x"),
    ];
    let snapshot = aggregate_at(&records, day(15));
    assert_eq!(snapshot.severity_counts.total(), 1);
    assert_eq!(snapshot.severity_counts.high, 1);
  }

  #[test]
  fn trend_has_fourteen_consecutive_days_ending_today() {
    let snapshot = aggregate_at(&[], day(20));
    assert_eq!(snapshot.daily_trend.len(), 14);
    assert_eq!(snapshot.daily_trend[0].date, "2025-01-07");
    assert_eq!(snapshot.daily_trend[13].date, "2025-01-20");
    for pair in snapshot.daily_trend.windows(2) {
      let a = NaiveDate::parse_from_str(&pair[0].date, "%Y-%m-%d").unwrap();
      let b = NaiveDate::parse_from_str(&pair[1].date, "%Y-%m-%d").unwrap();
      assert_eq!(b, a.succ_opt().unwrap());
    }
  }

  #[test]
  fn trend_buckets_by_timestamp_prefix() {
    let records = vec![
      record("2025-01-20T09:00:00", "high", "a"),
      record("2025-01-20T23:59:59", "low", "b"),
      record("2025-01-19T00:00:00", "low", "c"),
      // Outside the window entirely.
      record("2024-12-01T12:00:00", "low", "d"),
      // Not a parseable date at all; prefix match simply never fires.
      record("yesterday-ish", "low", "e"),
    ];
    let snapshot = aggregate_at(&records, day(20));
    assert_eq!(snapshot.daily_trend[13].count, 2);
    assert_eq!(snapshot.daily_trend[12].count, 1);
    let total: u64 = snapshot.daily_trend.iter().map(|p| p.count).sum();
    assert_eq!(total, 3);
  }

  #[test]
  fn recent_incidents_are_last_five_in_reverse_input_order() {
    let records: Vec<_> = ["a", "b", "c", "d", "e", "f"]
      .iter()
      .map(|name| record("2025-01-15T10:00:00", "low", name))
      .collect();
    let snapshot = aggregate_at(&records, day(15));
    let logs: Vec<_> = snapshot
      .recent_incidents
      .iter()
      .map(|r| r.log_text.as_str())
      .collect();
    assert_eq!(logs, vec!["f", "e", "d", "c", "b"]);
  }

  #[test]
  fn recent_incidents_short_batch_all_reversed() {
    let records = vec![
      record("2025-01-15T10:00:00", "low", "a"),
      record("2025-01-15T11:00:00", "low", "b"),
    ];
    let snapshot = aggregate_at(&records, day(15));
    let logs: Vec<_> = snapshot
      .recent_incidents
      .iter()
      .map(|r| r.log_text.as_str())
      .collect();
    assert_eq!(logs, vec!["b", "a"]);
  }

  #[test]
  fn empty_input_yields_all_zero_snapshot() {
    let snapshot = aggregate_at(&[], day(15));
    assert_eq!(snapshot.severity_counts, SeverityCounts::default());
    assert_eq!(snapshot.daily_trend.len(), 14);
    assert!(snapshot.daily_trend.iter().all(|p| p.count == 0));
    assert!(snapshot.recent_incidents.is_empty());
  }
}
