//! Upcoming-expiry alerting for date-bearing records.
//!
//! Every module whose records carry an expiry date (government documents,
//! vehicle registrations, facility approvals, employee site passes) feeds
//! into one alert list on the dashboard. Only expiries falling inside the
//! next [`ALERT_WINDOW_DAYS`] days are alerted; already-expired records are
//! a separate concern and excluded here.

use chrono::NaiveDate;
use serde::Serialize;

use crate::types::RecordId;

/// Expiries further out than this many days are not alerted.
pub const ALERT_WINDOW_DAYS: i64 = 30;
/// At or below this many days remaining an alert is urgent.
pub const URGENT_WITHIN_DAYS: i64 = 7;
/// At or below this many days remaining an alert is a warning.
pub const WARNING_WITHIN_DAYS: i64 = 15;

/// Severity bucket for an upcoming expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Urgent,
    Warning,
    Upcoming,
}

impl AlertSeverity {
    /// Classify by whole days remaining. Callers guarantee the value is
    /// inside the alert window.
    pub fn from_days_remaining(days: i64) -> Self {
        if days <= URGENT_WITHIN_DAYS {
            Self::Urgent
        } else if days <= WARNING_WITHIN_DAYS {
            Self::Warning
        } else {
            Self::Upcoming
        }
    }

    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Urgent => "Urgent",
            Self::Warning => "Warning",
            Self::Upcoming => "Upcoming",
        }
    }
}

/// One date-bearing record offered to the alert computation.
#[derive(Debug, Clone)]
pub struct ExpiryInput {
    /// Which module the record belongs to (e.g. `"government-documents"`).
    pub source: &'static str,
    pub record_id: RecordId,
    /// Display label (document title, plate number, ...).
    pub label: String,
    pub expires_on: Option<NaiveDate>,
}

/// An expiry falling inside the alert window.
#[derive(Debug, Clone, Serialize)]
pub struct ExpiryAlert {
    pub source: &'static str,
    pub record_id: RecordId,
    pub label: String,
    pub expires_on: NaiveDate,
    pub days_remaining: i64,
    pub severity: AlertSeverity,
}

/// Compute the upcoming-expiry alert list for `today`.
///
/// Records with no expiry date or with `days_remaining` outside
/// `0..=ALERT_WINDOW_DAYS` are excluded. The result is sorted most urgent
/// first (ascending days remaining, ties by label).
pub fn upcoming_expiries(items: Vec<ExpiryInput>, today: NaiveDate) -> Vec<ExpiryAlert> {
    let mut alerts: Vec<ExpiryAlert> = items
        .into_iter()
        .filter_map(|item| {
            let expires_on = item.expires_on?;
            let days_remaining = expires_on.signed_duration_since(today).num_days();
            if !(0..=ALERT_WINDOW_DAYS).contains(&days_remaining) {
                return None;
            }
            Some(ExpiryAlert {
                source: item.source,
                record_id: item.record_id,
                label: item.label,
                expires_on,
                days_remaining,
                severity: AlertSeverity::from_days_remaining(days_remaining),
            })
        })
        .collect();
    alerts.sort_by(|a, b| {
        a.days_remaining
            .cmp(&b.days_remaining)
            .then_with(|| a.label.cmp(&b.label))
    });
    alerts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(days_from_today: i64) -> NaiveDate {
        today() + chrono::Duration::days(days_from_today)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 8).unwrap()
    }

    fn input(label: &str, expires_on: Option<NaiveDate>) -> ExpiryInput {
        ExpiryInput {
            source: "government-documents",
            record_id: format!("doc-{label}"),
            label: label.to_string(),
            expires_on,
        }
    }

    // -- severity boundaries --

    #[test]
    fn severity_urgent_at_seven_days() {
        assert_eq!(
            AlertSeverity::from_days_remaining(URGENT_WITHIN_DAYS),
            AlertSeverity::Urgent
        );
    }

    #[test]
    fn severity_warning_above_urgent() {
        assert_eq!(
            AlertSeverity::from_days_remaining(URGENT_WITHIN_DAYS + 1),
            AlertSeverity::Warning
        );
        assert_eq!(
            AlertSeverity::from_days_remaining(WARNING_WITHIN_DAYS),
            AlertSeverity::Warning
        );
    }

    #[test]
    fn severity_upcoming_above_warning() {
        assert_eq!(
            AlertSeverity::from_days_remaining(WARNING_WITHIN_DAYS + 1),
            AlertSeverity::Upcoming
        );
        assert_eq!(
            AlertSeverity::from_days_remaining(ALERT_WINDOW_DAYS),
            AlertSeverity::Upcoming
        );
    }

    #[test]
    fn severity_labels() {
        assert_eq!(AlertSeverity::Urgent.label(), "Urgent");
        assert_eq!(AlertSeverity::Warning.label(), "Warning");
        assert_eq!(AlertSeverity::Upcoming.label(), "Upcoming");
    }

    // -- window boundaries --

    #[test]
    fn expiry_at_thirty_days_is_alerted() {
        let alerts = upcoming_expiries(vec![input("trade-license", Some(day(30)))], today());
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].days_remaining, 30);
    }

    #[test]
    fn expiry_at_thirty_one_days_is_not_alerted() {
        let alerts = upcoming_expiries(vec![input("trade-license", Some(day(31)))], today());
        assert!(alerts.is_empty());
    }

    #[test]
    fn already_expired_is_not_alerted() {
        let alerts = upcoming_expiries(vec![input("trade-license", Some(day(-1)))], today());
        assert!(alerts.is_empty());
    }

    #[test]
    fn expiring_today_is_alerted_as_urgent() {
        let alerts = upcoming_expiries(vec![input("trade-license", Some(day(0)))], today());
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, AlertSeverity::Urgent);
    }

    #[test]
    fn undated_records_are_excluded() {
        let alerts = upcoming_expiries(vec![input("trade-license", None)], today());
        assert!(alerts.is_empty());
    }

    #[test]
    fn alerts_sort_most_urgent_first() {
        let alerts = upcoming_expiries(
            vec![
                input("b-late", Some(day(20))),
                input("a-soon", Some(day(2))),
                input("mid", Some(day(10))),
            ],
            today(),
        );
        let labels: Vec<&str> = alerts.iter().map(|a| a.label.as_str()).collect();
        assert_eq!(labels, vec!["a-soon", "mid", "b-late"]);
    }
}
