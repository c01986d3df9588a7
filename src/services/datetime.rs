//! Unix timestamp conversions. All times are UTC.

use crate::domain::errors::ToolError;
use crate::domain::models::TimestampReport;
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// Timestamps with a larger magnitude are treated as milliseconds.
const MILLIS_THRESHOLD: i64 = 100_000_000_000;

fn report(at: DateTime<Utc>) -> TimestampReport {
    let millis = at.timestamp_millis();
    let format = if millis.rem_euclid(1000) == 0 {
        SecondsFormat::Secs
    } else {
        SecondsFormat::Millis
    };
    TimestampReport {
        seconds: at.timestamp(),
        milliseconds: millis,
        utc: at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        rfc3339: at.to_rfc3339_opts(format, true),
    }
}

pub fn from_unix(value: i64) -> Result<TimestampReport, ToolError> {
    let millis = if value.abs() >= MILLIS_THRESHOLD {
        value
    } else {
        value
            .checked_mul(1000)
            .ok_or_else(|| ToolError::InvalidDate(value.to_string()))?
    };
    DateTime::from_timestamp_millis(millis)
        .map(report)
        .ok_or_else(|| ToolError::InvalidDate(format!("timestamp {} is out of range", value)))
}

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

pub fn to_unix(raw: &str) -> Result<TimestampReport, ToolError> {
    let s = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(report(dt.with_timezone(&Utc)));
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(report(naive.and_utc()));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(report(midnight.and_utc()));
        }
    }
    Err(ToolError::InvalidDate(format!(
        "{} (expected RFC 3339, YYYY-MM-DD HH:MM:SS or YYYY-MM-DD)",
        s
    )))
}

pub fn now() -> TimestampReport {
    report(Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_and_known_instant() {
        let epoch = from_unix(0).unwrap();
        assert_eq!(epoch.utc, "1970-01-01 00:00:00 UTC");
        assert_eq!(epoch.rfc3339, "1970-01-01T00:00:00Z");

        let r = from_unix(1_700_000_000).unwrap();
        assert_eq!(r.utc, "2023-11-14 22:13:20 UTC");
        assert_eq!(r.milliseconds, 1_700_000_000_000);
    }

    #[test]
    fn millisecond_input_is_detected() {
        let r = from_unix(1_700_000_000_123).unwrap();
        assert_eq!(r.seconds, 1_700_000_000);
        assert_eq!(r.rfc3339, "2023-11-14T22:13:20.123Z");
    }

    #[test]
    fn parses_supported_datetime_forms() {
        assert_eq!(to_unix("2023-11-14T22:13:20Z").unwrap().seconds, 1_700_000_000);
        assert_eq!(to_unix("2023-11-14T23:13:20+01:00").unwrap().seconds, 1_700_000_000);
        assert_eq!(to_unix("2023-11-14 22:13:20").unwrap().seconds, 1_700_000_000);
        assert_eq!(to_unix("1970-01-02").unwrap().seconds, 86_400);
        assert!(matches!(to_unix("yesterday"), Err(ToolError::InvalidDate(_))));
    }

    #[test]
    fn unix_round_trip() {
        for ts in [-86_400, 0, 1, 951_782_400, 1_700_000_000] {
            let r = from_unix(ts).unwrap();
            assert_eq!(to_unix(&r.rfc3339).unwrap().seconds, ts);
        }
    }
}
