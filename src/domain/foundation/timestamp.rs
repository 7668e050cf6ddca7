//! UTC instants used for session start and end times.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Signed; negative when `other` is later.
    pub fn duration_since(&self, other: &Timestamp) -> Duration {
        self.0.signed_duration_since(other.0)
    }

    /// Minutes elapsed since `other`, rounded to two decimals.
    ///
    /// Never negative; clock skew between `other` and `self` reads as zero.
    pub fn minutes_since(&self, other: &Timestamp) -> f64 {
        let millis = self.duration_since(other).num_milliseconds().max(0);
        let minutes = millis as f64 / 60_000.0;
        (minutes * 100.0).round() / 100.0
    }

    pub fn plus_secs(&self, secs: u64) -> Self {
        Self(self.0 + Duration::seconds(secs as i64))
    }

    /// Formats the timestamp as RFC 3339 with a `Z` suffix.
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339_opts(chrono::SecondsFormat::Micros, true)
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn at(rfc3339: &str) -> Timestamp {
        Timestamp::from_datetime(
            DateTime::parse_from_rfc3339(rfc3339)
                .unwrap()
                .with_timezone(&Utc),
        )
    }

    #[test]
    fn now_is_current_time() {
        let before = Utc::now();
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(ts.as_datetime() >= &before);
        assert!(ts.as_datetime() <= &after);
    }

    #[test]
    fn ordering_follows_time() {
        let earlier = at("2024-01-15T10:00:00Z");
        let later = earlier.plus_secs(1);
        assert!(earlier < later);
        assert_eq!(later.duration_since(&earlier).num_seconds(), 1);
        assert_eq!(earlier.duration_since(&later).num_seconds(), -1);
    }

    #[test]
    fn minutes_since_rounds_to_two_decimals() {
        let start = at("2024-01-15T10:00:00Z");
        let end = at("2024-01-15T10:12:20Z");
        assert_eq!(end.minutes_since(&start), 12.33);
    }

    #[test]
    fn minutes_since_never_negative() {
        let start = at("2024-01-15T10:00:00Z");
        let end = at("2024-01-15T09:00:00Z");
        assert_eq!(end.minutes_since(&start), 0.0);
    }

    #[test]
    fn plus_secs_adds_correctly() {
        let ts1 = at("2024-01-15T10:00:00Z");
        let ts2 = ts1.plus_secs(90);
        assert_eq!(ts2.duration_since(&ts1).num_seconds(), 90);
    }

    #[test]
    fn rfc3339_uses_z_suffix() {
        let ts = at("2024-01-15T10:30:00Z");
        assert_eq!(ts.to_rfc3339(), "2024-01-15T10:30:00.000000Z");
    }

    #[test]
    fn timestamp_deserializes_from_json() {
        let ts: Timestamp = serde_json::from_str("\"2024-01-15T10:30:00Z\"").unwrap();
        assert_eq!(ts.as_datetime().year(), 2024);
    }
}
