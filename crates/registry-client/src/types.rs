//! Relay records as returned by the registry.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Response body of the registry endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelayList {
    #[serde(default)]
    pub relays: Vec<Relay>,
}

/// One registered relay. Only `fingerprint` is required; `first_seen` is kept as the raw string.
/// Missing or `null` optional fields decode as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relay {
    pub fingerprint: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub nickname: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub first_seen: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Relay {
    pub fn new(
        fingerprint: impl Into<String>,
        nickname: impl Into<String>,
        first_seen: impl Into<String>,
    ) -> Self {
        Self {
            fingerprint: fingerprint.into(),
            nickname: nickname.into(),
            first_seen: first_seen.into(),
        }
    }

    /// Parses `first_seen`. Accepts RFC 3339 and the naive `YYYY-MM-DD HH:MM:SS` form (taken as UTC).
    pub fn first_seen_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.first_seen)
    }
}

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_first_seen_rfc3339() {
        let relay = Relay::new("AAA111", "R1", "2024-05-01T10:20:30Z");
        assert_eq!(
            relay.first_seen_at(),
            Some(Utc.with_ymd_and_hms(2024, 5, 1, 10, 20, 30).unwrap())
        );
    }

    #[test]
    fn test_first_seen_with_offset_is_normalized() {
        let relay = Relay::new("AAA111", "R1", "2024-05-01T12:20:30+02:00");
        assert_eq!(
            relay.first_seen_at(),
            Some(Utc.with_ymd_and_hms(2024, 5, 1, 10, 20, 30).unwrap())
        );
    }

    #[test]
    fn test_first_seen_naive_space_separated() {
        let relay = Relay::new("AAA111", "R1", "2024-05-01 10:20:30");
        assert_eq!(
            relay.first_seen_at(),
            Some(Utc.with_ymd_and_hms(2024, 5, 1, 10, 20, 30).unwrap())
        );
    }

    #[test]
    fn test_first_seen_date_only() {
        let relay = Relay::new("AAA111", "R1", "2024-05-01");
        assert_eq!(
            relay.first_seen_at(),
            Some(Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_first_seen_garbage() {
        assert!(Relay::new("AAA111", "R1", "yesterday").first_seen_at().is_none());
        assert!(Relay::new("AAA111", "R1", "").first_seen_at().is_none());
    }

    #[test]
    fn test_relay_list_missing_fields_default() {
        let list: RelayList =
            serde_json::from_str(r#"{"relays":[{"fingerprint":"AAA111","extra":1}]}"#).unwrap();
        assert_eq!(list.relays.len(), 1);
        assert_eq!(list.relays[0].nickname, "");
        assert_eq!(list.relays[0].first_seen, "");

        let empty: RelayList = serde_json::from_str(r#"{"version":"1"}"#).unwrap();
        assert!(empty.relays.is_empty());
    }

    #[test]
    fn test_null_fields_decode_as_empty() {
        let list: RelayList = serde_json::from_str(
            r#"{"relays":[
                {"fingerprint":"AAA111","nickname":"R1","first_seen":"2024-05-01 00:00:00"},
                {"fingerprint":"BBB222","nickname":null,"first_seen":"2024-05-01 00:00:00"},
                {"fingerprint":"CCC333","nickname":"R3","first_seen":null}
            ]}"#,
        )
        .unwrap();

        assert_eq!(list.relays.len(), 3);
        assert_eq!(list.relays[0].nickname, "R1");
        assert_eq!(list.relays[1].nickname, "");
        assert_eq!(list.relays[2].first_seen, "");
        assert!(list.relays[2].first_seen_at().is_none());
    }
}
