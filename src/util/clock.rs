use chrono::{SecondsFormat, Utc};

/// Current UTC time as a fixed-width ISO-8601 string, e.g. `2025-12-20T10:15:30.123456+00:00`.
///
/// Fixed width keeps lexicographic order equal to chronological order, which
/// the message listing relies on when it sorts by `timestamp`.
pub fn utc_now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// Fresh opaque identifier for a stored document
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
