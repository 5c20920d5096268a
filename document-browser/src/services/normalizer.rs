//! Maps raw API records onto [`DisplayDocument`].
//!
//! Upstream data is untrusted, so every function here is total: a missing or
//! oddly typed field degrades to `None` (rendered as a placeholder) rather
//! than failing the record.

use crate::models::{DisplayDocument, RawDocument};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

pub fn normalize(raw: RawDocument) -> DisplayDocument {
    let label = text_field(raw.title.as_ref())
        .or_else(|| text_field(raw.name.as_ref()))
        .unwrap_or_else(|| format!("Document #{}", raw.id));

    let doc_type =
        text_field(raw.kind.as_ref()).or_else(|| text_field(raw.document_type.as_ref()));

    DisplayDocument {
        label,
        doc_type,
        created_on: raw.created_at.as_ref().and_then(parse_date),
        url: text_field(raw.url.as_ref()),
        id: raw.id,
    }
}

/// Only non-empty strings count as present.
fn text_field(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Accepts RFC 3339 timestamps, bare ISO dates and datetimes, or epoch
/// milliseconds. The calendar date is taken in the timestamp's own offset.
fn parse_date(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            DateTime::parse_from_rfc3339(s)
                .map(|dt| dt.date_naive())
                .or_else(|_| {
                    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date())
                })
                .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
                .ok()
        }
        Value::Number(n) => n
            .as_i64()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map(|dt| dt.date_naive()),
        _ => None,
    }
}
