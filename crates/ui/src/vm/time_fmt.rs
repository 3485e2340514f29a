use chrono::{DateTime, Utc};
use gopher_core::model::TopicCompletionRecord;

#[must_use]
pub fn format_date(value: DateTime<Utc>) -> String {
    value.format("%Y-%m-%d").to_string()
}

/// Calendar date a topic was completed on. Timestamps that cannot be read as a
/// date are shown as stored.
#[must_use]
pub fn format_completion_date(record: &TopicCompletionRecord) -> String {
    record
        .completed_at_utc()
        .map_or_else(|| record.completed_at.clone(), format_date)
}
