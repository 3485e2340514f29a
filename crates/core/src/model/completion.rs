use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{CategoryKey, TopicSlug};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LedgerCodecError {
    #[error("malformed completion ledger: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error("failed to encode completion ledger: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Evidence that a topic in a category was marked done.
///
/// `completed_at` is kept exactly as stored. Records written here use
/// millisecond RFC 3339 with a `Z` suffix, but any string is accepted on read
/// so a ledger written elsewhere never fails to decode over a timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicCompletionRecord {
    pub category: CategoryKey,
    pub topic: TopicSlug,
    pub completed_at: String,
}

impl TopicCompletionRecord {
    #[must_use]
    pub fn new(category: CategoryKey, topic: TopicSlug, completed_at: DateTime<Utc>) -> Self {
        Self {
            category,
            topic,
            completed_at: format_timestamp(completed_at),
        }
    }

    #[must_use]
    pub fn matches(&self, category: &CategoryKey, topic: &TopicSlug) -> bool {
        &self.category == category && &self.topic == topic
    }

    /// The completion time, if the stored string is a recognizable ISO-8601
    /// date or date-time. Values without an offset are read as UTC.
    #[must_use]
    pub fn completed_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.completed_at)
    }
}

/// RFC 3339 with millisecond precision and a `Z` suffix.
#[must_use]
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    const NAIVE_FORMATS: [&str; 3] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
    ];
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

/// The full durable sequence of completion records.
///
/// Record order carries no meaning for queries. Mutations keep at most one
/// record per `(category, topic)` pair; the ledger never deduplicates on its own
/// when decoding foreign data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionLedger {
    records: Vec<TopicCompletionRecord>,
}

impl CompletionLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a ledger from its persisted JSON array form.
    ///
    /// # Errors
    ///
    /// Returns `LedgerCodecError::Malformed` if the value is not a JSON array of
    /// well-formed completion records.
    pub fn decode(raw: &str) -> Result<Self, LedgerCodecError> {
        serde_json::from_str(raw).map_err(LedgerCodecError::Malformed)
    }

    /// # Errors
    ///
    /// Returns `LedgerCodecError::Encode` if serialization fails.
    pub fn encode(&self) -> Result<String, LedgerCodecError> {
        serde_json::to_string(self).map_err(LedgerCodecError::Encode)
    }

    #[must_use]
    pub fn records(&self) -> &[TopicCompletionRecord] {
        &self.records
    }

    #[must_use]
    pub fn into_records(self) -> Vec<TopicCompletionRecord> {
        self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn contains(&self, category: &CategoryKey, topic: &TopicSlug) -> bool {
        self.records.iter().any(|r| r.matches(category, topic))
    }

    /// Append a record for the pair unless one already exists.
    ///
    /// Returns `true` if the ledger changed.
    pub fn insert(&mut self, category: CategoryKey, topic: TopicSlug, at: DateTime<Utc>) -> bool {
        if self.contains(&category, &topic) {
            return false;
        }
        self.records
            .push(TopicCompletionRecord::new(category, topic, at));
        true
    }

    /// Remove every record for the pair, returning how many were dropped.
    pub fn remove(&mut self, category: &CategoryKey, topic: &TopicSlug) -> usize {
        let before = self.records.len();
        self.records.retain(|r| !r.matches(category, topic));
        before - self.records.len()
    }

    /// Topics recorded as completed for one category.
    #[must_use]
    pub fn topics_in(&self, category: &CategoryKey) -> HashSet<&TopicSlug> {
        self.records
            .iter()
            .filter(|r| &r.category == category)
            .map(|r| &r.topic)
            .collect()
    }
}

impl From<Vec<TopicCompletionRecord>> for CompletionLedger {
    fn from(records: Vec<TopicCompletionRecord>) -> Self {
        Self { records }
    }
}
