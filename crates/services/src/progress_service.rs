use std::collections::HashSet;
use std::sync::Arc;

use gopher_core::model::{
    CategoryKey, CompletionLedger, ProgressSummary, TopicCatalog, TopicCompletionRecord, TopicSlug,
};
use storage::KeyValueStore;
use tracing::{debug, warn};

use crate::Clock;
use crate::error::ProgressError;

/// Storage key holding the serialized completion ledger.
pub const LEDGER_KEY: &str = "completedTopics";

/// Owns the completion ledger and answers progress queries against the catalog.
///
/// Every operation is a synchronous read-modify-write of the whole ledger.
/// Nothing here serializes concurrent writers; the last full write wins.
#[derive(Clone)]
pub struct ProgressService {
    clock: Clock,
    store: Arc<dyn KeyValueStore>,
    catalog: Arc<TopicCatalog>,
}

impl ProgressService {
    #[must_use]
    pub fn new(clock: Clock, store: Arc<dyn KeyValueStore>, catalog: Arc<TopicCatalog>) -> Self {
        Self {
            clock,
            store,
            catalog,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &TopicCatalog {
        &self.catalog
    }

    /// Read the stored ledger without any fallback.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Storage` if the medium cannot be read and
    /// `ProgressError::Ledger` if the stored value is malformed.
    pub fn try_load_ledger(&self) -> Result<CompletionLedger, ProgressError> {
        match self.store.get(LEDGER_KEY)? {
            Some(raw) => Ok(CompletionLedger::decode(&raw)?),
            None => Ok(CompletionLedger::new()),
        }
    }

    /// The stored ledger, or an empty one if it is absent or unreadable.
    #[must_use]
    pub fn load_ledger(&self) -> CompletionLedger {
        self.try_load_ledger().unwrap_or_else(|err| {
            warn!(error = %err, key = LEDGER_KEY, "treating unreadable completion ledger as empty");
            CompletionLedger::new()
        })
    }

    #[must_use]
    pub fn completed_topics(&self) -> Vec<TopicCompletionRecord> {
        self.load_ledger().into_records()
    }

    /// Record the pair as completed now. Already-completed pairs are left as is
    /// and nothing is written.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError` if the updated ledger cannot be persisted.
    pub fn mark_topic_completed(
        &self,
        category: &CategoryKey,
        topic: &TopicSlug,
    ) -> Result<(), ProgressError> {
        let mut ledger = self.load_ledger();
        if !ledger.insert(category.clone(), topic.clone(), self.clock.now()) {
            return Ok(());
        }
        self.persist(&ledger)?;
        debug!(%category, %topic, "topic marked completed");
        Ok(())
    }

    /// Drop any record for the pair and persist the result, even if unchanged.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError` if the filtered ledger cannot be persisted.
    pub fn mark_topic_incomplete(
        &self,
        category: &CategoryKey,
        topic: &TopicSlug,
    ) -> Result<(), ProgressError> {
        let mut ledger = self.load_ledger();
        let removed = ledger.remove(category, topic);
        self.persist(&ledger)?;
        debug!(%category, %topic, removed, "topic marked incomplete");
        Ok(())
    }

    /// Flip the pair's state and return whether it is now completed.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError` if the change cannot be persisted.
    pub fn toggle_topic(
        &self,
        category: &CategoryKey,
        topic: &TopicSlug,
    ) -> Result<bool, ProgressError> {
        if self.is_topic_completed(category, topic) {
            self.mark_topic_incomplete(category, topic)?;
            Ok(false)
        } else {
            self.mark_topic_completed(category, topic)?;
            Ok(true)
        }
    }

    #[must_use]
    pub fn is_topic_completed(&self, category: &CategoryKey, topic: &TopicSlug) -> bool {
        self.load_ledger().contains(category, topic)
    }

    #[must_use]
    pub fn completion_record(
        &self,
        category: &CategoryKey,
        topic: &TopicSlug,
    ) -> Option<TopicCompletionRecord> {
        self.load_ledger()
            .into_records()
            .into_iter()
            .find(|record| record.matches(category, topic))
    }

    /// Catalog topics of `category` that have a completion record.
    #[must_use]
    pub fn completed_in_category(&self, category: &CategoryKey) -> HashSet<TopicSlug> {
        let ledger = self.load_ledger();
        let done = ledger.topics_in(category);
        self.catalog
            .topics_for(category)
            .iter()
            .filter(|topic| done.contains(topic))
            .cloned()
            .collect()
    }

    /// Progress for one category; unknown categories report `0 of 0`.
    #[must_use]
    pub fn category_progress(&self, category: &CategoryKey) -> ProgressSummary {
        ProgressSummary::for_category(category, &self.catalog, &self.load_ledger())
    }

    /// One summary per catalog category, in catalog order.
    #[must_use]
    pub fn all_category_progress(&self) -> Vec<ProgressSummary> {
        let ledger = self.load_ledger();
        self.catalog
            .categories()
            .map(|category| ProgressSummary::for_category(category, &self.catalog, &ledger))
            .collect()
    }

    #[must_use]
    pub fn overall_progress(&self) -> ProgressSummary {
        ProgressSummary::overall(&self.all_category_progress())
    }

    /// Delete the whole ledger.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Storage` if the key cannot be removed.
    pub fn reset_progress(&self) -> Result<(), ProgressError> {
        self.store.remove(LEDGER_KEY)?;
        debug!("progress reset");
        Ok(())
    }

    fn persist(&self, ledger: &CompletionLedger) -> Result<(), ProgressError> {
        let raw = ledger.encode()?;
        self.store.set(LEDGER_KEY, &raw)?;
        Ok(())
    }
}
