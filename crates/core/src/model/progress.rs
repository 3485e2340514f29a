use serde::{Deserialize, Serialize};

use crate::model::{CategoryKey, CompletionLedger, TopicCatalog};

/// Category label used for the aggregate summary.
pub const OVERALL: &str = "overall";

/// Derived completion counts for one category, or for the whole catalog.
///
/// Never persisted; recomputed from the ledger on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub category: String,
    pub completed: usize,
    pub total: usize,
    pub percentage: u8,
}

impl ProgressSummary {
    #[must_use]
    pub fn new(category: impl Into<String>, completed: usize, total: usize) -> Self {
        Self {
            category: category.into(),
            completed,
            total,
            percentage: percentage(completed, total),
        }
    }

    /// Join the ledger against one category's catalog topics.
    ///
    /// Records for topics outside the catalog are ignored, as are duplicates.
    #[must_use]
    pub fn for_category(
        category: &CategoryKey,
        catalog: &TopicCatalog,
        ledger: &CompletionLedger,
    ) -> Self {
        let topics = catalog.topics_for(category);
        let done = ledger.topics_in(category);
        let completed = topics.iter().filter(|t| done.contains(t)).count();
        Self::new(category.as_str(), completed, topics.len())
    }

    /// Sum per-category summaries into one `"overall"` summary.
    #[must_use]
    pub fn overall<'a>(parts: impl IntoIterator<Item = &'a ProgressSummary>) -> Self {
        let (completed, total) = parts
            .into_iter()
            .fold((0, 0), |(c, t), p| (c + p.completed, t + p.total));
        Self::new(OVERALL, completed, total)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed >= self.total
    }
}

/// `round(completed / total * 100)` with halves rounded up; `0` when `total == 0`.
#[must_use]
pub fn percentage(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total) as u128;
    let total = total as u128;
    let rounded = (completed * 200 + total) / (total * 2);
    u8::try_from(rounded).unwrap_or(100)
}
