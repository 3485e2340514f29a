use std::collections::HashSet;

use gopher_core::model::{CategoryKey, TopicSlug};
use services::ProgressService;

use crate::vm::ProgressTier;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicItemVm {
    pub slug: String,
    pub title: String,
    pub completed: bool,
}

#[must_use]
pub fn map_topic_items(topics: &[TopicSlug], completed: &HashSet<TopicSlug>) -> Vec<TopicItemVm> {
    topics
        .iter()
        .map(|topic| TopicItemVm {
            slug: topic.as_str().to_owned(),
            title: topic.display_name(),
            completed: completed.contains(topic),
        })
        .collect()
}

/// Everything the topic list page shows for one category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicPageVm {
    pub category_slug: String,
    pub heading: String,
    pub description: Option<String>,
    pub known: bool,
    pub completed: usize,
    pub total: usize,
    pub percentage: u8,
    pub tier: ProgressTier,
    pub items: Vec<TopicItemVm>,
}

impl TopicPageVm {
    #[must_use]
    pub fn build(progress: &ProgressService, category: &CategoryKey) -> Self {
        let summary = progress.category_progress(category);
        let completed = progress.completed_in_category(category);
        let items = map_topic_items(progress.catalog().topics_for(category), &completed);
        Self {
            category_slug: category.route_slug(),
            heading: category.display_name(),
            description: progress.catalog().description(category).map(str::to_owned),
            known: progress.catalog().contains_category(category),
            completed: summary.completed,
            total: summary.total,
            percentage: summary.percentage,
            tier: ProgressTier::from_percentage(summary.percentage),
            items,
        }
    }
}
