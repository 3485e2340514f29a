use gopher_core::model::{CategoryKey, ProgressSummary, TopicCatalog};

/// Colour band a percentage falls into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgressTier {
    Starting,
    Low,
    Medium,
    High,
    Complete,
}

impl ProgressTier {
    #[must_use]
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            100.. => Self::Complete,
            75..=99 => Self::High,
            50..=74 => Self::Medium,
            25..=49 => Self::Low,
            _ => Self::Starting,
        }
    }

    /// CSS modifier used by bars and badges.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Complete => "tier-complete",
            Self::High => "tier-high",
            Self::Medium => "tier-medium",
            Self::Low => "tier-low",
            Self::Starting => "tier-starting",
        }
    }

    /// Stroke colour for the progress ring.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Complete => "#10b981",
            Self::High => "#3b82f6",
            Self::Medium => "#eab308",
            Self::Low => "#f97316",
            Self::Starting => "#ef4444",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryCardVm {
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub completed: usize,
    pub total: usize,
    pub percentage: u8,
    pub tier: ProgressTier,
}

impl From<&ProgressSummary> for CategoryCardVm {
    fn from(summary: &ProgressSummary) -> Self {
        // Summaries built from the catalog always carry a valid key.
        let (slug, title) = match CategoryKey::parse(&summary.category) {
            Ok(key) => (key.route_slug(), key.display_name()),
            Err(_) => (summary.category.clone(), summary.category.clone()),
        };
        Self {
            slug,
            title,
            description: None,
            completed: summary.completed,
            total: summary.total,
            percentage: summary.percentage,
            tier: ProgressTier::from_percentage(summary.percentage),
        }
    }
}

/// One card per summary, with the catalog's description when it has one.
#[must_use]
pub fn map_category_cards(catalog: &TopicCatalog, items: &[ProgressSummary]) -> Vec<CategoryCardVm> {
    items
        .iter()
        .map(|summary| {
            let mut card = CategoryCardVm::from(summary);
            card.description = CategoryKey::parse(&summary.category)
                .ok()
                .and_then(|key| catalog.description(&key))
                .map(str::to_owned);
            card
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverallVm {
    pub completed: usize,
    pub total: usize,
    pub percentage: u8,
    pub tier: ProgressTier,
    pub all_done: bool,
    pub message: Option<&'static str>,
}

impl From<&ProgressSummary> for OverallVm {
    fn from(summary: &ProgressSummary) -> Self {
        Self {
            completed: summary.completed,
            total: summary.total,
            percentage: summary.percentage,
            tier: ProgressTier::from_percentage(summary.percentage),
            all_done: summary.is_complete(),
            message: motivational_message(summary.percentage),
        }
    }
}

/// Encouragement shown while progress is underway; `None` at 0% and 100%.
#[must_use]
pub fn motivational_message(percentage: u8) -> Option<&'static str> {
    match percentage {
        0 | 100.. => None,
        75..=99 => Some("You're almost there! Keep up the great work!"),
        50..=74 => Some("Great progress! You're halfway through!"),
        25..=49 => Some("Nice start! Keep learning and growing!"),
        _ => Some("Every journey begins with a single step. Keep going!"),
    }
}
