use std::collections::HashSet;
use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use thiserror::Error;

use crate::model::{CategoryKey, KeyError, TopicSlug};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error(transparent)]
    Key(#[from] KeyError),
    #[error("category {0} is listed more than once")]
    DuplicateCategory(String),
    #[error("topic {topic} is listed more than once in {category}")]
    DuplicateTopic { category: String, topic: String },
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Static mapping of category → ordered topic slugs, with an optional
/// one-line description per category.
///
/// Iteration order is the order categories were declared in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicCatalog {
    categories: Vec<CatalogEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CatalogEntry {
    key: CategoryKey,
    description: Option<String>,
    topics: Vec<TopicSlug>,
}

impl TopicCatalog {
    #[must_use]
    pub fn builder() -> TopicCatalogBuilder {
        TopicCatalogBuilder::default()
    }

    /// Parse a catalog from a JSON object keyed by category. Each value is
    /// either a topic list or `{"description": "...", "topics": [...]}`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` for malformed JSON, blank keys or duplicates.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_json::from_str(raw)?;
        let mut builder = Self::builder();
        for (category, value) in raw.0 {
            builder = match value {
                RawCategory::Topics(topics) => builder.category(category, topics),
                RawCategory::Detailed {
                    description,
                    topics,
                } => builder.category_with_description(
                    category,
                    description.unwrap_or_default(),
                    topics,
                ),
            };
        }
        builder.build()
    }

    fn entry(&self, category: &CategoryKey) -> Option<&CatalogEntry> {
        self.categories.iter().find(|entry| &entry.key == category)
    }

    /// Topics of a category, or an empty slice if the category is unknown.
    #[must_use]
    pub fn topics_for(&self, category: &CategoryKey) -> &[TopicSlug] {
        self.entry(category)
            .map(|entry| entry.topics.as_slice())
            .unwrap_or(&[])
    }

    #[must_use]
    pub fn description(&self, category: &CategoryKey) -> Option<&str> {
        self.entry(category)
            .and_then(|entry| entry.description.as_deref())
    }

    #[must_use]
    pub fn contains_category(&self, category: &CategoryKey) -> bool {
        self.entry(category).is_some()
    }

    #[must_use]
    pub fn contains_topic(&self, category: &CategoryKey, topic: &TopicSlug) -> bool {
        self.topics_for(category).contains(topic)
    }

    pub fn categories(&self) -> impl Iterator<Item = &CategoryKey> {
        self.categories.iter().map(|entry| &entry.key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    #[must_use]
    pub fn topic_count(&self) -> usize {
        self.categories.iter().map(|entry| entry.topics.len()).sum()
    }

    /// Small catalog used when no catalog file is configured.
    #[must_use]
    pub fn builtin() -> Self {
        let builder = Self::builder()
            .category_with_description(
                "basics_go",
                "Start here: syntax, variables, control flow and functions.",
                [
                    "hello-world",
                    "variables",
                    "constants",
                    "data-types",
                    "loops",
                    "if-else",
                    "switch",
                    "functions",
                ],
            )
            .category_with_description(
                "data_structures_go",
                "Arrays, slices, maps and structs, and how Go lays them out.",
                ["arrays", "slices", "maps", "structs", "pointers"],
            )
            .category_with_description(
                "advanced_go",
                "Interfaces, error handling, concurrency and generics.",
                [
                    "interfaces",
                    "errors",
                    "goroutines",
                    "channels",
                    "select",
                    "generics",
                ],
            );
        builder.build().unwrap_or_default()
    }
}

struct RawEntry {
    key: String,
    description: Option<String>,
    topics: Vec<String>,
}

/// Collects raw category/topic strings and validates them on `build`.
#[derive(Default)]
pub struct TopicCatalogBuilder {
    entries: Vec<RawEntry>,
}

impl TopicCatalogBuilder {
    #[must_use]
    pub fn category<I, S>(mut self, key: impl Into<String>, topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries.push(RawEntry {
            key: key.into(),
            description: None,
            topics: topics.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Like `category`, with a short description shown on the category card.
    /// A blank description is dropped.
    #[must_use]
    pub fn category_with_description<I, S>(
        mut self,
        key: impl Into<String>,
        description: impl Into<String>,
        topics: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let description = description.into().trim().to_owned();
        self.entries.push(RawEntry {
            key: key.into(),
            description: (!description.is_empty()).then_some(description),
            topics: topics.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// # Errors
    ///
    /// Returns `CatalogError` if a key is blank or a category/topic repeats.
    pub fn build(self) -> Result<TopicCatalog, CatalogError> {
        let mut seen = HashSet::new();
        let mut categories = Vec::with_capacity(self.entries.len());

        for raw in self.entries {
            let key = CategoryKey::parse(&raw.key)?;
            if !seen.insert(key.clone()) {
                return Err(CatalogError::DuplicateCategory(key.as_str().to_owned()));
            }

            let mut topic_seen = HashSet::new();
            let mut topics = Vec::with_capacity(raw.topics.len());
            for raw_topic in raw.topics {
                let topic = TopicSlug::parse(raw_topic)?;
                if !topic_seen.insert(topic.clone()) {
                    return Err(CatalogError::DuplicateTopic {
                        category: key.as_str().to_owned(),
                        topic: topic.as_str().to_owned(),
                    });
                }
                topics.push(topic);
            }
            categories.push(CatalogEntry {
                key,
                description: raw.description,
                topics,
            });
        }

        Ok(TopicCatalog { categories })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCategory {
    Topics(Vec<String>),
    Detailed {
        #[serde(default)]
        description: Option<String>,
        topics: Vec<String>,
    },
}

/// JSON object read in document order.
struct RawCatalog(Vec<(String, RawCategory)>);

impl<'de> Deserialize<'de> for RawCatalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RawCatalogVisitor;

        impl<'de> Visitor<'de> for RawCatalogVisitor {
            type Value = RawCatalog;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping category keys to topic lists")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, category)) = map.next_entry::<String, RawCategory>()? {
                    entries.push((key, category));
                }
                Ok(RawCatalog(entries))
            }
        }

        deserializer.deserialize_map(RawCatalogVisitor)
    }
}
