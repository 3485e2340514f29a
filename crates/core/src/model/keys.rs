use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum KeyError {
    #[error("category key must not be empty")]
    EmptyCategory,
    #[error("topic slug must not be empty")]
    EmptyTopic,
}

/// Canonical category key in underscore form (`basics_go`).
///
/// Routes and links use the hyphen form (`basics-go`). Both forms parse to the
/// same key, so callers never re-normalize at their own call sites. A hyphen is
/// always a separator; a category whose name contains a literal hyphen cannot
/// be represented.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryKey(String);

impl CategoryKey {
    /// Parse a category key from either its underscore or hyphen form.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::EmptyCategory` if the input is blank.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, KeyError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(KeyError::EmptyCategory);
        }
        Ok(Self(trimmed.replace('-', "_")))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hyphen form used in routes, links and note keys.
    #[must_use]
    pub fn route_slug(&self) -> String {
        self.0.replace('_', "-")
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        self.0.replace('_', " ")
    }
}

impl fmt::Debug for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CategoryKey({})", self.0)
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CategoryKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CategoryKey {
    type Error = KeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<CategoryKey> for String {
    fn from(key: CategoryKey) -> Self {
        key.0
    }
}

/// Topic identifier, unique within its category (`for-loops`).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TopicSlug(String);

impl TopicSlug {
    /// Parse a topic slug, trimming surrounding whitespace like
    /// `CategoryKey::parse` does.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::EmptyTopic` if the input is blank.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, KeyError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(KeyError::EmptyTopic);
        }
        Ok(Self(trimmed.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        self.0.split('-').collect::<Vec<_>>().join(" ")
    }
}

impl fmt::Debug for TopicSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TopicSlug({})", self.0)
    }
}

impl fmt::Display for TopicSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TopicSlug {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TopicSlug {
    type Error = KeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<TopicSlug> for String {
    fn from(slug: TopicSlug) -> Self {
        slug.0
    }
}
