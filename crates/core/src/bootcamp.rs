//! Bootcamp model - a learning track of ordered content.

use serde::{Deserialize, Serialize};
use crate::content::ContentItem;
use crate::id::BootcampId;
use crate::ordered_set::OrderedSet;
use crate::Time;

/// How long a bootcamp runs unless told otherwise.
pub const DEFAULT_DURATION_DAYS: i64 = 45;

/// A bootcamp groups content items and tracks who enrolled in it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bootcamp {
    /// Unique identifier
    pub id: BootcampId,

    /// Bootcamp name
    pub name: String,

    /// Description
    pub description: String,

    /// When it starts
    pub starts_at: Time,

    /// When it ends
    pub ends_at: Time,

    /// Content in the order it was added
    contents: OrderedSet<ContentItem>,

    /// Names of enrolled developers, in enrollment order
    enrolled_developers: OrderedSet<String>,
}

impl Bootcamp {
    /// Create a bootcamp starting now and running for [`DEFAULT_DURATION_DAYS`].
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let now = chrono::Utc::now();
        Self {
            id: BootcampId::new(),
            name: name.into(),
            description: description.into(),
            starts_at: now,
            ends_at: now + chrono::Duration::days(DEFAULT_DURATION_DAYS),
            contents: OrderedSet::new(),
            enrolled_developers: OrderedSet::new(),
        }
    }

    /// Add content. Returns false if the item is already part of the bootcamp.
    pub fn add_content(&mut self, item: ContentItem) -> bool {
        self.contents.insert(item)
    }

    /// Builder-style variant of [`Bootcamp::add_content`].
    pub fn with_content(mut self, item: ContentItem) -> Self {
        self.add_content(item);
        self
    }

    /// Content items in insertion order.
    pub fn content_items(&self) -> &OrderedSet<ContentItem> {
        &self.contents
    }

    /// Enrolled developer names in enrollment order.
    pub fn enrolled_developers(&self) -> &OrderedSet<String> {
        &self.enrolled_developers
    }

    /// Whether a developer with this name is enrolled.
    pub fn is_enrolled(&self, developer: &str) -> bool {
        self.enrolled_developers.contains(developer)
    }

    /// Record a developer as enrolled. Only `Developer::enroll` links the
    /// two sides, so this stays crate-private.
    pub(crate) fn record_enrollment(&mut self, developer: &str) -> bool {
        self.enrolled_developers.insert(developer.to_string())
    }

    /// Total experience available across all content.
    pub fn total_experience(&self) -> f64 {
        self.contents.iter().map(ContentItem::experience_value).sum()
    }
}
