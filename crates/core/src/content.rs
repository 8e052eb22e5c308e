//! Content model - the learning material a bootcamp is made of.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::hash::{Hash, Hasher};
use crate::id::ContentId;
use crate::Time;

/// Base experience points awarded by every kind of content.
pub const DEFAULT_XP: f64 = 10.0;

/// Bonus on top of [`DEFAULT_XP`] for attending a mentorship.
pub const MENTORSHIP_BONUS_XP: f64 = 20.0;

/// A catalog entry a developer can enroll in and complete.
///
/// Two items are the same item only if they share an id; titles may repeat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    /// Unique identifier
    #[serde(default)]
    pub id: ContentId,

    /// Title
    pub title: String,

    /// Description
    #[serde(default)]
    pub description: String,

    /// What kind of content this is
    pub kind: ContentKind,
}

/// Kinds of content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    /// A course, worth more the longer it runs
    Course {
        /// Workload in hours
        workload_hours: u32,
    },
    /// A scheduled mentorship session
    Mentorship {
        /// When the session takes place
        date: Time,
    },
}

impl ContentItem {
    /// Create a course.
    pub fn course(
        title: impl Into<String>,
        description: impl Into<String>,
        workload_hours: u32,
    ) -> Self {
        Self {
            id: ContentId::new(),
            title: title.into(),
            description: description.into(),
            kind: ContentKind::Course { workload_hours },
        }
    }

    /// Create a mentorship session.
    pub fn mentorship(
        title: impl Into<String>,
        description: impl Into<String>,
        date: Time,
    ) -> Self {
        Self {
            id: ContentId::new(),
            title: title.into(),
            description: description.into(),
            kind: ContentKind::Mentorship { date },
        }
    }

    /// Experience points earned by completing this item.
    pub fn experience_value(&self) -> f64 {
        match self.kind {
            ContentKind::Course { workload_hours } => DEFAULT_XP * f64::from(workload_hours),
            ContentKind::Mentorship { .. } => DEFAULT_XP + MENTORSHIP_BONUS_XP,
        }
    }
}

impl PartialEq for ContentItem {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ContentItem {}

impl Hash for ContentItem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

// Equality and hashing go through the id alone, so sets of items can be
// queried by id.
impl Borrow<ContentId> for ContentItem {
    fn borrow(&self) -> &ContentId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_experience_scales_with_workload() {
        let course = ContentItem::course("Java", "Java basics", 8);
        assert_eq!(course.experience_value(), 80.0);

        let empty = ContentItem::course("Intro", "", 0);
        assert_eq!(empty.experience_value(), 0.0);
    }

    #[test]
    fn test_mentorship_experience_is_flat() {
        let mentorship = ContentItem::mentorship("Mentoring", "Q&A", chrono::Utc::now());
        assert_eq!(mentorship.experience_value(), 30.0);
    }

    #[test]
    fn test_identity_is_the_id() {
        let a = ContentItem::course("Java", "Java basics", 8);
        let b = ContentItem::course("Java", "Java basics", 8);
        let mut renamed = a.clone();
        renamed.title = "Java 21".to_string();

        assert_ne!(a, b);
        assert_eq!(a, renamed);
    }

    #[test]
    fn test_set_lookup_by_id() {
        let item = ContentItem::course("Java", "", 8);
        let set: std::collections::HashSet<ContentItem> = [item.clone()].into_iter().collect();
        assert!(set.contains(&item.id));
        assert!(!set.contains(&ContentId::new()));
    }

    #[test]
    fn test_deserialize_without_id_generates_one() {
        let json = r#"{"title":"Rust","kind":{"course":{"workload_hours":4}}}"#;
        let item: ContentItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.title, "Rust");
        assert!(item.description.is_empty());
        assert_eq!(item.kind, ContentKind::Course { workload_hours: 4 });
        assert_eq!(item.experience_value(), 40.0);
    }
}
