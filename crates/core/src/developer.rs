//! Developer model - a learner working through bootcamp content.

use serde::Serialize;
use tracing::{debug, warn};
use crate::bootcamp::Bootcamp;
use crate::content::ContentItem;
use crate::id::ContentId;
use crate::ordered_set::OrderedSet;

/// A developer and the content they are enrolled in or have completed.
///
/// An item is never enrolled and completed at the same time. Equality and
/// hashing cover the name and both sets, ignoring order, so a developer must
/// not be mutated while it is used as a key in a hashed container.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Developer {
    name: String,
    enrolled_content: OrderedSet<ContentItem>,
    completed_content: OrderedSet<ContentItem>,
}

/// Where a content item stands for a given developer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ContentState {
    /// Not enrolled
    Unenrolled,
    /// Enrolled, not yet completed
    Enrolled,
    /// Completed
    Completed,
}

impl Developer {
    /// Create a developer with nothing enrolled.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enrolled_content: OrderedSet::new(),
            completed_content: OrderedSet::new(),
        }
    }

    /// Developer name. Bootcamps record enrollment under this name, so it is
    /// fixed for the lifetime of the developer.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Content still to be completed, in enrollment order.
    pub fn enrolled_content(&self) -> &OrderedSet<ContentItem> {
        &self.enrolled_content
    }

    /// Completed content, in completion order.
    pub fn completed_content(&self) -> &OrderedSet<ContentItem> {
        &self.completed_content
    }

    /// Enroll in a bootcamp.
    ///
    /// Every content item of the bootcamp joins the enrolled set, after the
    /// ones already there, and the developer is recorded on the bootcamp.
    /// Items already enrolled or completed are skipped, so enrolling twice in
    /// an unchanged bootcamp changes nothing.
    pub fn enroll(&mut self, bootcamp: &mut Bootcamp) {
        let mut added = 0;
        for item in bootcamp.content_items() {
            if self.completed_content.contains(item) {
                continue;
            }
            if self.enrolled_content.insert(item.clone()) {
                added += 1;
            }
        }
        bootcamp.record_enrollment(&self.name);

        debug!(
            developer = %self.name,
            bootcamp = %bootcamp.name,
            added,
            "Enrolled in bootcamp"
        );
    }

    /// Complete the earliest enrolled content item.
    ///
    /// With nothing enrolled this only emits a warning; the caller carries on.
    pub fn progress(&mut self) {
        match self.enrolled_content.pop_first() {
            Some(item) => {
                debug!(developer = %self.name, content = %item.title, "Completed content");
                self.completed_content.insert(item);
            }
            None => {
                warn!(developer = %self.name, "not enrolled in any content");
            }
        }
    }

    /// Sum of experience over completed content.
    pub fn calculate_total_experience(&self) -> f64 {
        self.completed_content
            .iter()
            .map(ContentItem::experience_value)
            .sum()
    }

    /// State of a content item for this developer.
    pub fn content_state(&self, id: &ContentId) -> ContentState {
        if self.completed_content.contains(id) {
            ContentState::Completed
        } else if self.enrolled_content.contains(id) {
            ContentState::Enrolled
        } else {
            ContentState::Unenrolled
        }
    }
}
