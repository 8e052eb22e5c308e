//! Progress tracking service.

use bootcamp_core::{Bootcamp, BootcampId, Developer, Time};
use chrono::Utc;
use serde::Serialize;
use crate::academy::Academy;

/// Progress tracking service.
pub trait ProgressTracker {
    /// Get a developer's progress.
    fn developer_progress(&self, name: &str) -> Option<DeveloperProgress>;

    /// Get a bootcamp's enrollment summary.
    fn bootcamp_progress(&self, id: BootcampId) -> Option<BootcampProgress>;

    /// Developers ranked by total experience, highest first.
    fn leaderboard(&self) -> Vec<DeveloperProgress>;

    /// Take a progress snapshot.
    fn snapshot(&self) -> ProgressSnapshot;
}

/// Progress of a single developer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeveloperProgress {
    /// Developer name
    pub name: String,

    /// Content still enrolled
    pub enrolled: usize,

    /// Content completed
    pub completed: usize,

    /// Percentage complete (0-100)
    pub percentage: f32,

    /// Experience earned so far
    pub total_experience: f64,
}

impl DeveloperProgress {
    /// Compute progress for a developer.
    pub fn of(developer: &Developer) -> Self {
        let enrolled = developer.enrolled_content().len();
        let completed = developer.completed_content().len();
        let total = enrolled + completed;

        let percentage = if total > 0 {
            (completed as f32 / total as f32) * 100.0
        } else {
            0.0
        };

        Self {
            name: developer.name().to_string(),
            enrolled,
            completed,
            percentage,
            total_experience: developer.calculate_total_experience(),
        }
    }
}

/// Enrollment summary of a bootcamp.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BootcampProgress {
    /// Bootcamp id
    pub bootcamp_id: BootcampId,

    /// Bootcamp name
    pub name: String,

    /// Enrolled developer names
    pub enrolled_developers: Vec<String>,

    /// Number of content items
    pub content_items: usize,

    /// Experience available across all content
    pub available_experience: f64,
}

impl BootcampProgress {
    /// Summarize a bootcamp.
    pub fn of(bootcamp: &Bootcamp) -> Self {
        Self {
            bootcamp_id: bootcamp.id,
            name: bootcamp.name.clone(),
            enrolled_developers: bootcamp.enrolled_developers().iter().cloned().collect(),
            content_items: bootcamp.content_items().len(),
            available_experience: bootcamp.total_experience(),
        }
    }
}

/// A snapshot of progress at a point in time.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressSnapshot {
    /// When snapshot was taken
    pub timestamp: Time,

    /// Developer progress in registration order
    pub developers: Vec<DeveloperProgress>,

    /// Bootcamp summaries in insertion order
    pub bootcamps: Vec<BootcampProgress>,
}

/// Progress tracker reading straight from an [`Academy`].
pub struct BasicProgressTracker<'a> {
    academy: &'a Academy,
}

impl<'a> BasicProgressTracker<'a> {
    /// Create a new progress tracker.
    pub fn new(academy: &'a Academy) -> Self {
        Self { academy }
    }
}

impl ProgressTracker for BasicProgressTracker<'_> {
    fn developer_progress(&self, name: &str) -> Option<DeveloperProgress> {
        self.academy.developer(name).map(DeveloperProgress::of)
    }

    fn bootcamp_progress(&self, id: BootcampId) -> Option<BootcampProgress> {
        self.academy.bootcamp(id).map(BootcampProgress::of)
    }

    fn leaderboard(&self) -> Vec<DeveloperProgress> {
        let mut ranking: Vec<_> = self.academy.developers().map(DeveloperProgress::of).collect();
        // Stable sort keeps registration order among ties.
        ranking.sort_by(|a, b| b.total_experience.total_cmp(&a.total_experience));
        ranking
    }

    fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            timestamp: Utc::now(),
            developers: self.academy.developers().map(DeveloperProgress::of).collect(),
            bootcamps: self.academy.bootcamps().map(BootcampProgress::of).collect(),
        }
    }
}
