//! Bootcamp core data models.
//!
//! This crate defines the developers, bootcamps and content items that make
//! up a learning track, together with enrollment, progress advancement and
//! experience aggregation.

#![warn(missing_docs)]

// Core identities
mod id;

// Collections
mod ordered_set;

// Learning material and tracks
mod content;
mod bootcamp;

// Learners
mod developer;

// Re-exports
pub use id::*;
pub use ordered_set::OrderedSet;
pub use content::{ContentItem, ContentKind, DEFAULT_XP, MENTORSHIP_BONUS_XP};
pub use bootcamp::{Bootcamp, DEFAULT_DURATION_DAYS};
pub use developer::{ContentState, Developer};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
