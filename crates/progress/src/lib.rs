//! Progress Tracking
//!
//! Developer and bootcamp registry, enrollment by id, progress reports and
//! catalog loading.

#![warn(missing_docs)]

pub mod error;
pub mod academy;
pub mod tracker;
pub mod catalog;

pub use error::{ProgressError, Result};
pub use academy::Academy;
pub use tracker::{
    ProgressTracker, ProgressSnapshot, BasicProgressTracker, DeveloperProgress, BootcampProgress,
};
pub use catalog::{Catalog, BootcampEntry};
