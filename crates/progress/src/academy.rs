//! Registry of bootcamps and developers.
//!
//! Callers that address entities by id or name go through the academy, which
//! resolves both sides of an enrollment before touching either. Every mutation
//! takes `&mut self`, so one writer at a time is enforced by the borrow checker.

use bootcamp_core::{Bootcamp, BootcampId, Developer};
use std::collections::HashMap;
use tracing::debug;
use crate::error::{ProgressError, Result};

/// Bootcamps and developers known to the system.
#[derive(Debug, Clone, Default)]
pub struct Academy {
    bootcamps: HashMap<BootcampId, Bootcamp>,
    bootcamp_order: Vec<BootcampId>,
    developers: HashMap<String, Developer>,
    developer_order: Vec<String>,
}

impl Academy {
    /// Create an empty academy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a bootcamp.
    ///
    /// An id that is already registered is rejected: the stored bootcamp holds
    /// the enrollment records of developers who took its content.
    pub fn add_bootcamp(&mut self, bootcamp: Bootcamp) -> Result<BootcampId> {
        let id = bootcamp.id;
        if self.bootcamps.contains_key(&id) {
            return Err(ProgressError::DuplicateBootcamp(id));
        }
        debug!(bootcamp = %bootcamp.name, %id, "Added bootcamp");
        self.bootcamps.insert(id, bootcamp);
        self.bootcamp_order.push(id);
        Ok(id)
    }

    /// Register a new developer with nothing enrolled.
    pub fn register_developer(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        if self.developers.contains_key(&name) {
            return Err(ProgressError::DuplicateDeveloper(name));
        }
        debug!(developer = %name, "Registered developer");
        self.developers.insert(name.clone(), Developer::new(name.clone()));
        self.developer_order.push(name);
        Ok(())
    }

    /// Get a bootcamp by id.
    pub fn bootcamp(&self, id: BootcampId) -> Option<&Bootcamp> {
        self.bootcamps.get(&id)
    }

    /// Find the first bootcamp with this name.
    pub fn find_bootcamp(&self, name: &str) -> Option<&Bootcamp> {
        self.bootcamps().find(|b| b.name == name)
    }

    /// Get a developer by name.
    pub fn developer(&self, name: &str) -> Option<&Developer> {
        self.developers.get(name)
    }

    /// Bootcamps in the order they were added.
    pub fn bootcamps(&self) -> impl Iterator<Item = &Bootcamp> {
        self.bootcamp_order
            .iter()
            .filter_map(|id| self.bootcamps.get(id))
    }

    /// Developers in the order they registered.
    pub fn developers(&self) -> impl Iterator<Item = &Developer> {
        self.developer_order
            .iter()
            .filter_map(|name| self.developers.get(name))
    }

    /// Enroll a developer in a bootcamp.
    ///
    /// Both the developer and the bootcamp are resolved first; if either is
    /// missing nothing is modified.
    pub fn enroll(&mut self, developer: &str, bootcamp_id: BootcampId) -> Result<()> {
        let bootcamp = self
            .bootcamps
            .get_mut(&bootcamp_id)
            .ok_or(ProgressError::BootcampNotFound(bootcamp_id))?;
        let dev = self
            .developers
            .get_mut(developer)
            .ok_or_else(|| ProgressError::DeveloperNotFound(developer.to_string()))?;

        dev.enroll(bootcamp);
        Ok(())
    }

    /// Advance a developer by one content item.
    ///
    /// A developer with nothing enrolled is not an error; see
    /// [`Developer::progress`].
    pub fn progress(&mut self, developer: &str) -> Result<()> {
        let dev = self
            .developers
            .get_mut(developer)
            .ok_or_else(|| ProgressError::DeveloperNotFound(developer.to_string()))?;
        dev.progress();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bootcamp_core::ContentItem;

    fn academy_with_bootcamp() -> (Academy, BootcampId) {
        let mut academy = Academy::new();
        let id = academy.add_bootcamp(
            Bootcamp::new("Java Developer", "")
                .with_content(ContentItem::course("A", "", 1))
                .with_content(ContentItem::course("B", "", 2)),
        )
        .unwrap();
        (academy, id)
    }

    #[test]
    fn test_register_developer_rejects_duplicates() {
        let mut academy = Academy::new();
        academy.register_developer("alice").unwrap();

        let err = academy.register_developer("alice").unwrap_err();
        assert!(matches!(err, ProgressError::DuplicateDeveloper(ref n) if n == "alice"));
        assert_eq!(academy.developers().count(), 1);
    }

    #[test]
    fn test_enroll_and_progress() {
        let (mut academy, id) = academy_with_bootcamp();
        academy.register_developer("alice").unwrap();

        academy.enroll("alice", id).unwrap();
        academy.progress("alice").unwrap();

        let dev = academy.developer("alice").unwrap();
        assert_eq!(dev.completed_content().len(), 1);
        assert_eq!(dev.calculate_total_experience(), 10.0);
        assert!(academy.bootcamp(id).unwrap().is_enrolled("alice"));
    }

    #[test]
    fn test_enroll_unknown_bootcamp_mutates_nothing() {
        let (mut academy, _) = academy_with_bootcamp();
        academy.register_developer("alice").unwrap();
        let missing = BootcampId::new();

        let err = academy.enroll("alice", missing).unwrap_err();

        assert!(matches!(err, ProgressError::BootcampNotFound(id) if id == missing));
        assert!(academy.developer("alice").unwrap().enrolled_content().is_empty());
    }

    #[test]
    fn test_enroll_unknown_developer_mutates_nothing() {
        let (mut academy, id) = academy_with_bootcamp();

        let err = academy.enroll("ghost", id).unwrap_err();

        assert!(matches!(err, ProgressError::DeveloperNotFound(ref n) if n == "ghost"));
        assert!(academy.bootcamp(id).unwrap().enrolled_developers().is_empty());
    }

    #[test]
    fn test_progress_without_enrollment_is_not_an_error() {
        let mut academy = Academy::new();
        academy.register_developer("alice").unwrap();

        academy.progress("alice").unwrap();
        academy.progress("alice").unwrap();

        assert!(academy.developer("alice").unwrap().completed_content().is_empty());
        assert!(matches!(
            academy.progress("bob"),
            Err(ProgressError::DeveloperNotFound(_))
        ));
    }

    #[test]
    fn test_listing_keeps_insertion_order() {
        let mut academy = Academy::new();
        academy.add_bootcamp(Bootcamp::new("Rust", "")).unwrap();
        academy.add_bootcamp(Bootcamp::new("Go", "")).unwrap();
        academy.register_developer("zoe").unwrap();
        academy.register_developer("adam").unwrap();

        let bootcamps: Vec<_> = academy.bootcamps().map(|b| b.name.as_str()).collect();
        let developers: Vec<_> = academy.developers().map(|d| d.name()).collect();
        assert_eq!(bootcamps, vec!["Rust", "Go"]);
        assert_eq!(developers, vec!["zoe", "adam"]);
        assert_eq!(academy.find_bootcamp("Go").unwrap().name, "Go");
        assert!(academy.find_bootcamp("Java").is_none());
    }

    #[test]
    fn test_add_bootcamp_twice_keeps_enrollment() {
        let (mut academy, id) = academy_with_bootcamp();
        let stale = academy.bootcamp(id).unwrap().clone();
        academy.register_developer("alice").unwrap();
        academy.enroll("alice", id).unwrap();

        let err = academy.add_bootcamp(stale).unwrap_err();

        assert!(matches!(err, ProgressError::DuplicateBootcamp(dup) if dup == id));
        assert_eq!(academy.bootcamps().count(), 1);
        assert!(academy.bootcamp(id).unwrap().is_enrolled("alice"));
        assert_eq!(academy.developer("alice").unwrap().enrolled_content().len(), 2);
    }
}
