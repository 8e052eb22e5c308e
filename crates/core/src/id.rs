//! Unique identifiers for bootcamp entities.

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique identifier for a ContentItem
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ContentId(Ulid);

impl ContentId {
    /// Generate a new ContentId
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for ContentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ContentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for ContentId {
    type Err = ulid::DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Unique identifier for a Bootcamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BootcampId(Ulid);

impl BootcampId {
    /// Generate a new BootcampId
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for BootcampId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BootcampId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for BootcampId {
    type Err = ulid::DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}
