//! Bootcamp catalog loading.
//!
//! A catalog is a JSON document listing bootcamps and their content:
//!
//! ```json
//! {
//!   "bootcamps": [
//!     {
//!       "name": "Java Developer",
//!       "description": "Java bootcamp",
//!       "contents": [
//!         { "title": "Java course", "kind": { "course": { "workload_hours": 8 } } },
//!         { "title": "Java mentorship", "kind": { "mentorship": { "date": "2024-05-01T18:00:00Z" } } }
//!       ]
//!     }
//!   ]
//! }
//! ```

use bootcamp_core::{Bootcamp, ContentItem};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;
use crate::academy::Academy;
use crate::error::Result;

/// A set of bootcamp definitions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// Bootcamps in the order they are listed
    pub bootcamps: Vec<BootcampEntry>,
}

/// A bootcamp definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootcampEntry {
    /// Bootcamp name
    pub name: String,

    /// Description
    #[serde(default)]
    pub description: String,

    /// Content in curriculum order
    #[serde(default)]
    pub contents: Vec<ContentItem>,
}

impl Catalog {
    /// Parse a catalog from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a catalog file.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await?;
        let catalog = Self::from_json(&json)?;
        debug!("Loaded {} bootcamps from {}", catalog.bootcamps.len(), path.display());
        Ok(catalog)
    }

    /// Built-in catalog with a single Java bootcamp.
    pub fn sample() -> Self {
        Self {
            bootcamps: vec![BootcampEntry {
                name: "Java Developer".to_string(),
                description: "Java Developer bootcamp".to_string(),
                contents: vec![
                    ContentItem::course("Java course", "Java fundamentals", 8),
                    ContentItem::course("JavaScript course", "JavaScript fundamentals", 4),
                    ContentItem::mentorship("Java mentorship", "Live Q&A on Java", chrono::Utc::now()),
                ],
            }],
        }
    }

    /// Build bootcamps from the catalog and register them in a new academy.
    pub fn into_academy(self) -> Result<Academy> {
        let mut academy = Academy::new();
        for entry in self.bootcamps {
            let mut bootcamp = Bootcamp::new(entry.name, entry.description);
            for item in entry.contents {
                bootcamp.add_content(item);
            }
            academy.add_bootcamp(bootcamp)?;
        }
        Ok(academy)
    }
}
