//! Shot reference notes
//!
//! Numbered free-text notes kept next to favorites. Stored as a plain JSON
//! array of `{id, description}`.

use serde::{Deserialize, Serialize};

use crate::error::ReferenceError;

/// Description given to a freshly added note
pub const NEW_REFERENCE_DESCRIPTION: &str = "New shot reference";
/// The single note a first run starts with
pub const EXAMPLE_REFERENCE_DESCRIPTION: &str =
    "Example: add your own shot references here";

/// A single note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub id: u32,
    pub description: String,
}

/// Reference notes in insertion order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct References {
    pub entries: Vec<Reference>,
}

impl References {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Starting list when nothing has been saved yet
    pub fn with_example() -> Self {
        Self {
            entries: vec![Reference {
                id: 1,
                description: EXAMPLE_REFERENCE_DESCRIPTION.to_string(),
            }],
        }
    }

    /// Append a note with the default description and return its id.
    /// Ids are one past the highest in use.
    pub fn add(&mut self) -> u32 {
        let id = self.entries.iter().map(|r| r.id).max().map_or(1, |max| max + 1);
        self.entries.push(Reference {
            id,
            description: NEW_REFERENCE_DESCRIPTION.to_string(),
        });
        log::debug!("Added reference {}", id);
        id
    }

    /// Delete by id. Returns whether a note was removed.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.entries.len();
        self.entries.retain(|r| r.id != id);
        self.entries.len() != before
    }

    /// Replace a note's description. Blank descriptions are rejected.
    pub fn update(&mut self, id: u32, description: &str) -> Result<(), ReferenceError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(ReferenceError::EmptyDescription);
        }
        let reference = self
            .entries
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(ReferenceError::NotFound { id })?;
        reference.description = description.to_string();
        Ok(())
    }

    pub fn get(&self, id: u32) -> Option<&Reference> {
        self.entries.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reference> {
        self.entries.iter()
    }

    pub fn to_json(&self) -> Result<String, ReferenceError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ReferenceError> {
        let references: References = serde_json::from_str(json)?;
        log::info!("Loaded {} references", references.len());
        Ok(references)
    }
}
