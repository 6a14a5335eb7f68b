//! Scene catalog: the ordered set of narrations to voice.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Suffix appended to a scene id to name its voiceover file
pub const VOICEOVER_FILE_SUFFIX: &str = "_voiceover.mp3";

/// Catalog validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("Scene id must not be empty")]
    EmptyId,

    /// Id would not map to a single file in the output directory
    #[error("Invalid scene id '{0}': must be a single path component")]
    InvalidId(String),

    #[error("Duplicate scene id: {0}")]
    DuplicateId(String),

    #[error("Narration for scene '{0}' must not be empty")]
    EmptyNarration(String),
}

/// One (identifier, narration) pair to be voiced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneEntry {
    pub id: String,
    pub narration: String,
}

impl SceneEntry {
    pub fn new(id: impl Into<String>, narration: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            narration: narration.into(),
        }
    }

    /// Voiceover file name for this entry.
    pub fn file_name(&self) -> String {
        voiceover_file_name(&self.id)
    }

    fn validate(&self) -> Result<(), SceneError> {
        if self.id.is_empty() {
            return Err(SceneError::EmptyId);
        }
        if self.id.contains(['/', '\\']) || self.id == "." || self.id == ".." {
            return Err(SceneError::InvalidId(self.id.clone()));
        }
        if self.narration.trim().is_empty() {
            return Err(SceneError::EmptyNarration(self.id.clone()));
        }
        Ok(())
    }
}

/// File name of the voiceover for scene `id`: `{id}_voiceover.mp3`.
#[inline]
pub fn voiceover_file_name(id: &str) -> String {
    format!("{id}{VOICEOVER_FILE_SUFFIX}")
}

/// Ordered, validated, immutable collection of scene entries.
///
/// Entries keep their declared order; ids are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneCatalog {
    entries: Vec<SceneEntry>,
}

impl SceneCatalog {
    /// Build a catalog, rejecting invalid or duplicate entries.
    pub fn new(entries: Vec<SceneEntry>) -> Result<Self, SceneError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            entry.validate()?;
            if !seen.insert(entry.id.as_str()) {
                return Err(SceneError::DuplicateId(entry.id.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Build a catalog from `(id, narration)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, SceneError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(id, narration)| SceneEntry::new(id, narration))
                .collect(),
        )
    }

    /// The built-in apartment tour.
    pub fn default_scenes() -> Self {
        Self {
            entries: DEFAULT_SCENES
                .iter()
                .map(|(id, narration)| SceneEntry::new(*id, *narration))
                .collect(),
        }
    }

    pub fn entries(&self) -> &[SceneEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SceneEntry> {
        self.entries.iter()
    }

    pub fn get(&self, id: &str) -> Option<&SceneEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a SceneCatalog {
    type Item = &'a SceneEntry;
    type IntoIter = std::slice::Iter<'a, SceneEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

const DEFAULT_SCENES: &[(&str, &str)] = &[
    (
        "living_room",
        "Welcome to the luxury living room. This space features a comfortable designer sofa, \
         a state-of-the-art smart TV, and elegant decor for a premium experience.",
    ),
    (
        "kitchen",
        "This is the modern kitchen, equipped with high-end stainless steel appliances, \
         a spacious marble countertop, and stylish pendant lighting.",
    ),
    (
        "master_bedroom",
        "Step into the master bedroom, featuring a king-sized bed, plush bedding, \
         a cozy seating area, and a breathtaking city view from the large windows.",
    ),
];
