//! Emotion tags and the catalog that names them.
//!
//! The catalog is display metadata: entries and filters refer to emotions by
//! [`EmotionId`] only, and nothing outside the catalog interprets labels or
//! colours.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::JournalError;

/// Opaque identifier of an emotion category (e.g. `"joy"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmotionId(String);

impl EmotionId {
    /// Creates an identifier from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmotionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EmotionId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for EmotionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A single catalog entry describing how an emotion is presented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionTag {
    /// Stable identifier referenced by entries and filters.
    pub id: EmotionId,
    /// Human-readable label.
    pub label: String,
    /// Display colour, written `#rrggbb`. Anything else is shown uncoloured.
    pub color: String,
}

impl EmotionTag {
    /// Creates a tag from its parts.
    #[must_use]
    pub fn new(id: &str, label: &str, color: &str) -> Self {
        Self {
            id: EmotionId::from(id),
            label: label.to_owned(),
            color: color.to_owned(),
        }
    }

    /// Parses [`color`](Self::color) into red, green, and blue components.
    ///
    /// Returns `None` unless the colour is `#` followed by six hex digits.
    #[must_use]
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let hex = self.color.strip_prefix('#')?;
        if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(hex, 16).ok()?;
        let channel = |shift: u32| u8::try_from((value >> shift) & 0xff).ok();
        Some((channel(16)?, channel(8)?, channel(0)?))
    }
}

/// Ordered, id-unique collection of emotion tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmotionCatalog {
    tags: Vec<EmotionTag>,
}

impl EmotionCatalog {
    /// Builds a catalog, preserving the given order.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::DuplicateEmotion`] when two tags share an id.
    pub fn new(tags: Vec<EmotionTag>) -> Result<Self, JournalError> {
        for (index, tag) in tags.iter().enumerate() {
            let repeated = tags.iter().skip(index + 1).any(|other| other.id == tag.id);
            if repeated {
                return Err(JournalError::DuplicateEmotion {
                    id: tag.id.to_string(),
                });
            }
        }
        Ok(Self { tags })
    }

    /// Returns the catalog shipped with Reflexa.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            tags: vec![
                EmotionTag::new("joy", "Joy", "#f5b82e"),
                EmotionTag::new("calm", "Calm", "#5fb49c"),
                EmotionTag::new("grateful", "Grateful", "#9b7fd1"),
                EmotionTag::new("excited", "Excited", "#f2784b"),
                EmotionTag::new("sad", "Sad", "#5a8dee"),
                EmotionTag::new("anxious", "Anxious", "#c58b5a"),
                EmotionTag::new("angry", "Angry", "#e0464f"),
                EmotionTag::new("tired", "Tired", "#8c8c99"),
            ],
        }
    }

    /// Looks up a tag by id.
    #[must_use]
    pub fn get(&self, id: &EmotionId) -> Option<&EmotionTag> {
        self.tags.iter().find(|tag| &tag.id == id)
    }

    /// Returns true if the catalog names this id.
    #[must_use]
    pub fn contains(&self, id: &EmotionId) -> bool {
        self.get(id).is_some()
    }

    /// Returns the index of the tag with this id.
    #[must_use]
    pub fn position(&self, id: &EmotionId) -> Option<usize> {
        self.tags.iter().position(|tag| &tag.id == id)
    }

    /// Returns the tag at `index` in catalog order.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&EmotionTag> {
        self.tags.get(index)
    }

    /// Iterates tags in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &EmotionTag> {
        self.tags.iter()
    }

    /// Number of tags.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns true if the catalog has no tags.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Returns the display label for `id`, falling back to the raw id.
    #[must_use]
    pub fn label_for<'a>(&'a self, id: &'a EmotionId) -> &'a str {
        self.get(id).map_or_else(|| id.as_str(), |tag| tag.label.as_str())
    }
}

impl Default for EmotionCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
