//! The post entity.
//!
//! A [`Post`] is created exactly once and never modified afterwards. All
//! fields are private so the only ways to obtain one are [`Post::new`], which
//! validates, and [`Post::from_parts`], which is meant for restore paths and
//! leaves validation to the receiving store.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use unicase::UniCase;

use crate::error::PostError;

/// Unique identifier for a post (UUID v7 for time-ordering).
///
/// Identifiers are generated from the clock plus random bits, so they are
/// never reused within a process lifetime, including after a bulk delete.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(uuid::Uuid);

impl PostId {
    /// Generate a new time-ordered post ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7())
    }

    /// Create from an existing UUID.
    pub fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }

    /// The all-zero ID. Never assigned to a stored post.
    pub const fn nil() -> Self {
        Self(uuid::Uuid::nil())
    }

    /// Returns `true` for the all-zero ID.
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }

    /// Short representation (first 8 characters of UUID).
    pub fn short_id(&self) -> String {
        self.0.to_string()[..8].to_string()
    }
}

impl Default for PostId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PostId({})", self.short_id())
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PostId {
    type Err = PostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        uuid::Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| PostError::InvalidId(s.to_string()))
    }
}

/// A single blog entry.
///
/// # Invariants
/// - `title` and `content` are non-empty for every post built by [`Post::new`].
/// - `id` and `created_at` are assigned at construction and never change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    id: PostId,
    title: String,
    content: String,
    created_at: DateTime<Utc>,
}

impl Post {
    /// Creates a post with a fresh ID and the current UTC time.
    ///
    /// The title and content are stored exactly as given; normalization is
    /// the caller's job. Only emptiness is checked here.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Result<Self, PostError> {
        let title = title.into();
        let content = content.into();
        if title.is_empty() {
            return Err(PostError::EmptyTitle);
        }
        if content.is_empty() {
            return Err(PostError::EmptyContent);
        }
        Ok(Self {
            id: PostId::new(),
            title,
            content,
            created_at: Utc::now(),
        })
    }

    /// Reassembles a post from previously captured fields without validating.
    ///
    /// Used by import and fixture paths where identity already exists.
    /// Stores call [`Post::validate`] before accepting the result.
    pub fn from_parts(
        id: PostId,
        title: impl Into<String>,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            created_at,
        }
    }

    /// Re-checks the entity invariants.
    pub fn validate(&self) -> Result<(), PostError> {
        if self.id.is_nil() {
            return Err(PostError::InvalidId(self.id.to_string()));
        }
        if self.title.is_empty() {
            return Err(PostError::EmptyTitle);
        }
        if self.content.is_empty() {
            return Err(PostError::EmptyContent);
        }
        Ok(())
    }

    pub fn id(&self) -> PostId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Case-insensitive title comparison used by the duplicate-title rule.
    pub fn title_matches(&self, other: &str) -> bool {
        titles_equal(&self.title, other)
    }
}

/// Compares two titles ignoring case (Unicode case folding, so `Σ`, `σ`
/// and `ς` are all equal).
pub fn titles_equal(a: &str, b: &str) -> bool {
    UniCase::new(a) == UniCase::new(b)
}
