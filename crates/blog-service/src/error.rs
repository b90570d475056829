use thiserror::Error;

use blog_store::StoreError;
use blog_types::PostError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("title cannot be empty")]
    EmptyTitle,

    #[error("content cannot be empty")]
    EmptyContent,

    #[error("content too short: must contain at least {min} bytes, got {actual}")]
    ContentTooShort { min: usize, actual: usize },

    #[error("title already exists (case insensitive): {0}")]
    DuplicateTitle(String),

    #[error("post not found: {0}")]
    NotFound(String),

    #[error("no posts found")]
    Empty,

    #[error("storage error: {0}")]
    Storage(#[source] StoreError),
}

impl ServiceError {
    /// Returns `true` for errors caused by caller input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyTitle
                | Self::EmptyContent
                | Self::ContentTooShort { .. }
                | Self::DuplicateTitle(_)
        )
    }

    /// Returns `true` for missing-entity and empty-collection errors.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Empty)
    }
}

impl From<PostError> for ServiceError {
    fn from(value: PostError) -> Self {
        match value {
            PostError::EmptyTitle => Self::EmptyTitle,
            PostError::EmptyContent => Self::EmptyContent,
            PostError::InvalidId(id) => Self::NotFound(id),
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound(id) => Self::NotFound(id.to_string()),
            StoreError::Empty => Self::Empty,
            StoreError::TitleTaken(title) => Self::DuplicateTitle(title),
            other => Self::Storage(other),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
