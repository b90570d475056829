use thiserror::Error;

/// Errors produced when constructing or parsing post entities.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PostError {
    #[error("title cannot be empty")]
    EmptyTitle,

    #[error("content cannot be empty")]
    EmptyContent,

    #[error("invalid post id: {0}")]
    InvalidId(String),
}
