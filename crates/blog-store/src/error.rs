use blog_types::{PostError, PostId};

/// Errors from post store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No post has the requested ID.
    #[error("post not found: {0}")]
    NotFound(PostId),

    /// The store currently holds no posts.
    #[error("store is empty")]
    Empty,

    /// The post handed to the store violates the entity contract.
    #[error("invalid post: {0}")]
    InvalidPost(#[from] PostError),

    /// A stored post already carries this title (case-insensitive).
    #[error("title already taken: {0}")]
    TitleTaken(String),

    /// A writer panicked while holding the collection lock.
    #[error("store lock poisoned: {0}")]
    LockPoisoned(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
