use std::sync::Arc;

use blog_types::{Post, PostId};

use crate::error::{StoreError, StoreResult};

/// Keyed post collection.
///
/// All implementations must satisfy these invariants:
/// - Every operation is safe to call concurrently without external locking.
/// - A post is accepted only if [`Post::validate`] passes.
/// - Posts are never modified once stored; the only removal is `delete_all`.
/// - Iteration order of `get_all` is unspecified and may differ between calls.
pub trait PostStore: Send + Sync {
    /// Insert a post keyed by its ID.
    ///
    /// Reusing an ID overwrites the earlier entry. IDs are generated per post,
    /// so this only happens when a caller reinserts the same post.
    fn create(&self, post: &Post) -> StoreResult<()>;

    /// Insert a post unless a stored post already has an equal title under
    /// case-insensitive comparison.
    ///
    /// The title check and the insert happen under one exclusive lock, so two
    /// concurrent callers with the same title cannot both succeed.
    /// Returns [`StoreError::TitleTaken`] on conflict.
    fn create_if_title_absent(&self, post: &Post) -> StoreResult<()>;

    /// Exact-match lookup. Returns [`StoreError::NotFound`] if absent.
    fn get_by_id(&self, id: &PostId) -> StoreResult<Post>;

    /// Every stored post. Returns [`StoreError::Empty`] when there are none.
    fn get_all(&self) -> StoreResult<Vec<Post>>;

    /// Remove every post. Idempotent.
    fn delete_all(&self) -> StoreResult<()>;

    /// Number of stored posts.
    ///
    /// Default implementation goes through `get_all()`. Backends may
    /// override to avoid cloning the collection.
    fn count(&self) -> StoreResult<usize> {
        match self.get_all() {
            Ok(posts) => Ok(posts.len()),
            Err(StoreError::Empty) => Ok(0),
            Err(e) => Err(e),
        }
    }
}

impl<S: PostStore + ?Sized> PostStore for Arc<S> {
    fn create(&self, post: &Post) -> StoreResult<()> {
        (**self).create(post)
    }

    fn create_if_title_absent(&self, post: &Post) -> StoreResult<()> {
        (**self).create_if_title_absent(post)
    }

    fn get_by_id(&self, id: &PostId) -> StoreResult<Post> {
        (**self).get_by_id(id)
    }

    fn get_all(&self) -> StoreResult<Vec<Post>> {
        (**self).get_all()
    }

    fn delete_all(&self) -> StoreResult<()> {
        (**self).delete_all()
    }

    fn count(&self) -> StoreResult<usize> {
        (**self).count()
    }
}
