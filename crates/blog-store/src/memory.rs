use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use blog_types::{Post, PostId};

use crate::error::{StoreError, StoreResult};
use crate::traits::PostStore;

/// In-memory, HashMap-based post store.
///
/// All posts are held behind one `RwLock`: writers take it exclusively,
/// readers share it. Posts are cloned on the way in and on the way out.
/// Data is lost when the store is dropped.
pub struct InMemoryPostStore {
    posts: RwLock<HashMap<PostId, Post>>,
}

impl InMemoryPostStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(HashMap::new()),
        }
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, HashMap<PostId, Post>>> {
        self.posts
            .read()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, HashMap<PostId, Post>>> {
        self.posts
            .write()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PostStore for InMemoryPostStore {
    fn create(&self, post: &Post) -> StoreResult<()> {
        post.validate()?;
        let mut map = self.write()?;
        if map.insert(post.id(), post.clone()).is_some() {
            debug!(id = %post.id(), "overwrote post with reused id");
        }
        debug!(id = %post.id(), "post stored");
        Ok(())
    }

    fn create_if_title_absent(&self, post: &Post) -> StoreResult<()> {
        post.validate()?;
        let mut map = self.write()?;
        if map.values().any(|existing| existing.title_matches(post.title())) {
            return Err(StoreError::TitleTaken(post.title().to_string()));
        }
        map.insert(post.id(), post.clone());
        debug!(id = %post.id(), "post stored");
        Ok(())
    }

    fn get_by_id(&self, id: &PostId) -> StoreResult<Post> {
        let map = self.read()?;
        map.get(id).cloned().ok_or(StoreError::NotFound(*id))
    }

    fn get_all(&self) -> StoreResult<Vec<Post>> {
        let map = self.read()?;
        if map.is_empty() {
            return Err(StoreError::Empty);
        }
        Ok(map.values().cloned().collect())
    }

    fn delete_all(&self) -> StoreResult<()> {
        let mut map = self.write()?;
        let removed = map.len();
        map.clear();
        debug!(removed, "all posts deleted");
        Ok(())
    }

    fn count(&self) -> StoreResult<usize> {
        Ok(self.read()?.len())
    }
}

impl std::fmt::Debug for InMemoryPostStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.posts.read().map(|map| map.len()).ok();
        f.debug_struct("InMemoryPostStore")
            .field("post_count", &count)
            .finish()
    }
}
