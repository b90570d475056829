use tracing::{info, warn};

use blog_store::{PostStore, StoreError};
use blog_types::{Post, PostId};

use crate::error::{ServiceError, ServiceResult};
use crate::rules::PostRules;

/// Post use-case service over a [`PostStore`].
///
/// Holds no post state of its own. Share it across request tasks behind an
/// `Arc`; every method takes `&self`.
pub struct PostService<S: PostStore> {
    store: S,
    rules: PostRules,
}

impl<S: PostStore> PostService<S> {
    /// Creates a service with the default rules.
    pub fn new(store: S) -> Self {
        Self::with_rules(store, PostRules::default())
    }

    pub fn with_rules(store: S, rules: PostRules) -> Self {
        Self { store, rules }
    }

    pub fn rules(&self) -> &PostRules {
        &self.rules
    }

    /// The underlying store. Callers must not use it for writes.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validates and stores a new post.
    ///
    /// Checks run in this order:
    /// 1. content length (untrimmed content),
    /// 2. duplicate title (title as supplied),
    /// 3. entity construction (trimmed title must be non-empty),
    /// 4. title-checked insert, which repeats the duplicate check against the
    ///    trimmed title under the store's write lock.
    pub fn create_post(&self, title: &str, content: &str) -> ServiceResult<Post> {
        let trimmed_title = title.trim();

        if content.len() < self.rules.min_content_len {
            warn!(
                len = content.len(),
                min = self.rules.min_content_len,
                "rejected post: content too short"
            );
            return Err(ServiceError::ContentTooShort {
                min: self.rules.min_content_len,
                actual: content.len(),
            });
        }

        if self.title_exists(title) {
            warn!(title, "rejected post: duplicate title");
            return Err(ServiceError::DuplicateTitle(title.to_string()));
        }

        let post = Post::new(trimmed_title, content)?;

        self.store.create_if_title_absent(&post).map_err(|e| {
            if matches!(e, StoreError::TitleTaken(_)) {
                warn!(title = post.title(), "rejected post: title taken concurrently");
            }
            ServiceError::from(e)
        })?;

        info!(id = %post.id(), title = post.title(), "post created");
        Ok(post)
    }

    /// Looks up one post by its textual ID.
    ///
    /// Text that is not a valid post ID cannot name a stored post and is
    /// reported as [`ServiceError::NotFound`].
    pub fn get_post_by_id(&self, id: &str) -> ServiceResult<Post> {
        let post_id: PostId = id.parse()?;
        Ok(self.store.get_by_id(&post_id)?)
    }

    /// Every stored post, in unspecified order.
    ///
    /// Returns [`ServiceError::Empty`] when no posts exist.
    pub fn list_posts(&self) -> ServiceResult<Vec<Post>> {
        Ok(self.store.get_all()?)
    }

    /// Removes every post. Succeeds on an already-empty store.
    pub fn delete_all_posts(&self) -> ServiceResult<()> {
        self.store.delete_all()?;
        info!("all posts deleted");
        Ok(())
    }

    pub fn post_count(&self) -> ServiceResult<usize> {
        Ok(self.store.count()?)
    }

    /// Full scan for a case-insensitive title match.
    ///
    /// Any failure to read the collection, including an empty store, counts
    /// as "no match".
    fn title_exists(&self, title: &str) -> bool {
        match self.store.get_all() {
            Ok(posts) => posts.iter().any(|post| post.title_matches(title)),
            Err(StoreError::Empty) => false,
            Err(e) => {
                warn!(error = %e, "duplicate-title check skipped");
                false
            }
        }
    }
}

impl<S: PostStore + std::fmt::Debug> std::fmt::Debug for PostService<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostService")
            .field("store", &self.store)
            .field("rules", &self.rules)
            .finish()
    }
}
