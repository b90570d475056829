use std::sync::Arc;

use blog_service::{PostRules, PostService};
use blog_store::{InMemoryPostStore, PostStore};

/// Post service over any store backend.
pub type DynPostService = PostService<Arc<dyn PostStore>>;

/// Shared handler state. Cloned per request; the service is shared.
#[derive(Clone)]
pub struct AppState {
    service: Arc<DynPostService>,
}

impl AppState {
    pub fn new(store: Arc<dyn PostStore>, rules: PostRules) -> Self {
        Self {
            service: Arc::new(PostService::with_rules(store, rules)),
        }
    }

    /// State backed by a fresh [`InMemoryPostStore`].
    pub fn in_memory(rules: PostRules) -> Self {
        Self::new(Arc::new(InMemoryPostStore::new()), rules)
    }

    pub fn service(&self) -> &DynPostService {
        &self.service
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::in_memory(PostRules::default())
    }
}
