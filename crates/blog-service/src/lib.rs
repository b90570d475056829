//! Business-rule layer for the blog post repository.
//!
//! [`PostService`] is the only write path callers should use. It trims
//! titles, enforces the minimum content length and the duplicate-title rule,
//! then hands the constructed [`Post`](blog_types::Post) to a
//! [`PostStore`](blog_store::PostStore). Reads pass straight through so that
//! later rules (access control, say) have a place to live.

pub mod error;
pub mod rules;
pub mod service;

pub use error::{ServiceError, ServiceResult};
pub use rules::{PostRules, DEFAULT_MIN_CONTENT_LEN};
pub use service::PostService;
