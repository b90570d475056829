//! Post storage for the blog post repository.
//!
//! A store is the authoritative keyed collection of [`Post`]s. It knows
//! nothing about business rules beyond the entity contract: it will refuse a
//! post that fails [`Post::validate`], and it can perform an atomic
//! title-checked insert, but deciding *when* a title is a duplicate belongs
//! to the service layer.
//!
//! # Storage Backends
//!
//! All backends implement the [`PostStore`] trait:
//!
//! - [`InMemoryPostStore`] -- `HashMap`-based store behind a single `RwLock`
//!
//! # Design Rules
//!
//! 1. Mutations (`create`, `create_if_title_absent`, `delete_all`) hold the
//!    exclusive lock for their whole duration.
//! 2. Reads (`get_by_id`, `get_all`) take the shared lock.
//! 3. An empty collection is reported by `get_all` as [`StoreError::Empty`].
//! 4. Lock poisoning is surfaced as an error, never a panic.
//!
//! [`Post`]: blog_types::Post
//! [`Post::validate`]: blog_types::Post::validate

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryPostStore;
pub use traits::PostStore;
