//! Domain types for the blog post repository.
//!
//! Every other crate in the workspace depends on `blog-types`. The types here
//! carry no storage or transport concerns; they only know how to construct a
//! valid [`Post`] and reject an invalid one.
//!
//! # Key Types
//!
//! - [`Post`] — Immutable blog entry with title, content, and creation time
//! - [`PostId`] — Opaque, time-ordered identifier (UUID v7)
//! - [`PostError`] — Entity construction failures

pub mod error;
pub mod post;

pub use error::PostError;
pub use post::{titles_equal, Post, PostId};
