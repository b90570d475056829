//! HTTP server for the blog post repository.
//!
//! Translates JSON requests into [`PostService`](blog_service::PostService)
//! calls and maps the typed results back to status codes. All business rules
//! live below this crate.
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | `POST` | `/posts` | 201 |
//! | `GET` | `/post/:id` | 200 |
//! | `GET` | `/posts` | 200 |
//! | `DELETE` | `/posts` | 204 |

pub mod config;
pub mod error;
pub mod handler;
pub mod middleware;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ServerError, ServerResult};
pub use handler::{CreatePostRequest, PostResponse};
pub use router::build_router;
pub use server::BlogServer;
pub use state::{AppState, DynPostService};
