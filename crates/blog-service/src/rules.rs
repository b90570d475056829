use serde::{Deserialize, Serialize};

/// Minimum post content length, in bytes.
pub const DEFAULT_MIN_CONTENT_LEN: usize = 5;

/// Tunable business rules applied by [`PostService`](crate::PostService).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostRules {
    /// Content shorter than this many bytes is rejected.
    pub min_content_len: usize,
}

impl Default for PostRules {
    fn default() -> Self {
        Self {
            min_content_len: DEFAULT_MIN_CONTENT_LEN,
        }
    }
}
