//! Post database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for posts table
#[derive(Debug, Clone, FromRow)]
pub struct PostModel {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub date_posted: DateTime<Utc>,
    pub author_id: i64,
    pub has_code: bool,
    pub code: String,
}

impl PostModel {
    /// Check whether a code snippet is attached
    #[inline]
    pub fn has_snippet(&self) -> bool {
        !self.code.is_empty()
    }
}
