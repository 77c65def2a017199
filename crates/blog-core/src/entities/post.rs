//! Post entity - an authored blog entry

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::{PostId, UserId};

/// Maximum title length in characters
pub const TITLE_MAX_LEN: usize = 100;

/// Post entity
///
/// `has_code` and `code` are independent fields: a post may carry code text
/// while `has_code` is false, or the reverse. Neither is derived from the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub date_posted: DateTime<Utc>,
    pub author_id: UserId,
    pub has_code: bool,
    pub code: String,
}

impl Post {
    /// Check if the actor wrote this post
    #[inline]
    pub fn is_authored_by(&self, actor: UserId) -> bool {
        self.author_id == actor
    }

    /// Require that the actor wrote this post
    ///
    /// # Errors
    /// Returns `DomainError::NotPostAuthor` for anyone else
    pub fn ensure_authored_by(&self, actor: UserId) -> Result<(), DomainError> {
        if self.is_authored_by(actor) {
            Ok(())
        } else {
            Err(DomainError::NotPostAuthor)
        }
    }

    /// Apply edited fields and re-stamp the author
    ///
    /// `date_posted` is left untouched.
    pub fn apply(&mut self, changes: PostChanges, actor: UserId) {
        self.title = changes.title;
        self.content = changes.content;
        self.has_code = changes.has_code;
        self.code = changes.code;
        self.author_id = actor;
    }

    /// True when `code` and `has_code` disagree
    pub fn has_code_mismatch(&self) -> bool {
        self.has_code == self.code.is_empty()
    }

    /// Path of the detail page
    pub fn absolute_url(&self) -> String {
        format!("/post/{}", self.id)
    }
}

/// Values for inserting a post; the store assigns the id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub date_posted: DateTime<Utc>,
    pub author_id: UserId,
    pub has_code: bool,
    pub code: String,
}

impl NewPost {
    /// Create a text-only post stamped with the current time
    pub fn new(author_id: UserId, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            date_posted: Utc::now(),
            author_id,
            has_code: false,
            code: String::new(),
        }
    }

    /// Build a post from submitted fields
    pub fn from_changes(author_id: UserId, changes: PostChanges) -> Self {
        Self {
            title: changes.title,
            content: changes.content,
            date_posted: Utc::now(),
            author_id,
            has_code: changes.has_code,
            code: changes.code,
        }
    }

    /// Attach a code snippet
    pub fn with_code(mut self, has_code: bool, code: impl Into<String>) -> Self {
        self.has_code = has_code;
        self.code = code.into();
        self
    }

    /// Override the timestamp
    pub fn posted_at(mut self, date_posted: DateTime<Utc>) -> Self {
        self.date_posted = date_posted;
        self
    }

    /// Materialize with the id assigned by the store
    pub fn into_post(self, id: PostId) -> Post {
        Post {
            id,
            title: self.title,
            content: self.content,
            date_posted: self.date_posted,
            author_id: self.author_id,
            has_code: self.has_code,
            code: self.code,
        }
    }
}

/// Editable fields of a post, already validated
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostChanges {
    pub title: String,
    pub content: String,
    pub has_code: bool,
    pub code: String,
}

impl PostChanges {
    /// Current values of a post, used to pre-fill the edit form
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
            has_code: post.has_code,
            code: post.code.clone(),
        }
    }
}
