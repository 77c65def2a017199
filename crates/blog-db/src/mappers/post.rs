//! Post entity <-> model mapper

use chrono::{DateTime, Utc};

use blog_core::entities::{NewPost, Post};
use blog_core::value_objects::{PostId, UserId};

use crate::models::PostModel;

/// Convert PostModel to Post entity
impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: PostId::new(model.id),
            title: model.title,
            content: model.content,
            date_posted: model.date_posted,
            author_id: UserId::new(model.author_id),
            has_code: model.has_code,
            code: model.code,
        }
    }
}

/// Values for inserting a post
pub struct PostInsert<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub date_posted: DateTime<Utc>,
    pub author_id: i64,
    pub has_code: bool,
    pub code: &'a str,
}

impl<'a> PostInsert<'a> {
    pub fn new(post: &'a NewPost) -> Self {
        Self {
            title: &post.title,
            content: &post.content,
            date_posted: post.date_posted,
            author_id: post.author_id.into_inner(),
            has_code: post.has_code,
            code: &post.code,
        }
    }
}

/// Values written by a post update; `date_posted` is never touched
pub struct PostUpdate<'a> {
    pub id: i64,
    pub title: &'a str,
    pub content: &'a str,
    pub author_id: i64,
    pub has_code: bool,
    pub code: &'a str,
}

impl<'a> PostUpdate<'a> {
    pub fn new(post: &'a Post) -> Self {
        Self {
            id: post.id.into_inner(),
            title: &post.title,
            content: &post.content,
            author_id: post.author_id.into_inner(),
            has_code: post.has_code,
            code: &post.code,
        }
    }
}
