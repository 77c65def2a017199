//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use std::collections::HashMap;

use blog_core::entities::{Post, PostChanges, Profile, User};
use blog_core::value_objects::{Page, UserId};

use super::responses::{
    CurrentUserResponse, PageMeta, PageResponse, PostFormResponse, PostResponse, ProfileResponse,
    UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            date_joined: user.created_at,
        }
    }
}

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            date_joined: user.created_at,
        }
    }
}

impl From<(&User, Profile)> for ProfileResponse {
    fn from((user, profile): (&User, Profile)) -> Self {
        Self {
            user: CurrentUserResponse::from(user),
            image_url: profile.image_url(),
            image: profile.image,
            updated_at: profile.updated_at,
        }
    }
}

// ============================================================================
// Post Mappers
// ============================================================================

/// A post together with its author's username
pub struct PostWithAuthor {
    pub post: Post,
    pub author: String,
}

impl From<PostWithAuthor> for PostResponse {
    fn from(details: PostWithAuthor) -> Self {
        let url = details.post.absolute_url();
        let post = details.post;
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            date_posted: post.date_posted,
            author_id: post.author_id,
            author: details.author,
            has_code: post.has_code,
            code: post.code,
            url,
        }
    }
}

/// Attach usernames to a page of posts
///
/// Posts whose author is missing from `authors` get an empty username.
pub fn page_with_authors(page: Page<Post>, authors: &HashMap<UserId, String>) -> Page<PostResponse> {
    page.map(|post| {
        let author = authors.get(&post.author_id).cloned().unwrap_or_default();
        PostResponse::from(PostWithAuthor { post, author })
    })
}

impl From<&Post> for PostFormResponse {
    fn from(post: &Post) -> Self {
        let changes = PostChanges::from_post(post);
        Self {
            post_id: Some(post.id),
            title: changes.title,
            content: changes.content,
            has_code: changes.has_code,
            code: changes.code,
        }
    }
}

// ============================================================================
// Pagination Mappers
// ============================================================================

impl<T> From<Page<T>> for PageResponse<T> {
    fn from(page: Page<T>) -> Self {
        let pagination = PageMeta {
            number: page.number,
            size: page.size,
            total: page.total,
            num_pages: page.num_pages(),
            has_next: page.has_next(),
            has_previous: page.has_previous(),
            next_page_number: page.has_next().then(|| page.number + 1),
            previous_page_number: page.has_previous().then(|| page.number - 1),
        };

        Self {
            items: page.items,
            pagination,
        }
    }
}
