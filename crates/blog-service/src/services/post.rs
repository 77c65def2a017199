//! Post service
//!
//! Listing, detail and the author-only write operations. Write operations run
//! in a fixed order: load the post, check authorship, validate the form, save.

use std::collections::HashMap;

use blog_core::entities::{NewPost, Post};
use blog_core::error::DomainError;
use blog_core::traits::PostScope;
use blog_core::value_objects::{
    Page, PageNumber, PageRequest, PostId, UserId, POSTS_PER_PAGE,
};
use tracing::{debug, info, instrument};
use validator::Validate;

use crate::dto::{
    page_with_authors, ConfirmDeleteResponse, PageResponse, PostForm, PostFormResponse,
    PostResponse, PostWithAuthor, UserPostsResponse, UserResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// All posts, newest first
    #[instrument(skip(self))]
    pub async fn list(&self, page: PageNumber) -> ServiceResult<PageResponse<PostResponse>> {
        let page = self.load_page(PostScope::All, page).await?;

        let mut author_ids: Vec<UserId> = page.items.iter().map(|p| p.author_id).collect();
        author_ids.sort_unstable();
        author_ids.dedup();

        let authors: HashMap<UserId, String> = self
            .ctx
            .user_repo()
            .find_by_ids(&author_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u.username))
            .collect();

        Ok(page_with_authors(page, &authors).into())
    }

    /// Posts of one author, newest first
    #[instrument(skip(self))]
    pub async fn list_by_author(
        &self,
        username: &str,
        page: PageNumber,
    ) -> ServiceResult<UserPostsResponse> {
        let author = self
            .ctx
            .user_repo()
            .find_by_username(username)
            .await?
            .ok_or_else(|| DomainError::UsernameNotFound(username.to_string()))?;

        let page = self.load_page(PostScope::Author(author.id), page).await?;
        let authors = HashMap::from([(author.id, author.username.clone())]);

        Ok(UserPostsResponse {
            author: UserResponse::from(&author),
            posts: page_with_authors(page, &authors).into(),
        })
    }

    /// A single post; visible to everyone
    #[instrument(skip(self))]
    pub async fn detail(&self, id: PostId) -> ServiceResult<PostResponse> {
        let post = self.load(id).await?;
        self.with_author(post).await
    }

    // =========================================================================
    // Forms
    // =========================================================================

    /// Empty form for a new post
    pub fn new_form(&self) -> PostFormResponse {
        PostFormResponse::default()
    }

    /// Pre-filled form for the author of a post
    #[instrument(skip(self))]
    pub async fn edit_form(&self, actor: UserId, id: PostId) -> ServiceResult<PostFormResponse> {
        let post = self.load_authored(actor, id).await?;
        Ok(PostFormResponse::from(&post))
    }

    /// Delete confirmation for the author of a post
    #[instrument(skip(self))]
    pub async fn confirm_delete(
        &self,
        actor: UserId,
        id: PostId,
    ) -> ServiceResult<ConfirmDeleteResponse> {
        let post = self.load_authored(actor, id).await?;
        Ok(ConfirmDeleteResponse {
            post: self.with_author(post).await?,
        })
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Publish a post written by the actor
    #[instrument(skip(self, form))]
    pub async fn create(&self, actor: UserId, form: PostForm) -> ServiceResult<PostResponse> {
        form.validate()?;

        let new_post = NewPost::from_changes(actor, form.into_changes());
        let post = self.ctx.post_repo().create(&new_post).await?;

        if post.has_code_mismatch() {
            debug!(post_id = %post.id, has_code = post.has_code, "has_code disagrees with code");
        }
        info!(post_id = %post.id, author_id = %actor, "Post created");

        self.with_author(post).await
    }

    /// Edit a post; only its author may do so
    pub async fn update(
        &self,
        actor: UserId,
        id: PostId,
        form: PostForm,
    ) -> ServiceResult<PostResponse> {
        self.update_submitted(actor, id, Ok(form)).await
    }

    /// Edit a post from a submission that may not have parsed
    ///
    /// A parse failure is only reported once the actor is known to be the
    /// author, so a non-author always gets forbidden.
    #[instrument(skip(self, submitted))]
    pub async fn update_submitted<E>(
        &self,
        actor: UserId,
        id: PostId,
        submitted: Result<PostForm, E>,
    ) -> Result<PostResponse, E>
    where
        E: From<ServiceError>,
    {
        let post = self.load_authored(actor, id).await?;
        let form = submitted?;
        Ok(self.apply_form(actor, post, form).await?)
    }

    async fn apply_form(
        &self,
        actor: UserId,
        mut post: Post,
        form: PostForm,
    ) -> ServiceResult<PostResponse> {
        form.validate()?;

        post.apply(form.into_changes(), actor);
        self.ctx.post_repo().update(&post).await?;

        if post.has_code_mismatch() {
            debug!(post_id = %post.id, has_code = post.has_code, "has_code disagrees with code");
        }
        info!(post_id = %post.id, "Post updated");

        self.with_author(post).await
    }

    /// Delete a post; only its author may do so
    #[instrument(skip(self))]
    pub async fn delete(&self, actor: UserId, id: PostId) -> ServiceResult<()> {
        let post = self.load_authored(actor, id).await?;
        self.ctx.post_repo().delete(post.id).await?;

        info!(post_id = %id, "Post deleted");
        Ok(())
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    async fn load(&self, id: PostId) -> ServiceResult<Post> {
        let post = self
            .ctx
            .post_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::PostNotFound(id))?;
        Ok(post)
    }

    /// Load a post (404) and require the actor to be its author (403)
    async fn load_authored(&self, actor: UserId, id: PostId) -> ServiceResult<Post> {
        let post = self.load(id).await?;
        post.ensure_authored_by(actor)?;
        Ok(post)
    }

    async fn load_page(&self, scope: PostScope, page: PageNumber) -> ServiceResult<Page<Post>> {
        let total = self.ctx.post_repo().count(scope).await?;
        let request = PageRequest::resolve(page, total, POSTS_PER_PAGE)?;
        let posts = self.ctx.post_repo().list(scope, request).await?;
        Ok(Page::new(posts, request, total))
    }

    async fn with_author(&self, post: Post) -> ServiceResult<PostResponse> {
        let author = self
            .ctx
            .user_repo()
            .find_by_id(post.author_id)
            .await?
            .ok_or(DomainError::UserNotFound(post.author_id))?;

        Ok(PostResponse::from(PostWithAuthor {
            post,
            author: author.username,
        }))
    }
}
