//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{NewPost, NewUser, Post, Profile, User};
use crate::error::DomainError;
use crate::value_objects::{PageRequest, PostId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Find user by exact username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Find several users at once; unknown ids are skipped
    async fn find_by_ids(&self, ids: &[UserId]) -> RepoResult<Vec<User>>;

    /// Check if a username is taken
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Check if an email is taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Insert a user and return it with its assigned id
    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User>;

    /// Update username and email
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Delete a user; their profile and posts go with them
    async fn delete(&self, id: UserId) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>>;
}

// ============================================================================
// Profile Repository
// ============================================================================

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find the profile of a user
    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Option<Profile>>;

    /// Insert the empty profile of a freshly created user
    ///
    /// Fails with `DomainError::ProfileAlreadyExists` if one is present.
    async fn create(&self, user_id: UserId) -> RepoResult<Profile>;

    /// Write the profile back, inserting it if it is missing
    async fn save(&self, user_id: UserId, image: &str) -> RepoResult<Profile>;
}

// ============================================================================
// Post Repository
// ============================================================================

/// Which posts a listing covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostScope {
    All,
    Author(UserId),
}

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find post by ID
    async fn find_by_id(&self, id: PostId) -> RepoResult<Option<Post>>;

    /// Count posts in scope
    async fn count(&self, scope: PostScope) -> RepoResult<u64>;

    /// One page of posts in scope, newest first (ties broken by id, descending)
    async fn list(&self, scope: PostScope, page: PageRequest) -> RepoResult<Vec<Post>>;

    /// Insert a post and return it with its assigned id
    async fn create(&self, post: &NewPost) -> RepoResult<Post>;

    /// Overwrite the editable fields and author of a post
    async fn update(&self, post: &Post) -> RepoResult<()>;

    /// Delete a post
    async fn delete(&self, id: PostId) -> RepoResult<()>;
}

// ============================================================================
// Health
// ============================================================================

#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Round-trip to the backing store
    async fn ping(&self) -> RepoResult<()>;
}
