//! In-memory implementation of every repository trait
//!
//! Mirrors the PostgreSQL schema rules that the services rely on: unique
//! usernames and emails, one profile per user, newest-first listings and
//! cascading user deletes.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use blog_core::entities::DEFAULT_PROFILE_IMAGE;
use blog_core::{
    DomainError, HealthCheck, NewPost, NewUser, PageRequest, Post, PostId, PostRepository,
    PostScope, Profile, ProfileId, ProfileRepository, RepoResult, User, UserId, UserRepository,
};
use chrono::Utc;
use parking_lot::RwLock;

#[derive(Default)]
struct Tables {
    users: BTreeMap<UserId, (User, String)>,
    profiles: BTreeMap<UserId, Profile>,
    posts: BTreeMap<PostId, Post>,
    next_user: i64,
    next_profile: i64,
    next_post: i64,
}

impl Tables {
    fn scoped(&self, scope: PostScope) -> impl Iterator<Item = &Post> {
        self.posts.values().filter(move |post| match scope {
            PostScope::All => true,
            PostScope::Author(author) => post.author_id == author,
        })
    }
}

/// Shared in-memory store; clones see the same data
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
    fail_profile_creation: Arc<AtomicBool>,
    unavailable: Arc<AtomicBool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following profile insert fail
    pub fn fail_profile_creation(&self, fail: bool) {
        self.fail_profile_creation.store(fail, Ordering::SeqCst);
    }

    /// Make the readiness probe fail
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn user_count(&self) -> usize {
        self.tables.read().users.len()
    }

    pub fn profile_count(&self) -> usize {
        self.tables.read().profiles.len()
    }

    pub fn post(&self, id: PostId) -> Option<Post> {
        self.tables.read().posts.get(&id).cloned()
    }

    /// Insert a post with an explicit id and timestamp, bypassing the services
    pub fn insert_post(&self, post: Post) {
        let mut tables = self.tables.write();
        tables.next_post = tables.next_post.max(post.id.into_inner());
        tables.posts.insert(post.id, post);
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        Ok(self.tables.read().users.get(&id).map(|(user, _)| user.clone()))
    }

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        Ok(self
            .tables
            .read()
            .users
            .values()
            .find(|(user, _)| user.username == username)
            .map(|(user, _)| user.clone()))
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> RepoResult<Vec<User>> {
        let tables = self.tables.read();
        Ok(ids
            .iter()
            .filter_map(|id| tables.users.get(id).map(|(user, _)| user.clone()))
            .collect())
    }

    async fn username_exists(&self, username: &str) -> RepoResult<bool> {
        Ok(self
            .tables
            .read()
            .users
            .values()
            .any(|(user, _)| user.username == username))
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        Ok(self
            .tables
            .read()
            .users
            .values()
            .any(|(user, _)| user.email == email))
    }

    async fn create(&self, new_user: &NewUser, password_hash: &str) -> RepoResult<User> {
        let mut tables = self.tables.write();

        if tables.users.values().any(|(u, _)| u.username == new_user.username) {
            return Err(DomainError::UsernameAlreadyExists);
        }
        if tables.users.values().any(|(u, _)| u.email == new_user.email) {
            return Err(DomainError::EmailAlreadyExists);
        }

        tables.next_user += 1;
        let now = Utc::now();
        let user = User {
            id: UserId::new(tables.next_user),
            username: new_user.username.clone(),
            email: new_user.email.clone(),
            created_at: now,
            updated_at: now,
        };
        tables
            .users
            .insert(user.id, (user.clone(), password_hash.to_string()));
        Ok(user)
    }

    async fn update(&self, user: &User) -> RepoResult<()> {
        let mut tables = self.tables.write();

        let taken = tables.users.values().any(|(other, _)| {
            other.id != user.id && (other.username == user.username || other.email == user.email)
        });
        if taken {
            return Err(DomainError::UsernameAlreadyExists);
        }

        match tables.users.get_mut(&user.id) {
            Some((stored, _)) => {
                *stored = user.clone();
                Ok(())
            }
            None => Err(DomainError::UserNotFound(user.id)),
        }
    }

    async fn delete(&self, id: UserId) -> RepoResult<()> {
        let mut tables = self.tables.write();
        if tables.users.remove(&id).is_none() {
            return Err(DomainError::UserNotFound(id));
        }
        tables.profiles.remove(&id);
        tables.posts.retain(|_, post| post.author_id != id);
        Ok(())
    }

    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>> {
        Ok(self.tables.read().users.get(&id).map(|(_, hash)| hash.clone()))
    }
}

#[async_trait]
impl ProfileRepository for MemoryStore {
    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Option<Profile>> {
        Ok(self.tables.read().profiles.get(&user_id).cloned())
    }

    async fn create(&self, user_id: UserId) -> RepoResult<Profile> {
        if self.fail_profile_creation.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("profile insert failed".to_string()));
        }

        let mut tables = self.tables.write();
        if tables.profiles.contains_key(&user_id) {
            return Err(DomainError::ProfileAlreadyExists(user_id));
        }
        if !tables.users.contains_key(&user_id) {
            return Err(DomainError::UserNotFound(user_id));
        }

        tables.next_profile += 1;
        let now = Utc::now();
        let profile = Profile {
            id: ProfileId::new(tables.next_profile),
            user_id,
            image: DEFAULT_PROFILE_IMAGE.to_string(),
            created_at: now,
            updated_at: now,
        };
        tables.profiles.insert(user_id, profile.clone());
        Ok(profile)
    }

    async fn save(&self, user_id: UserId, image: &str) -> RepoResult<Profile> {
        let mut tables = self.tables.write();
        if let Some(profile) = tables.profiles.get_mut(&user_id) {
            profile.set_image(image.to_string());
            return Ok(profile.clone());
        }

        tables.next_profile += 1;
        let now = Utc::now();
        let profile = Profile {
            id: ProfileId::new(tables.next_profile),
            user_id,
            image: image.to_string(),
            created_at: now,
            updated_at: now,
        };
        tables.profiles.insert(user_id, profile.clone());
        Ok(profile)
    }
}

#[async_trait]
impl PostRepository for MemoryStore {
    async fn find_by_id(&self, id: PostId) -> RepoResult<Option<Post>> {
        Ok(self.tables.read().posts.get(&id).cloned())
    }

    async fn count(&self, scope: PostScope) -> RepoResult<u64> {
        Ok(self.tables.read().scoped(scope).count() as u64)
    }

    async fn list(&self, scope: PostScope, page: PageRequest) -> RepoResult<Vec<Post>> {
        let tables = self.tables.read();
        let mut posts: Vec<Post> = tables.scoped(scope).cloned().collect();
        posts.sort_by(|a, b| {
            b.date_posted
                .cmp(&a.date_posted)
                .then_with(|| b.id.cmp(&a.id))
        });

        Ok(posts
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect())
    }

    async fn create(&self, new_post: &NewPost) -> RepoResult<Post> {
        let mut tables = self.tables.write();
        if !tables.users.contains_key(&new_post.author_id) {
            return Err(DomainError::UserNotFound(new_post.author_id));
        }

        tables.next_post += 1;
        let post = new_post.clone().into_post(PostId::new(tables.next_post));
        tables.posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn update(&self, post: &Post) -> RepoResult<()> {
        let mut tables = self.tables.write();
        match tables.posts.get_mut(&post.id) {
            Some(stored) => {
                // date_posted is fixed at creation
                let date_posted = stored.date_posted;
                *stored = post.clone();
                stored.date_posted = date_posted;
                Ok(())
            }
            None => Err(DomainError::PostNotFound(post.id)),
        }
    }

    async fn delete(&self, id: PostId) -> RepoResult<()> {
        match self.tables.write().posts.remove(&id) {
            Some(_) => Ok(()),
            None => Err(DomainError::PostNotFound(id)),
        }
    }
}

#[async_trait]
impl HealthCheck for MemoryStore {
    async fn ping(&self) -> RepoResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(DomainError::DatabaseError("store unavailable".to_string()))
        } else {
            Ok(())
        }
    }
}
