//! Repository traits

mod repositories;

pub use repositories::{
    HealthCheck, PostRepository, PostScope, ProfileRepository, RepoResult, UserRepository,
};
