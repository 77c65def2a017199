//! Route handlers
//!
//! All HTTP request handlers organized by page.

pub mod auth;
pub mod health;
pub mod pages;
pub mod posts;
pub mod profile;
pub mod users;
