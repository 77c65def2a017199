//! Integration test utilities for the blog server
//!
//! Runs the service layer and the HTTP app against an in-memory store, so
//! these tests need no external services.

pub mod fixtures;
pub mod helpers;
pub mod memory;

pub use fixtures::*;
pub use helpers::*;
pub use memory::MemoryStore;
