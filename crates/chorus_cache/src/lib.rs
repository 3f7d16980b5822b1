//! Identity caching for materialized entities.
//!
//! This crate provides the weak index that keeps exactly one wrapper alive per
//! backing record, so wrappers can be compared by reference.

#![warn(missing_docs)]

mod cache;

pub use cache::{CacheConfig, CacheConfigBuilder, CacheStats, IdentityCache};
