//! Cachehub - A multi-tenant in-memory cache service
//!
//! Clients create independently configured cache instances over HTTP,
//! each with its own capacity and entry TTL, then store, fetch, and
//! remove entries within an instance.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod registry;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use registry::CacheRegistry;
pub use tasks::spawn_cleanup_task;
