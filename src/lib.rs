//! # Content Service Library
//!
//! Provides page content for the days-out homepage, either from built-in
//! static data or from a headless CMS: OAuth2 token caching, authenticated
//! fetching with a single re-authentication retry, content reference
//! resolution, page assembly and in-memory caches.
//!
//! Modules:
//! - `config` — service configuration
//! - `cache` — token and content caches
//! - `cms` — CMS client, reference resolver and page assembler
//! - `content` — page model, static pages, page-level service
//! - `server` — HTTP surface serving assembled pages

pub mod cache;
pub mod cms;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;
pub mod observability;
pub mod server;
pub mod utils;

#[cfg(test)]
mod tests;


pub use crate::config::sources::ServiceConfig;
pub use crate::error::{CmsError, ContentError};
