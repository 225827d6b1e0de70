//! Headless CMS access: token exchange, authenticated fetches, reference
//! resolution and page assembly.

pub mod assembler;
pub mod client;
pub mod resolver;
pub mod token_manager;
pub mod types;

pub use client::CmsClient;
pub use token_manager::TokenManager;
