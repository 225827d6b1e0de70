pub mod content_cache;
pub mod token;
pub mod token_cache;
