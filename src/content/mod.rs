pub mod home;
pub mod model;
pub mod service;

pub use model::PageContent;
pub use service::{ContentService, ContentSource};
