pub mod content_routes;
pub mod server;
