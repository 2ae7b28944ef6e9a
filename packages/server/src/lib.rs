// Blog publishing service
//
// Takes raw blog text, rewrites it with a local LLaMA 3 model, enriches it
// with internal links and tags from the WordPress site, and publishes it as
// a page through the WordPress REST API.

pub mod config;
pub mod kernel;
pub mod server;

pub use config::*;
