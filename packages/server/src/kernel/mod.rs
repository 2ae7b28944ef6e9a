// Pipeline stages and external API clients

pub mod links;
pub mod normalizer;
pub mod rewrite;
pub mod sanitizer;
pub mod tags;
pub mod wordpress_client;

pub use links::{insert_internal_links, PostLink};
pub use normalizer::normalize;
pub use rewrite::RewriteClient;
pub use sanitizer::clean_content;
pub use tags::resolve_tag_ids;
pub use wordpress_client::WordPressClient;
