//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use ollama_client::OllamaClient;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::kernel::{RewriteClient, WordPressClient};
use crate::server::routes::{health_handler, upload_blog_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub wordpress: Arc<WordPressClient>,
    pub rewrite: Arc<RewriteClient>,
    pub normalize_content: bool,
}

/// Build the Axum application router.
///
/// All collaborators are constructed here from the explicit configuration
/// value; nothing reads the environment after this point.
pub fn build_app(config: &Config) -> Router {
    let wordpress = Arc::new(WordPressClient::new(
        &config.wp_site,
        &config.wp_username,
        &config.wp_app_password,
    ));

    let ollama = OllamaClient::new().with_base_url(&config.ollama_url);
    let rewrite = Arc::new(RewriteClient::new(ollama, &config.ollama_model));

    let app_state = AppState {
        wordpress,
        rewrite,
        normalize_content: config.normalize_content,
    };

    Router::new()
        .route("/upload-blog", post(upload_blog_handler))
        .route("/health", get(health_handler))
        .layer(Extension(app_state))
        .layer(TraceLayer::new_for_http())
}
