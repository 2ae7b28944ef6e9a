use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// WordPress site base URL, e.g. "https://yourwebsite.com"
    pub wp_site: String,
    pub wp_username: String,
    pub wp_app_password: String,
    pub ollama_url: String,
    pub ollama_model: String,
    pub port: u16,
    /// Re-tokenize the rewritten content before publishing. Off by default
    /// because the pass flattens paragraph breaks into single spaces.
    pub normalize_content: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            wp_site: env::var("WP_SITE").context("WP_SITE must be set")?,
            wp_username: env::var("WP_USERNAME").context("WP_USERNAME must be set")?,
            wp_app_password: env::var("WP_APP_PASSWORD")
                .context("WP_APP_PASSWORD must be set")?,
            ollama_url: env::var("OLLAMA_URL")
                .unwrap_or_else(|_| ollama_client::DEFAULT_BASE_URL.to_string()),
            ollama_model: env::var("OLLAMA_MODEL").unwrap_or_else(|_| "llama3".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            normalize_content: env::var("NORMALIZE_CONTENT")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        })
    }
}
