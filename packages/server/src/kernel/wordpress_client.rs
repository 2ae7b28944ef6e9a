//! WordPress REST API client.
//!
//! Covers the three calls the pipeline needs: listing published posts for
//! internal links, searching tags by name, and creating a page. All calls
//! use basic auth with an application password.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::links::PostLink;

/// WordPress REST API client
pub struct WordPressClient {
    client: reqwest::Client,
    site: String,
    username: String,
    app_password: String,
}

/// Post summary as returned by `GET /wp-json/wp/v2/posts`
#[derive(Debug, Deserialize)]
struct PostSummary {
    title: RenderedTitle,
    link: String,
}

#[derive(Debug, Deserialize)]
struct RenderedTitle {
    rendered: String,
}

/// Tag summary as returned by `GET /wp-json/wp/v2/tags`
#[derive(Debug, Deserialize)]
struct TagSummary {
    id: i64,
}

/// Page create request for `POST /wp-json/wp/v2/pages`
#[derive(Debug, Serialize)]
struct CreatePageRequest<'a> {
    title: &'a str,
    content: &'a str,
    status: &'a str,
    meta: PageMeta<'a>,
    tags: &'a [i64],
}

#[derive(Debug, Serialize)]
struct PageMeta<'a> {
    yoast_wpseo_metadesc: &'a str,
}

impl WordPressClient {
    /// Create a new WordPress client for the given site and credentials.
    pub fn new(
        site: impl Into<String>,
        username: impl Into<String>,
        app_password: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            site: site.into(),
            username: username.into(),
            app_password: app_password.into(),
        }
    }

    /// Fetch titles and links of existing published posts, in API response
    /// order. Capped at a single page of 100 items.
    pub async fn fetch_post_links(&self) -> Result<Vec<PostLink>> {
        let url = format!("{}/wp-json/wp/v2/posts?per_page=100", self.site);

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.username, Some(&self.app_password))
            .send()
            .await
            .context("Failed to send WordPress posts request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("WordPress posts API error {}: {}", status, body);
        }

        let posts: Vec<PostSummary> = response
            .json()
            .await
            .context("Failed to parse WordPress posts response")?;

        Ok(posts
            .into_iter()
            .map(|post| PostLink {
                title: post.title.rendered,
                url: post.link,
            })
            .collect())
    }

    /// Search tags by name and return the first match's ID, if any.
    pub async fn search_tag(&self, term: &str) -> Result<Option<i64>> {
        let url = format!(
            "{}/wp-json/wp/v2/tags?search={}",
            self.site,
            urlencoding::encode(term)
        );

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.username, Some(&self.app_password))
            .send()
            .await
            .context("Failed to send WordPress tag search request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("WordPress tags API error {}: {}", status, body);
        }

        let tags: Vec<TagSummary> = response
            .json()
            .await
            .context("Failed to parse WordPress tags response")?;

        Ok(tags.into_iter().next().map(|tag| tag.id))
    }

    /// Create a published page with an SEO meta description and tag IDs.
    ///
    /// Only HTTP 201 counts as success; any other status is an error with no
    /// further distinction.
    pub async fn create_page(
        &self,
        title: &str,
        content: &str,
        meta_description: &str,
        tag_ids: &[i64],
    ) -> Result<serde_json::Value> {
        let url = format!("{}/wp-json/wp/v2/pages", self.site);

        let request = CreatePageRequest {
            title,
            content,
            status: "publish",
            meta: PageMeta {
                yoast_wpseo_metadesc: meta_description,
            },
            tags: tag_ids,
        };

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.username, Some(&self.app_password))
            .json(&request)
            .send()
            .await
            .context("Failed to send WordPress page create request")?;

        let status = response.status();
        if status != reqwest::StatusCode::CREATED {
            anyhow::bail!("WordPress page create returned {}", status);
        }

        response
            .json()
            .await
            .context("Failed to parse WordPress page create response")
    }
}
