//! The single publishing endpoint.
//!
//! Runs the linear pipeline: sanitize, rewrite, optionally normalize, insert
//! internal links, resolve tags, publish. Link and tag lookups are best
//! effort; their failures degrade to empty results and never abort the
//! publish.

use axum::{
    extract::{Extension, Query},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::kernel::{clean_content, insert_internal_links, normalize, resolve_tag_ids};
use crate::server::app::AppState;
use crate::server::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct UploadBlogParams {
    pub title: String,
    pub blog_content: String,
}

/// `POST /upload-blog`
pub async fn upload_blog_handler(
    Extension(state): Extension<AppState>,
    Query(params): Query<UploadBlogParams>,
) -> Result<Json<Value>, ApiError> {
    if params.blog_content.is_empty() {
        return Err(ApiError::NoContent);
    }

    let cleaned_content = clean_content(&params.blog_content);

    let formatted_content = match state.rewrite.rewrite(&cleaned_content).await {
        Ok(Some(content)) => content,
        Ok(None) => return Err(ApiError::RewriteFailed),
        Err(e) => {
            warn!(error = %e, "Rewrite request failed");
            return Err(ApiError::RewriteFailed);
        }
    };

    let formatted_content = if state.normalize_content {
        normalize(&formatted_content)
    } else {
        formatted_content
    };

    let internal_links = match state.wordpress.fetch_post_links().await {
        Ok(links) => links,
        Err(e) => {
            warn!(error = %e, "Fetching internal links failed, publishing without them");
            Vec::new()
        }
    };
    let final_content = insert_internal_links(&formatted_content, &internal_links);

    let tag_ids = resolve_tag_ids(&state.wordpress, &params.title).await;

    let meta_description = format!(
        "Learn more about {} in this detailed blog post.",
        params.title
    );

    let post = state
        .wordpress
        .create_page(&params.title, &final_content, &meta_description, &tag_ids)
        .await
        .map_err(|e| {
            warn!(error = %e, "Publish failed");
            ApiError::PublishFailed
        })?;

    info!(title = %params.title, tags = tag_ids.len(), "Blog post published");

    Ok(Json(json!({
        "message": "Blog post published successfully",
        "post": post,
    })))
}
