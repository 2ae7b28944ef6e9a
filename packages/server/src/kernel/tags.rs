//! Tag resolution.
//!
//! The words of the post title are used verbatim as tag search terms; each
//! word resolves to the first matching tag ID or is skipped.

use tracing::warn;

use super::wordpress_client::WordPressClient;

/// Resolve the title's whitespace-split words to tag IDs.
///
/// Words with no matching tag are skipped silently; a failed search request
/// is logged and skipped rather than aborting the pipeline. Duplicates are
/// kept and order follows the title's word order.
pub async fn resolve_tag_ids(client: &WordPressClient, title: &str) -> Vec<i64> {
    let mut tag_ids = Vec::new();

    for word in title.split_whitespace() {
        match client.search_tag(word).await {
            Ok(Some(id)) => tag_ids.push(id),
            Ok(None) => {}
            Err(e) => {
                warn!(term = word, error = %e, "Tag search failed, skipping term");
            }
        }
    }

    tag_ids
}
