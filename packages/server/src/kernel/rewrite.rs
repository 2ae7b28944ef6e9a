//! Blog formatting via a local LLaMA 3 model.

use ollama_client::{ChatRequest, Message, OllamaClient, Result};

/// Client for the content rewrite step.
///
/// Wraps the raw Ollama client with the fixed formatting instruction prompt
/// used for every post.
pub struct RewriteClient {
    client: OllamaClient,
    model: String,
}

impl RewriteClient {
    pub fn new(client: OllamaClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Rewrite blog text into presentational markup.
    ///
    /// Returns `Ok(None)` when the model response carried no content, which
    /// the endpoint treats as a rewrite failure. The inserted newline after
    /// each closing paragraph tag is cosmetic only.
    pub async fn rewrite(&self, text: &str) -> Result<Option<String>> {
        let request = ChatRequest::new(&self.model).message(Message::user(build_prompt(text)));
        let response = self.client.chat(request).await?;

        Ok(response
            .content
            .map(|content| content.replace("</p>", "</p>\n")))
    }
}

fn build_prompt(text: &str) -> String {
    format!(
        "Format the following blog post:\n\
         - Add appropriate <p> tags.\n\
         - Detect and format list items.\n\
         - Do not create your own title.\n\
         \n\
         Blog Content:\n\
         {}",
        text
    )
}
