//! Endpoint integration tests.
//!
//! The WordPress and Ollama backends are replaced with httpmock servers so
//! the full pipeline runs in-process with no external traffic. Requests are
//! driven straight through the router with `tower::ServiceExt::oneshot`.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use httpmock::prelude::*;
use serde_json::{json, Value};
use tower::ServiceExt;

use server_core::{server::build_app, Config};

fn test_config(wordpress: &MockServer, ollama: &MockServer) -> Config {
    Config {
        wp_site: wordpress.base_url(),
        wp_username: "admin".to_string(),
        wp_app_password: "app-password".to_string(),
        ollama_url: ollama.base_url(),
        ollama_model: "llama3".to_string(),
        port: 0,
        normalize_content: false,
    }
}

fn upload_request(title: &str, blog_content: &str) -> Request<Body> {
    let uri = format!(
        "/upload-blog?title={}&blog_content={}",
        urlencoding::encode(title),
        urlencoding::encode(blog_content)
    );
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn mock_chat_success<'a>(ollama: &'a MockServer, content: &str) -> httpmock::Mock<'a> {
    ollama.mock(|when, then| {
        when.method(POST).path("/api/chat");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "model": "llama3",
                "message": { "role": "assistant", "content": content },
                "done": true,
            }));
    })
}

#[tokio::test]
async fn publishes_post_through_full_pipeline() {
    let wordpress = MockServer::start_async().await;
    let ollama = MockServer::start_async().await;

    mock_chat_success(&ollama, "<p>Read the Intro first</p>");

    wordpress.mock(|when, then| {
        when.method(GET)
            .path("/wp-json/wp/v2/posts")
            .query_param("per_page", "100");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([
                { "title": { "rendered": "Intro" }, "link": "https://x/intro" },
            ]));
    });

    let go_tag = wordpress.mock(|when, then| {
        when.method(GET)
            .path("/wp-json/wp/v2/tags")
            .query_param("search", "Go");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([{ "id": 5, "name": "go" }]));
    });
    let rust_tag = wordpress.mock(|when, then| {
        when.method(GET)
            .path("/wp-json/wp/v2/tags")
            .query_param("search", "Rust");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([]));
    });

    // Content carries the inserted anchor; only the resolved tag ID is sent.
    let create_page = wordpress.mock(|when, then| {
        when.method(POST).path("/wp-json/wp/v2/pages").json_body(json!({
            "title": "Go Rust",
            "content": "<p>Read the <a href=\"https://x/intro\">Intro</a> first</p>\n",
            "status": "publish",
            "meta": { "yoast_wpseo_metadesc": "Learn more about Go Rust in this detailed blog post." },
            "tags": [5],
        }));
        then.status(201)
            .header("content-type", "application/json")
            .json_body(json!({ "id": 123, "link": "https://x/go-rust" }));
    });

    let app = build_app(&test_config(&wordpress, &ollama));
    let response = app
        .oneshot(upload_request("Go Rust", "Read the Intro first"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["message"], "Blog post published successfully");
    assert_eq!(body["post"]["id"], 123);

    go_tag.assert_async().await;
    rust_tag.assert_async().await;
    create_page.assert_async().await;
}

#[tokio::test]
async fn empty_content_returns_400_without_external_calls() {
    let wordpress = MockServer::start_async().await;
    let ollama = MockServer::start_async().await;

    let any_wordpress = wordpress.mock(|_when, then| {
        then.status(200);
    });
    let any_ollama = ollama.mock(|_when, then| {
        then.status(200);
    });

    let app = build_app(&test_config(&wordpress, &ollama));
    let response = app.oneshot(upload_request("Go Rust", "")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["detail"], "No content provided");

    assert_eq!(any_wordpress.hits_async().await, 0);
    assert_eq!(any_ollama.hits_async().await, 0);
}

#[tokio::test]
async fn rewrite_without_content_returns_500_and_skips_downstream() {
    let wordpress = MockServer::start_async().await;
    let ollama = MockServer::start_async().await;

    // Response parses but carries no message field.
    ollama.mock(|when, then| {
        when.method(POST).path("/api/chat");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "model": "llama3", "done": true }));
    });
    let any_wordpress = wordpress.mock(|_when, then| {
        then.status(200);
    });

    let app = build_app(&test_config(&wordpress, &ollama));
    let response = app
        .oneshot(upload_request("Go Rust", "some draft"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert_eq!(body["detail"], "LLaMA 3 processing failed");

    assert_eq!(any_wordpress.hits_async().await, 0);
}

#[tokio::test]
async fn rewrite_transport_error_returns_500() {
    let wordpress = MockServer::start_async().await;
    let ollama = MockServer::start_async().await;

    ollama.mock(|when, then| {
        when.method(POST).path("/api/chat");
        then.status(500).body("model crashed");
    });

    let app = build_app(&test_config(&wordpress, &ollama));
    let response = app
        .oneshot(upload_request("Go Rust", "some draft"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert_eq!(body["detail"], "LLaMA 3 processing failed");
}

#[tokio::test]
async fn failed_publish_returns_500() {
    let wordpress = MockServer::start_async().await;
    let ollama = MockServer::start_async().await;

    mock_chat_success(&ollama, "<p>Hello</p>");

    wordpress.mock(|when, then| {
        when.method(GET).path("/wp-json/wp/v2/posts");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([]));
    });
    wordpress.mock(|when, then| {
        when.method(GET).path("/wp-json/wp/v2/tags");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([]));
    });
    wordpress.mock(|when, then| {
        when.method(POST).path("/wp-json/wp/v2/pages");
        then.status(403).body("forbidden");
    });

    let app = build_app(&test_config(&wordpress, &ollama));
    let response = app
        .oneshot(upload_request("Go Rust", "some draft"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert_eq!(body["detail"], "Failed to publish post");
}

#[tokio::test]
async fn link_and_tag_failures_degrade_without_aborting_publish() {
    let wordpress = MockServer::start_async().await;
    let ollama = MockServer::start_async().await;

    mock_chat_success(&ollama, "<p>Hello</p>");

    wordpress.mock(|when, then| {
        when.method(GET).path("/wp-json/wp/v2/posts");
        then.status(500).body("db down");
    });
    wordpress.mock(|when, then| {
        when.method(GET).path("/wp-json/wp/v2/tags");
        then.status(500).body("db down");
    });

    // Content stays unlinked and the tag list stays empty.
    let create_page = wordpress.mock(|when, then| {
        when.method(POST).path("/wp-json/wp/v2/pages").json_body(json!({
            "title": "Go Rust",
            "content": "<p>Hello</p>\n",
            "status": "publish",
            "meta": { "yoast_wpseo_metadesc": "Learn more about Go Rust in this detailed blog post." },
            "tags": [],
        }));
        then.status(201)
            .header("content-type", "application/json")
            .json_body(json!({ "id": 7 }));
    });

    let app = build_app(&test_config(&wordpress, &ollama));
    let response = app
        .oneshot(upload_request("Go Rust", "some draft"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["post"]["id"], 7);

    create_page.assert_async().await;
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let wordpress = MockServer::start_async().await;
    let ollama = MockServer::start_async().await;

    let app = build_app(&test_config(&wordpress, &ollama));
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "ok");
}
