//! End-to-end tests through the HTTP router

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use std::sync::Arc;
use tower::util::ServiceExt;

use super::fixtures::*;
use crate::http::create_router;

fn subtitles_uri(video_url: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(video_url.as_bytes()).collect();
    format!("/api/subtitles?url={}", encoded)
}

async fn send(lister: StaticLister, fetcher: Arc<StaticFetcher>, request: Request<Body>) -> Response {
    let app = create_router(test_state(lister, fetcher));
    app.oneshot(request).await.unwrap()
}

async fn get(lister: StaticLister, fetcher: Arc<StaticFetcher>, uri: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .header(header::ORIGIN, "http://localhost:5173")
        .body(Body::empty())
        .unwrap();
    send(lister, fetcher, request).await
}

async fn json_body(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_subtitles_success() {
    let lister = StaticLister(Listing::Tracks(vec![
        caption_track("English", "en", false),
        caption_track("Broken", "xx", false),
        caption_track("German (auto-generated)", "de", true),
    ]));
    let fetcher = Arc::new(
        StaticFetcher::default()
            .with(&locator("en"), ENGLISH_TRANSCRIPT)
            .with(&locator("xx"), BROKEN_TRANSCRIPT)
            .with(&locator("de"), GERMAN_TRANSCRIPT),
    );

    let response = get(lister, fetcher.clone(), &subtitles_uri(VIDEO_URL)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
    assert_eq!(fetcher.calls(), 3);

    let body = json_body(response).await;
    assert_eq!(
        body,
        serde_json::json!({
            "originals": [{
                "lang": "English",
                "formats": {
                    "srt": "1\n00:00:00,000 --> 00:00:02,000\nA\n\n2\n00:00:02,000 --> 00:00:04,000\nB",
                    "txt": "A B"
                }
            }],
            "translations": [{
                "lang": "German (auto-generated)",
                "formats": {
                    "srt": "1\n00:00:01,250 --> 00:00:02,750\nHallo Welt zusammen",
                    "txt": "Hallo Welt zusammen"
                }
            }]
        })
    );
}

#[tokio::test]
async fn test_missing_url_is_bad_request() {
    let fetcher = Arc::new(StaticFetcher::default());
    let response = get(StaticLister(Listing::Tracks(Vec::new())), fetcher, "/api/subtitles").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await,
        serde_json::json!({ "error": "Invalid YouTube video URL provided." })
    );
}

#[tokio::test]
async fn test_invalid_url_is_bad_request() {
    let fetcher = Arc::new(StaticFetcher::default());
    let lister = StaticLister(Listing::Tracks(vec![caption_track("English", "en", false)]));

    let response = get(lister, fetcher.clone(), &subtitles_uri("https://vimeo.com/1234")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(fetcher.calls(), 0);
}

#[tokio::test]
async fn test_no_tracks_is_not_found() {
    let fetcher = Arc::new(StaticFetcher::default());
    let response = get(
        StaticLister(Listing::Tracks(Vec::new())),
        fetcher.clone(),
        &subtitles_uri(VIDEO_URL),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(fetcher.calls(), 0);
    assert_eq!(
        json_body(response).await,
        serde_json::json!({ "error": "No subtitles found for this video." })
    );
}

#[tokio::test]
async fn test_unknown_video_is_not_found() {
    let fetcher = Arc::new(StaticFetcher::default());
    let response = get(
        StaticLister(Listing::VideoNotFound),
        fetcher,
        &subtitles_uri("https://youtu.be/dQw4w9WgXcQ"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_all_tracks_broken_is_not_found() {
    let lister = StaticLister(Listing::Tracks(vec![
        caption_track("Broken", "xx", false),
        caption_track("Missing", "zz", true),
    ]));
    let fetcher = Arc::new(StaticFetcher::default().with(&locator("xx"), BROKEN_TRANSCRIPT));

    let response = get(lister, fetcher.clone(), &subtitles_uri(VIDEO_URL)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(fetcher.calls(), 2);
}

#[tokio::test]
async fn test_upstream_failure_is_internal_error() {
    let fetcher = Arc::new(StaticFetcher::default());
    let response = get(
        StaticLister(Listing::Unavailable),
        fetcher,
        &subtitles_uri(VIDEO_URL),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert_eq!(body["error"], "An internal server error occurred.");
    assert!(!body.to_string().contains("connection reset"));
}

#[tokio::test]
async fn test_plain_options_request() {
    let fetcher = Arc::new(StaticFetcher::default());
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/subtitles")
        .body(Body::empty())
        .unwrap();

    let response = send(StaticLister(Listing::Tracks(Vec::new())), fetcher.clone(), request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(bytes.is_empty());
    assert_eq!(fetcher.calls(), 0);
}

#[tokio::test]
async fn test_health() {
    let fetcher = Arc::new(StaticFetcher::default());
    let response = get(StaticLister(Listing::Tracks(Vec::new())), fetcher, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"OK");
}
