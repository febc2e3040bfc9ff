use std::sync::Arc;

use axum::body::Body;
use axum::http::{ Request, StatusCode };
use serde_json::{ json, Value };
use tower::ServiceExt;

use mood_palette_agent::agent::PaletteAgent;
use mood_palette_agent::server::api::build_router;

fn app() -> axum::Router {
    build_router(Arc::new(PaletteAgent::with_client(None)))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_suggestions_endpoint_always_succeeds() {
    let response = app()
        .oneshot(post_json("/ai/suggestions", json!({ "mood": "calm" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["fallback"], true);
    assert_eq!(body["suggestions"].as_array().unwrap().len(), 5);
    assert!(body["confidence"].as_f64().unwrap() > 0.0);
    assert!(!body["explanation"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_suggestions_endpoint_accepts_optional_fields() {
    let payload = json!({
        "mood": "energetic",
        "currentColors": ["#FFD60A"],
        "userInput": "landing page hero",
        "style": "vibrant"
    });
    let response = app().oneshot(post_json("/ai/suggestions", payload)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["explanation"].as_str().unwrap().contains("landing page hero"));
}

#[tokio::test]
async fn test_animation_endpoint_rejects_blank_description() {
    let response = app()
        .oneshot(post_json("/ai/animation", json!({ "description": "   " })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "description is required");
}

#[tokio::test]
async fn test_animation_endpoint_returns_css() {
    let response = app()
        .oneshot(post_json("/ai/animation", json!({ "description": "bouncing ball" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let css = body["css"].as_str().unwrap();
    assert!(css.contains('{') && css.contains('}'));
    assert!(css.contains("translateY"));
    assert_eq!(body["fallback"], true);
}
