use httpmock::prelude::*;
use std::sync::Arc;
use std::time::Duration;

use mood_palette_agent::agent::PaletteAgent;
use mood_palette_agent::animation::ANIMATION_SELECTOR;
use mood_palette_agent::llm::gemini::GeminiClient;
use mood_palette_agent::models::ai::AnimationRequest;

const MODEL: &str = "gemini-1.5-flash";
const API_KEY: &str = "test-key-with-plausible-length";

fn agent_for(server: &MockServer) -> PaletteAgent {
    let client = GeminiClient::new(
        API_KEY.to_string(),
        MODEL.to_string(),
        server.base_url(),
        Duration::from_secs(2),
    )
    .expect("client should build");
    PaletteAgent::with_client(Some(Arc::new(client)))
}

fn completion_body(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [
            { "content": { "parts": [ { "text": text } ] } }
        ]
    })
}

fn request(description: &str, colors: &[&str]) -> AnimationRequest {
    AnimationRequest {
        description: description.to_string(),
        colors: colors.iter().map(|c| c.to_string()).collect(),
    }
}

#[tokio::test]
async fn test_fenced_completion_is_cleaned() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST)
            .path(format!("/v1beta/models/{}:generateContent", MODEL));
        then.status(200).json_body(completion_body(
            "Here's a shimmering gradient:\n```css\n.ai-generated-animation { animation: glow 3s infinite; }\n@keyframes glow { 0% { opacity: 0.5; } 100% { opacity: 1; } }\n```",
        ));
    });

    let agent = agent_for(&server);
    let resp = agent.animate(&request("shimmering glow", &[])).await;

    assert!(!resp.fallback);
    assert!(resp.css.starts_with(ANIMATION_SELECTOR));
    assert!(!resp.css.contains("```"));
    assert!(resp.explanation.contains("shimmering glow"));
}

#[tokio::test]
async fn test_braceless_completion_falls_back_to_keyword_css() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST);
        then.status(200).json_body(completion_body(
            "I cannot generate CSS for this request.",
        ));
    });

    let agent = agent_for(&server);
    let resp = agent.animate(&request("make it spin", &[])).await;

    assert!(resp.fallback);
    assert!(resp.css.contains("@keyframes"));
    assert!(resp.css.contains("rotate("));
    assert!(resp.explanation.contains("AI temporarily unavailable"));
}

#[tokio::test]
async fn test_service_failure_falls_back() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST);
        then.status(503).body("overloaded");
    });

    let agent = agent_for(&server);
    let resp = agent.animate(&request("soft pulse", &["#FFB6C1"])).await;

    assert!(resp.fallback);
    assert!(resp.css.contains("pulseBeat"));
    assert!(resp.css.contains("#FFB6C1"));
}

#[tokio::test]
async fn test_unconfigured_agent_generates_wave_css_with_supplied_colors() {
    let agent = PaletteAgent::with_client(None);
    let resp = agent
        .animate(&request("gentle ocean flow", &["#111111", "#222222"]))
        .await;

    assert!(resp.fallback);
    assert!(resp.css.contains("background-position"));
    assert!(resp.css.contains("#111111, #222222"));
    assert!(resp.css.contains(ANIMATION_SELECTOR));
    assert!(resp.explanation.contains("gentle ocean flow"));
}
