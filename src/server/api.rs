use crate::agent::PaletteAgent;
use crate::cli::Args;
use crate::models::ai::{ AnimationRequest, SuggestionRequest };
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use axum::{
    routing::{ get, post },
    Router,
    extract::State,
    response::IntoResponse,
    http::StatusCode,
    Json,
};
use serde::Serialize;
use serde_json::json;
use tower_http::cors::{ Any, CorsLayer };
use log::{ info, error };

#[derive(Serialize)]
struct ApiError {
    error: String,
}

#[derive(Clone)]
pub struct AppState {
    agent: Arc<PaletteAgent>,
}

pub fn build_router(agent: Arc<PaletteAgent>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/ai/suggestions", post(suggestions_handler))
        .route("/ai/animation", post(animation_handler))
        .layer(cors)
        .with_state(AppState { agent })
}

pub async fn start_http_server(
    http_port: u16,
    agent: Arc<PaletteAgent>,
    args: Args,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let addr = format!("0.0.0.0:{}", http_port).parse::<SocketAddr>()?;
    info!("Starting HTTP API server on: http://{}", addr);

    let app = build_router(agent);

    if args.enable_tls && args.tls_cert_path.is_some() && args.tls_key_path.is_some() {
        let cert_path = args.tls_cert_path.as_ref().unwrap();
        let key_path = args.tls_key_path.as_ref().unwrap();

        let tls_config = axum_server::tls_rustls::RustlsConfig::from_pem_file(
            cert_path,
            key_path
        ).await?;

        info!("HTTPS server started with TLS enabled");
        axum_server::bind_rustls(addr, tls_config)
            .serve(app.into_make_service())
            .await?;
    } else {
        let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
            error!("Failed to bind HTTP server to {}: {}. Try a different port.", addr, e);
            e
        })?;
        axum::serve(listener, app.into_make_service()).await?;
    }

    Ok(())
}

async fn root_handler() -> impl IntoResponse {
    Json(json!({
        "message": "MoodPalette API running",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

async fn suggestions_handler(
    State(state): State<AppState>,
    Json(req): Json<SuggestionRequest>,
) -> impl IntoResponse {
    Json(state.agent.suggest(&req).await)
}

async fn animation_handler(
    State(state): State<AppState>,
    Json(req): Json<AnimationRequest>,
) -> impl IntoResponse {
    if req.description.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiError {
                error: "description is required".into(),
            }),
        ).into_response();
    }

    Json(state.agent.animate(&req).await).into_response()
}
