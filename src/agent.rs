use std::error::Error;
use std::sync::Arc;

use log::{ info, warn, error };

use crate::animation::{ clean_css, fallback_animation };
use crate::cli::Args;
use crate::llm::{ self, CompletionClient, CompletionConfig };
use crate::models::ai::{
    AnimationRequest,
    AnimationResponse,
    SuggestionRequest,
    SuggestionResponse,
};
use crate::palette::{
    completion_confidence,
    explanation,
    fallback_palette,
    parse_colors,
    FALLBACK_CONFIDENCE,
};
use crate::prompt;

/// Stateless orchestrator for the suggestion and animation pipelines. Holds
/// the completion client when one is configured; `None` means every request
/// short-circuits to the local generators without a network round trip.
#[derive(Clone)]
pub struct PaletteAgent {
    completion_client: Option<Arc<dyn CompletionClient>>,
}

impl PaletteAgent {
    pub fn new(args: &Args) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let completion_client = if llm::is_configured(&args.ai_api_key) {
            let config = CompletionConfig {
                api_key: args.ai_api_key.clone(),
                model: args.ai_model.clone(),
                base_url: args.ai_base_url.clone(),
                timeout_secs: args.ai_timeout_secs,
            };
            let client = llm::new_client(&config)?;
            info!(
                "Completion client configured: Model={}, BaseURL={}, Timeout={}s",
                args.ai_model,
                args.ai_base_url,
                args.ai_timeout_secs
            );
            Some(client)
        } else {
            info!("Completion service credential not configured, all requests use local generation");
            None
        };

        Ok(Self { completion_client })
    }

    /// Builds an agent around an existing client. Used by tests and by any
    /// embedder that wires its own transport.
    pub fn with_client(completion_client: Option<Arc<dyn CompletionClient>>) -> Self {
        Self { completion_client }
    }

    /// Palette suggestions for a mood. Infallible: configuration absence,
    /// transport failures and unusable completions all resolve to the
    /// fallback palette with the response tagged accordingly.
    pub async fn suggest(&self, req: &SuggestionRequest) -> SuggestionResponse {
        let Some(client) = &self.completion_client else {
            info!("Using fallback palette generation for mood '{}'", req.mood);
            return Self::fallback_suggestions(req, " (Generated using color theory algorithms)");
        };

        let prompt = prompt::suggestion_prompt(req);
        match client.complete(&prompt).await {
            Ok(completion) => {
                let parsed = parse_colors(&completion.response);
                if parsed.matched < parsed.colors.len() {
                    warn!(
                        "Completion held {} hex colors, padded to {}",
                        parsed.matched,
                        parsed.colors.len()
                    );
                }
                SuggestionResponse {
                    confidence: completion_confidence(parsed.matched),
                    suggestions: parsed.colors,
                    explanation: explanation(req),
                    fallback: false,
                }
            }
            Err(e) => {
                error!("Completion service error: {}", e);
                Self::fallback_suggestions(
                    req,
                    " (AI temporarily unavailable - using color theory algorithms)"
                )
            }
        }
    }

    fn fallback_suggestions(req: &SuggestionRequest, reason: &str) -> SuggestionResponse {
        SuggestionResponse {
            suggestions: fallback_palette(&req.mood),
            explanation: format!("{}{}", explanation(req), reason),
            confidence: FALLBACK_CONFIDENCE,
            fallback: true,
        }
    }

    /// Animation CSS for a free-text description. Callers must reject an
    /// empty description before invoking this; see the HTTP layer.
    pub async fn animate(&self, req: &AnimationRequest) -> AnimationResponse {
        let Some(client) = &self.completion_client else {
            info!("Using fallback animation generation for '{}'", req.description);
            return AnimationResponse {
                css: fallback_animation(&req.description, &req.colors),
                explanation: format!(
                    "Animation based on \"{}\" - Generated using fallback algorithms",
                    req.description
                ),
                fallback: true,
            };
        };

        let prompt = prompt::animation_prompt(&req.description, &req.colors);
        match client.complete(&prompt).await {
            Ok(completion) => match clean_css(&completion.response) {
                Ok(css) => AnimationResponse {
                    css,
                    explanation: format!("Custom animation based on: \"{}\"", req.description),
                    fallback: false,
                },
                Err(e) => {
                    warn!("Discarding completion output: {}", e);
                    Self::fallback_animation_response(req)
                }
            },
            Err(e) => {
                error!("Completion service error: {}", e);
                Self::fallback_animation_response(req)
            }
        }
    }

    fn fallback_animation_response(req: &AnimationRequest) -> AnimationResponse {
        AnimationResponse {
            css: fallback_animation(&req.description, &req.colors),
            explanation: format!(
                "AI temporarily unavailable. Generated fallback animation for: \"{}\"",
                req.description
            ),
            fallback: true,
        }
    }
}
