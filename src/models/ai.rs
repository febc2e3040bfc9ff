use serde::{ Serialize, Deserialize };

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRequest {
    pub mood: String,
    #[serde(default)]
    pub current_colors: Vec<String>,
    #[serde(default)]
    pub user_input: String,
    #[serde(default)]
    pub style: String,
}

/// Always carries exactly 5 hex color strings, on every path.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SuggestionResponse {
    pub suggestions: Vec<String>,
    pub explanation: String,
    pub confidence: f64,
    pub fallback: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnimationRequest {
    pub description: String,
    #[serde(default)]
    pub colors: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnimationResponse {
    pub css: String,
    pub explanation: String,
    pub fallback: bool,
}
