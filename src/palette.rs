use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;

use crate::models::ai::SuggestionRequest;

pub const PALETTE_SIZE: usize = 5;

/// Confidence reported whenever the local fallback generator produced the
/// palette. Fixed, never randomized.
pub const FALLBACK_CONFIDENCE: f64 = 0.7;

// 6-digit alternative first so "#AABBCC" is not clipped to "#AAB".
static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"#(?:[0-9A-Fa-f]{6}|[0-9A-Fa-f]{3})").unwrap()
});

/// Parse result for a suggestion completion. `matched` counts the colors
/// that genuinely came from the completion text, before any padding.
#[derive(Debug, Clone)]
pub struct ParsedPalette {
    pub colors: Vec<String>,
    pub matched: usize,
}

pub fn is_hex_color(s: &str) -> bool {
    HEX_COLOR.find(s).map(|m| m.as_str().len() == s.len()).unwrap_or(false)
}

pub fn random_hex_color() -> String {
    let n: u32 = rand::rng().random_range(0..=0xFFFFFF);
    format!("#{:06x}", n)
}

/// Extracts hex colors from completion text in order of appearance,
/// truncated to the palette size and padded with random colors when the
/// completion yielded fewer. Never fails.
pub fn parse_colors(text: &str) -> ParsedPalette {
    let mut colors: Vec<String> = HEX_COLOR.find_iter(text)
        .take(PALETTE_SIZE)
        .map(|m| m.as_str().to_string())
        .collect();
    let matched = colors.len();

    while colors.len() < PALETTE_SIZE {
        colors.push(random_hex_color());
    }

    ParsedPalette { colors, matched }
}

/// Deterministic confidence from parse quality: 1.0 when all five colors
/// came from the completion, down to 0.7 when every slot was padding.
pub fn completion_confidence(matched: usize) -> f64 {
    (0.7 + 0.06 * (matched.min(PALETTE_SIZE) as f64)).min(1.0)
}

/// Fixed mood palettes used whenever the completion path is unavailable.
/// Unrecognized moods resolve to the calm entry.
pub fn fallback_palette(mood: &str) -> Vec<String> {
    let colors: [&str; PALETTE_SIZE] = match mood {
        "calm" => ["#A3CEF1", "#5390D9", "#6930C3", "#80FFDB", "#B8C0FF"],
        "romantic" => ["#FFB3C6", "#FF8FAB", "#FDC5F5", "#F7A072", "#F67280"],
        "energetic" => ["#FFD60A", "#FF6F00", "#FF206E", "#41EAD4", "#FBFF12"],
        "professional" => ["#2C3E50", "#34495E", "#7F8C8D", "#BDC3C7", "#ECF0F1"],
        _ => return fallback_palette("calm"),
    };
    colors.iter().map(|c| c.to_string()).collect()
}

/// Human-readable rationale for a palette: a mood-derived base phrase plus
/// optional style and user-input clauses. Never returns an empty string.
pub fn explanation(req: &SuggestionRequest) -> String {
    let mut explanation = match req.mood.as_str() {
        "calm" => "These soothing blues and greens promote tranquility and peace",
        "energetic" => "Vibrant and warm colors to boost energy and motivation",
        "romantic" => "Soft pinks and warm tones create an intimate atmosphere",
        "professional" => "Sophisticated neutrals with accent colors for credibility",
        "creative" => "Bold and inspiring colors to stimulate imagination",
        "focused" => "Balanced colors that enhance concentration and clarity",
        _ => "A harmonious palette based on color theory principles",
    }.to_string();

    if !req.style.is_empty() {
        let addition = match req.style.as_str() {
            "minimalist" => " with clean, understated tones".to_string(),
            "vibrant" => " featuring bold, saturated hues".to_string(),
            "pastel" => " using soft, muted variations".to_string(),
            "earth" => " incorporating natural, grounded colors".to_string(),
            "monochromatic" => " exploring variations of a single hue".to_string(),
            "complementary" => " using opposing colors for dynamic contrast".to_string(),
            other => format!(" with a {} aesthetic", other),
        };
        explanation.push_str(&addition);
    }

    if !req.user_input.trim().is_empty() {
        explanation.push_str(&format!(". Tailored for: {}", req.user_input.trim()));
    }

    explanation
}
