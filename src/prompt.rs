use crate::animation::{ ANIMATION_SELECTOR, DEFAULT_ANIMATION_COLORS };
use crate::models::ai::SuggestionRequest;

/// Builds the instruction string for a palette suggestion completion. The
/// closing sentence pins the response format so the parser sees bare hex
/// codes instead of prose.
pub fn suggestion_prompt(req: &SuggestionRequest) -> String {
    let mut prompt = format!(
        "You are a professional color theory expert and designer. \
         Generate exactly 5 hex color codes for a \"{}\" mood palette",
        req.mood
    );

    if !req.current_colors.is_empty() {
        prompt.push_str(
            &format!(". Current colors: {}. Suggest complementary colors", req.current_colors.join(", "))
        );
    }

    if !req.user_input.is_empty() {
        prompt.push_str(&format!(". User wants: {}", req.user_input));
    }

    if !req.style.is_empty() {
        prompt.push_str(&format!(". Style: {}", req.style));
    }

    prompt.push_str(
        ". Respond with ONLY 5 hex color codes separated by commas \
         (e.g., #FF5733, #33FF57, #3357FF, #F7DC6F, #BB8FCE). No other text or explanation."
    );
    prompt
}

/// Builds the instruction string for an animation completion. Callers must
/// reject an empty description before reaching this point.
pub fn animation_prompt(description: &str, colors: &[String]) -> String {
    let color_list = if colors.is_empty() {
        DEFAULT_ANIMATION_COLORS.join(", ")
    } else {
        colors.join(", ")
    };

    format!(
        "You are a CSS animation expert. Generate a complete CSS animation based on this description: \"{description}\"

Use these colors: {color_list}

Requirements:
1. Generate ONLY valid CSS code with keyframes and classes
2. Use the class name \"{ANIMATION_SELECTOR}\" for the main animation
3. Include all necessary @keyframes rules
4. Make it smooth and visually appealing
5. Ensure cross-browser compatibility
6. Use the provided colors creatively in the animation
7. Make the animation loop infinitely
8. Include any necessary transform, opacity, or other properties

Example structure:
{ANIMATION_SELECTOR} {{
  /* main styles */
  animation: yourAnimationName 4s ease-in-out infinite;
}}

@keyframes yourAnimationName {{
  0% {{ /* start state */ }}
  50% {{ /* middle state */ }}
  100% {{ /* end state */ }}
}}

Generate the CSS now:"
    )
}
