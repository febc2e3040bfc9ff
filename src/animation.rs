use thiserror::Error;

/// Class selector every generated animation must use, on both the completion
/// and fallback paths.
pub const ANIMATION_SELECTOR: &str = ".ai-generated-animation";

/// Substituted when a request carries no colors.
pub const DEFAULT_ANIMATION_COLORS: [&str; 4] = ["#FFB6C1", "#87CEFA", "#98FB98", "#FFD700"];

/// Completion output failed the structural CSS check; callers route to the
/// fallback generator.
#[derive(Debug, Error)]
#[error("generated CSS failed structural validation")]
pub struct InvalidGenerationError;

fn color_list(colors: &[String]) -> String {
    if colors.is_empty() {
        DEFAULT_ANIMATION_COLORS.join(", ")
    } else {
        colors.join(", ")
    }
}

/// Strips markdown fences and any explanatory preamble from completion text,
/// then checks the remainder is structurally CSS (holds at least one brace
/// pair). Generated CSS is untrusted text; nothing beyond this presence
/// check is interpreted here.
pub fn clean_css(raw: &str) -> Result<String, InvalidGenerationError> {
    let stripped = raw.replace("```css", "").replace("```", "");

    let start = [stripped.find(ANIMATION_SELECTOR), stripped.find("@keyframes")]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(0);
    let css = stripped[start..].trim();

    if !css.contains('{') || !css.contains('}') {
        return Err(InvalidGenerationError);
    }

    Ok(css.to_string())
}

/// Keyword-matched animation CSS, first match wins. Every branch references
/// the supplied (or default) colors and the fixed selector. Never fails.
pub fn fallback_animation(description: &str, colors: &[String]) -> String {
    let colors = color_list(colors);
    let keywords = description.to_lowercase();

    if ["pulse", "heartbeat", "throb"].iter().any(|k| keywords.contains(k)) {
        return format!(
            "{ANIMATION_SELECTOR} {{
  background: linear-gradient(45deg, {colors});
  animation: pulseBeat 2s ease-in-out infinite;
}}

@keyframes pulseBeat {{
  0%, 100% {{ transform: scale(1); opacity: 0.8; }}
  50% {{ transform: scale(1.1); opacity: 1; }}
}}"
        );
    }

    if ["rotate", "spin", "swirl"].iter().any(|k| keywords.contains(k)) {
        return format!(
            "{ANIMATION_SELECTOR} {{
  background: conic-gradient({colors});
  animation: spinSwirl 4s linear infinite;
}}

@keyframes spinSwirl {{
  0% {{ transform: rotate(0deg); }}
  100% {{ transform: rotate(360deg); }}
}}"
        );
    }

    if ["wave", "ocean", "flow"].iter().any(|k| keywords.contains(k)) {
        return format!(
            "{ANIMATION_SELECTOR} {{
  background: linear-gradient(45deg, {colors});
  background-size: 400% 400%;
  animation: waveFlow 6s ease-in-out infinite;
}}

@keyframes waveFlow {{
  0% {{ background-position: 0% 50%; }}
  50% {{ background-position: 100% 50%; }}
  100% {{ background-position: 0% 50%; }}
}}"
        );
    }

    if ["bounce", "jump", "hop"].iter().any(|k| keywords.contains(k)) {
        return format!(
            "{ANIMATION_SELECTOR} {{
  background: radial-gradient(circle, {colors});
  animation: bounceMotion 1.5s ease-in-out infinite;
}}

@keyframes bounceMotion {{
  0%, 100% {{ transform: translateY(0); }}
  25% {{ transform: translateY(-20px); }}
  50% {{ transform: translateY(-10px); }}
  75% {{ transform: translateY(-15px); }}
}}"
        );
    }

    format!(
        "{ANIMATION_SELECTOR} {{
  background: linear-gradient(45deg, {colors});
  background-size: 200% 200%;
  animation: defaultMotion 4s ease-in-out infinite;
}}

@keyframes defaultMotion {{
  0% {{ background-position: 0% 0%; transform: scale(1); }}
  50% {{ background-position: 100% 100%; transform: scale(1.05); }}
  100% {{ background-position: 0% 0%; transform: scale(1); }}
}}"
    )
}
