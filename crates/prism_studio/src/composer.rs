//! Prompt templating.

/// Builds the strings sent to the text backend.
///
/// All operations are pure string functions and cannot fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptComposer;

impl PromptComposer {
    /// Append modifiers to a base prompt, joined by `", "`.
    ///
    /// # Examples
    ///
    /// ```
    /// use prism_studio::PromptComposer;
    ///
    /// assert_eq!(
    ///     PromptComposer::compose("A castle", &["oil painting style", "detailed"]),
    ///     "A castle, oil painting style, detailed"
    /// );
    /// assert_eq!(PromptComposer::compose::<&str>("A castle", &[]), "A castle");
    /// ```
    pub fn compose<S: AsRef<str>>(base_prompt: &str, modifiers: &[S]) -> String {
        let mut composed = String::from(base_prompt);
        for modifier in modifiers {
            composed.push_str(", ");
            composed.push_str(modifier.as_ref());
        }
        composed
    }

    /// Ask the text backend to rewrite `text` for natural-sounding speech.
    pub fn compose_enhancement_request(text: &str) -> String {
        format!(
            "Improve this text for text-to-speech, making it more natural and engaging \
             while keeping the same meaning: {text}"
        )
    }

    /// Ask the text backend to expand an idea into an image-generator prompt.
    pub fn compose_image_prompt_request(user_idea: &str) -> String {
        format!(
            "Create a detailed, professional image generation prompt based on this request: \"{user_idea}\"

Please provide:
1. A detailed visual description (style, composition, lighting, colors)
2. Technical specifications (camera angle, art style, quality modifiers)
3. Mood and atmosphere details

Format the response as a single, comprehensive prompt that can be used directly in AI image generators like DALL-E, Midjourney, or Stable Diffusion.

Make it vivid, specific, and optimized for high-quality image generation."
        )
    }

    /// Backend-independent image prompt used when enhancement fails.
    pub fn fallback_image_prompt(user_idea: &str) -> String {
        format!(
            "High-quality, detailed image of {user_idea}, professional photography, \
             8K resolution, perfect lighting, vibrant colors"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_keeps_modifier_order() {
        let modifiers = vec!["b".to_string(), "a".to_string(), "c".to_string()];
        assert_eq!(PromptComposer::compose("x", &modifiers), "x, b, a, c");
    }

    #[test]
    fn test_compose_does_not_validate_modifiers() {
        assert_eq!(PromptComposer::compose("x", &["", " "]), "x, ,  ");
    }

    #[test]
    fn test_enhancement_request_wraps_text() {
        let request = PromptComposer::compose_enhancement_request("hello world");
        assert!(request.starts_with("Improve this text for text-to-speech"));
        assert!(request.ends_with(": hello world"));
    }

    #[test]
    fn test_image_prompt_request_quotes_idea() {
        let request = PromptComposer::compose_image_prompt_request("a red fox");
        assert!(request.contains("based on this request: \"a red fox\""));
        assert!(request.contains("2. Technical specifications"));
        assert!(request.contains("3. Mood and atmosphere details"));
    }

    #[test]
    fn test_fallback_template() {
        assert_eq!(
            PromptComposer::fallback_image_prompt("A story about a robot"),
            "High-quality, detailed image of A story about a robot, professional photography, \
             8K resolution, perfect lighting, vibrant colors"
        );
    }
}
