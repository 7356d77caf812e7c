//! Crisis-language check run before any message leaves the client.

/// Lowercase substrings that send the user straight to the emergency screen.
pub const TRIGGER_PHRASES: &[&str] = &["suicide", "want to die"];

/// True if `text` contains any trigger phrase, ignoring case.
pub fn is_crisis(text: &str) -> bool {
    let lower = text.to_lowercase();
    TRIGGER_PHRASES.iter().any(|p| lower.contains(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_phrases_any_case() {
        assert!(is_crisis("I want to die"));
        assert!(is_crisis("i WANT TO DIE tonight"));
        assert!(is_crisis("thinking about Suicide"));
    }

    #[test]
    fn test_ordinary_text_passes() {
        assert!(!is_crisis("I had a rough day at work"));
        assert!(!is_crisis("I want to dine out"));
        assert!(!is_crisis(""));
    }
}
