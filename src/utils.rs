/// Mask an API key for display in the header.
pub fn mask_key(key: &str) -> String {
    let len = key.chars().count();
    if len == 0 {
        return "(none)".to_string();
    }
    if len <= 15 {
        // Too short to safely show, just show dots
        return "•".repeat(len);
    }

    let first: String = key.chars().take(7).collect();
    let last: String = key.chars().skip(len - 6).collect();
    format!("{}...{}", first, last)
}

/// Take a bounded, char-safe excerpt of a response body for diagnostics.
pub fn excerpt(body: &str, max_chars: usize) -> String {
    if body.chars().count() <= max_chars {
        body.to_string()
    } else {
        let cut: String = body.chars().take(max_chars).collect();
        format!("{}…", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_key_empty() {
        assert_eq!(mask_key(""), "(none)");
    }

    #[test]
    fn test_mask_key_short_is_fully_hidden() {
        assert_eq!(mask_key("secret"), "••••••");
    }

    #[test]
    fn test_mask_key_long_shows_edges() {
        let masked = mask_key("sk-test-1234567890abcdef");
        assert_eq!(masked, "sk-test...abcdef");
    }

    #[test]
    fn test_excerpt_short_body_unchanged() {
        assert_eq!(excerpt("hello", 500), "hello");
    }

    #[test]
    fn test_excerpt_truncates_long_body() {
        let body = "x".repeat(600);
        let cut = excerpt(&body, 500);
        assert_eq!(cut.chars().count(), 501);
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn test_excerpt_is_char_safe() {
        let body = "é".repeat(10);
        assert_eq!(excerpt(&body, 4), "éééé…");
    }
}
