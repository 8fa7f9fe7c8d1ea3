#[must_use]
pub fn truncate_with_ellipsis(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => {
            let truncated = &s[..idx];
            format!("{}...", truncated.trim_end())
        }
        None => s.to_string(),
    }
}

/// Character count as shown in the `len/500` field counters. Counted in
/// Unicode scalar values, not bytes, so accented and CJK input is not
/// penalized.
#[must_use]
pub fn char_count(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_string_untouched() {
        assert_eq!(truncate_with_ellipsis("great teamwork", 50), "great teamwork");
    }

    #[test]
    fn truncate_at_exact_boundary() {
        assert_eq!(truncate_with_ellipsis("vibes", 5), "vibes");
    }

    #[test]
    fn truncate_long_string_appends_ellipsis() {
        assert_eq!(
            truncate_with_ellipsis("Sarah clearly explained the rollout", 12),
            "Sarah clearl..."
        );
    }

    #[test]
    fn truncate_trims_trailing_space_before_ellipsis() {
        assert_eq!(truncate_with_ellipsis("hello world", 6), "hello...");
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate_with_ellipsis("café résumé", 9), "café résu...");
        let s = "😀😀😀😀";
        assert_eq!(truncate_with_ellipsis(s, 2), "😀😀...");
    }

    #[test]
    fn truncate_zero_max_chars() {
        assert_eq!(truncate_with_ellipsis("hello", 0), "...");
    }

    #[test]
    fn char_count_ascii() {
        assert_eq!(char_count("hello"), 5);
        assert_eq!(char_count(""), 0);
    }

    #[test]
    fn char_count_multibyte() {
        assert_eq!(char_count("café"), 4);
        assert_eq!(char_count("你好"), 2);
        assert_eq!(char_count("🤝"), 1);
    }

    #[test]
    fn char_count_matches_field_limit_semantics() {
        let exactly_500 = "a".repeat(500);
        assert_eq!(char_count(&exactly_500), 500);
        let accented_500 = "é".repeat(500);
        assert_eq!(char_count(&accented_500), 500);
        assert!(accented_500.len() > 500);
    }
}
