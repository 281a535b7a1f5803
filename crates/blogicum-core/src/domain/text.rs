//! Text helpers shared by entity labels and listing pages.

/// Labels longer than this are cut and suffixed with `...`.
pub const STR_MAX_LENGTH: usize = 30;

/// Word budget for post excerpts on listing pages.
pub const POST_TEXT_TRUNCATE_WORDS: usize = 10;

/// Shorten `value` to [`STR_MAX_LENGTH`] characters.
pub fn short_label(value: &str) -> String {
    match value.char_indices().nth(STR_MAX_LENGTH) {
        Some((cut, _)) => format!("{}...", &value[..cut]),
        None => value.to_string(),
    }
}

/// Keep the first `words` whitespace-separated words of `text`.
///
/// Truncated output ends with ` …`.
pub fn truncate_words(text: &str, words: usize) -> String {
    let mut parts = text.split_whitespace();
    let kept: Vec<&str> = parts.by_ref().take(words).collect();
    if parts.next().is_some() {
        format!("{} …", kept.join(" "))
    } else {
        kept.join(" ")
    }
}

/// URL identifiers allow ASCII letters, digits, hyphen and underscore.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
