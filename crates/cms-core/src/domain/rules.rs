//! Pure text rules behind validation and derived fields.

/// Minimum heading length, in characters.
pub const MIN_HEADING_CHARS: usize = 3;

/// Assumed reading speed.
pub const WORDS_PER_MINUTE: usize = 200;

/// Fallback SEO title length, in characters.
pub const SEO_TITLE_MAX_CHARS: usize = 60;

/// Fallback SEO description length, in characters.
pub const SEO_DESCRIPTION_MAX_CHARS: usize = 160;

/// Blank means absent, empty, or whitespace only.
pub fn is_blank(text: Option<&str>) -> bool {
    text.is_none_or(|t| t.trim().is_empty())
}

/// Count whitespace-separated words.
pub fn word_count(content: &str) -> usize {
    content.split_whitespace().count()
}

/// `max(1, ceil(words / 200))`.
pub fn read_time_minutes(content: &str) -> u32 {
    let minutes = word_count(content).div_ceil(WORDS_PER_MINUTE).max(1);
    u32::try_from(minutes).unwrap_or(u32::MAX)
}

/// Hard truncation to `max_chars` characters, no word-boundary handling.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Keep `provided` verbatim unless it is blank, otherwise fall back to the
/// first `max_chars` characters of `source`.
pub fn resolve_seo_field(provided: Option<String>, source: &str, max_chars: usize) -> String {
    match provided {
        Some(value) if !is_blank(Some(value.as_str())) => value,
        _ => truncate_chars(source, max_chars).to_string(),
    }
}
