/// Length of `text` in offset units (UTF-16 code units).
///
/// Exported annotation offsets count these units, so a character outside
/// the Basic Multilingual Plane (most emoji) takes two.
pub fn utf16_len(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}

/// Byte index of UTF-16 offset `offset` in `text`.
///
/// An offset inside a surrogate pair snaps forward to the end of that
/// character; offsets past the end map to `text.len()`.
pub fn utf16_to_byte(text: &str, offset: usize) -> usize {
    let mut units = 0;
    for (byte, c) in text.char_indices() {
        if units >= offset {
            return byte;
        }
        units += c.len_utf16();
    }
    text.len()
}

/// Slice `text` by UTF-16 offsets `[start, end)`.
///
/// Offsets past the end are cut to the text length and an inverted range
/// yields an empty slice, so this never panics on bad offsets.
pub fn slice_utf16(text: &str, start: usize, end: usize) -> &str {
    if start >= end {
        return "";
    }
    let from = utf16_to_byte(text, start);
    let to = utf16_to_byte(text, end);
    if from >= to {
        return "";
    }
    &text[from..to]
}

/// Truncate a string to `max_chars`, appending "..." when cut
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars <= 3 {
        return text.chars().take(max_chars).collect();
    }
    let truncated: String = text.chars().take(max_chars - 3).collect();
    format!("{}...", truncated)
}
