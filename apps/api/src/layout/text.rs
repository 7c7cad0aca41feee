//! String utilities shared by validation and layout.

/// Collapses every run of whitespace to a single space and trims both ends.
/// Empty input stays empty.
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Left-pads `text` with spaces up to `pad_len` chars.
///
/// When `text` is already longer than `pad_len`, the head is dropped and the
/// tail starting at index `pad_len` is returned instead. That mirrors the
/// upstream renderer's author centering, which truncates rather than pads in
/// this case; callers treat it as a known limitation of char-count centering.
pub fn pad_left_with_spaces(text: &str, pad_len: usize) -> String {
    let len = text.chars().count();
    if len > pad_len {
        return text.chars().skip(pad_len).collect();
    }

    let mut padded = String::with_capacity(pad_len);
    for _ in len..pad_len {
        padded.push(' ');
    }
    padded.push_str(text);
    padded
}
