/// Returns at most `max_chars` leading characters of `text`, never splitting a
/// UTF-8 sequence.
pub fn leading_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
