/// Fewest words worth carrying into the next chunk
pub const MIN_OVERLAP_WORDS: usize = 5;

/// Trailing words of `chunk_text` used to seed the next chunk.
///
/// Assumes about two tokens per word, caps the overlap at a quarter of the
/// chunk's words and raises it to [`MIN_OVERLAP_WORDS`]. Returns an empty
/// string when the chunk has fewer words than that floor.
pub fn compute_overlap(chunk_text: &str, overlap_size: usize) -> String {
    let words: Vec<&str> = chunk_text.split_whitespace().collect();
    if words.is_empty() {
        return String::new();
    }

    let mut overlap_words = overlap_size / 2;
    if overlap_words > words.len() / 4 {
        overlap_words = words.len() / 4;
    }
    if overlap_words < MIN_OVERLAP_WORDS {
        overlap_words = MIN_OVERLAP_WORDS;
    }
    if overlap_words > words.len() {
        return String::new();
    }

    words[words.len() - overlap_words..].join(" ")
}
