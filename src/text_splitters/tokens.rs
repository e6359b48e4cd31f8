/// Estimate how many model tokens `text` costs without a tokenizer.
///
/// Longer average word length maps to more sub-word pieces: words averaging
/// up to 4 characters count 1.0 token each, up to 8 characters 1.3, longer
/// words 1.5. Text without any whitespace-separated word falls back to one
/// token per 4 characters.
pub fn estimate_tokens(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }

    let word_count = text.split_whitespace().count();
    let char_count = text.chars().count();

    if word_count == 0 {
        return char_count / 4;
    }

    let avg_word_len = char_count as f64 / word_count as f64;
    let factor = if avg_word_len <= 4.0 {
        1.0
    } else if avg_word_len <= 8.0 {
        1.3
    } else {
        1.5
    };

    (word_count as f64 * factor).round() as usize
}
