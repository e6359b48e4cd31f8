use super::normalize::PARAGRAPH_BREAK;

/// Split normalized text on paragraph breaks, dropping empty pieces
pub fn split_paragraphs(normalized: &str) -> Vec<String> {
    normalized
        .split(PARAGRAPH_BREAK)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}

/// Split text into sentences.
///
/// A sentence ends right after `.`, `!` or `?` when the next character is
/// missing, whitespace, or an uppercase letter. This is a heuristic: it splits
/// after abbreviations such as "Dr." and keeps going inside "3.14".
pub fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        current.push(c);

        if !matches!(c, '.' | '!' | '?') {
            continue;
        }

        let ends_sentence = match chars.get(i + 1) {
            None => true,
            Some(next) => next.is_whitespace() || next.is_uppercase(),
        };
        if ends_sentence {
            push_trimmed(&mut sentences, &current);
            current.clear();
        }
    }

    push_trimmed(&mut sentences, &current);
    sentences
}

fn push_trimmed(sentences: &mut Vec<String>, candidate: &str) {
    let trimmed = candidate.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_paragraphs() {
        let paragraphs = split_paragraphs("First para.\n\nSecond para.\n\nThird.");
        assert_eq!(paragraphs, vec!["First para.", "Second para.", "Third."]);
    }

    #[test]
    fn test_split_paragraphs_drops_empty_pieces() {
        let paragraphs = split_paragraphs("\n\n a \n\n\n\n b \n\n");
        assert_eq!(paragraphs, vec!["a", "b"]);
    }

    #[test]
    fn test_split_paragraphs_empty() {
        assert!(split_paragraphs("").is_empty());
    }

    #[test]
    fn test_split_sentences_basic() {
        let sentences = split_sentences("Hello there. How are you? I am fine!");
        assert_eq!(sentences, vec!["Hello there.", "How are you?", "I am fine!"]);
    }

    #[test]
    fn test_split_sentences_uppercase_follower() {
        let sentences = split_sentences("One.Two.three");
        assert_eq!(sentences, vec!["One.", "Two.three"]);
    }

    #[test]
    fn test_split_sentences_trailing_fragment() {
        let sentences = split_sentences("Complete sentence. trailing fragment without stop");
        assert_eq!(
            sentences,
            vec!["Complete sentence.", "trailing fragment without stop"]
        );
    }

    #[test]
    fn test_split_sentences_no_punctuation() {
        assert_eq!(split_sentences("no stops at all"), vec!["no stops at all"]);
    }

    #[test]
    fn test_split_sentences_repeated_punctuation() {
        let sentences = split_sentences("Really?! Yes.");
        assert_eq!(sentences, vec!["Really?!", "Yes."]);
    }

    #[test]
    fn test_split_sentences_unicode_uppercase() {
        let sentences = split_sentences("Первое.Второе предложение.");
        assert_eq!(sentences, vec!["Первое.", "Второе предложение."]);
    }

    #[test]
    fn test_split_sentences_empty() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
    }

    #[test]
    fn test_decimal_without_space_is_kept() {
        assert_eq!(split_sentences("Pi is 3.14 roughly."), vec!["Pi is 3.14 roughly."]);
    }

    // Known limitations of the punctuation heuristic. These assert the
    // linguistically correct split and are expected to fail.

    #[test]
    #[should_panic]
    fn test_known_limitation_abbreviation() {
        let sentences = split_sentences("Dr. Smith arrived. He sat down.");
        assert_eq!(sentences, vec!["Dr. Smith arrived.", "He sat down."]);
    }

    #[test]
    #[should_panic]
    fn test_known_limitation_number_then_period() {
        let sentences = split_sentences("The value is 3. 14 is another value.");
        assert_eq!(sentences, vec!["The value is 3. 14 is another value."]);
    }
}
