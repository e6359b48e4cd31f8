/// Marker the normalizer leaves between paragraphs
pub const PARAGRAPH_BREAK: &str = "\n\n";

/// Canonicalize whitespace so the structural splitters only ever see single
/// spaces and `"\n\n"` paragraph breaks.
///
/// - runs of horizontal whitespace become one space
/// - a single line break is a soft wrap and becomes one space
/// - two or more line breaks become exactly one paragraph break
/// - leading and trailing whitespace is dropped
///
/// `\r\n` counts as one line break, and horizontal whitespace inside a run of
/// line breaks is absorbed by it, so a line holding only spaces still
/// separates paragraphs.
pub fn normalize(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    let mut pending_space = false;
    let mut line_breaks = 0usize;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                line_breaks += 1;
            }
            '\n' => line_breaks += 1,
            c if c.is_whitespace() => pending_space = true,
            c => {
                // Nothing is flushed before the first visible character, which trims the front
                if !normalized.is_empty() {
                    if line_breaks >= 2 {
                        normalized.push_str(PARAGRAPH_BREAK);
                    } else if line_breaks == 1 || pending_space {
                        normalized.push(' ');
                    }
                }
                line_breaks = 0;
                pending_space = false;
                normalized.push(c);
            }
        }
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_horizontal_whitespace() {
        assert_eq!(normalize("a  \t b\t\tc"), "a b c");
    }

    #[test]
    fn test_single_newline_is_soft_wrap() {
        assert_eq!(normalize("first line\nsecond line"), "first line second line");
    }

    #[test]
    fn test_multiple_newlines_become_paragraph_break() {
        assert_eq!(normalize("one\n\ntwo"), "one\n\ntwo");
        assert_eq!(normalize("one\n\n\n\n\ntwo"), "one\n\ntwo");
    }

    #[test]
    fn test_trims_ends() {
        assert_eq!(normalize("  \n\n hello world \t\n"), "hello world");
    }

    #[test]
    fn test_crlf_line_endings() {
        assert_eq!(normalize("a\r\nb"), "a b");
        assert_eq!(normalize("a\r\n\r\nb"), "a\n\nb");
    }

    #[test]
    fn test_whitespace_only_line_separates_paragraphs() {
        assert_eq!(normalize("para one\n   \npara two"), "para one\n\npara two");
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \t\n\n  \r\n"), "");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "",
            "plain",
            "  lots   of\tspace  ",
            "a\nb\n\nc\n\n\n\nd",
            "\r\n\r\nwindows\r\ntext\r\n",
            "mixed \n \t \n breaks\u{00A0}and nbsp",
            "Привет  мир\n\n世界",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", sample);
        }
    }
}
