//! Reading time estimation

use crate::content::ContentSection;

/// Fixed reading speed the estimate divides by
pub const WORDS_PER_MINUTE: usize = 200;

/// Estimate the minutes needed to read a post: words in the title plus
/// words in every section heading and flattened body, at 200 words per
/// minute, rounded up. Empty titles, headings and bodies contribute
/// zero words.
pub fn estimate_reading_time(title: &str, content: &[ContentSection]) -> u32 {
    let words = count_words(title)
        + content
            .iter()
            .map(|section| count_words(&section.heading) + count_words(&section.body.as_text()))
            .sum::<usize>();

    words.div_ceil(WORDS_PER_MINUTE) as u32
}

fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{RichText, RichTextBlock};

    fn section(heading: &str, body_words: usize) -> ContentSection {
        let text = vec!["word"; body_words].join(" ");
        ContentSection {
            heading: heading.to_string(),
            body: RichText(vec![RichTextBlock {
                kind: "paragraph".to_string(),
                text,
                spans: Vec::new(),
            }]),
        }
    }

    #[test]
    fn test_exact_multiple_boundary() {
        // "Hello World" (2) + 198 body words = 200 -> 1 minute
        let sections = [section("", 198)];
        assert_eq!(estimate_reading_time("Hello World", &sections), 1);

        // one more word crosses the boundary
        let sections = [section("", 199)];
        assert_eq!(estimate_reading_time("Hello World", &sections), 2);
    }

    #[test]
    fn test_heading_words_count() {
        let sections = [section("a heading of four", 196)];
        assert_eq!(estimate_reading_time("", &sections), 1);
        let sections = [section("a heading of four", 197)];
        assert_eq!(estimate_reading_time("", &sections), 2);
    }

    #[test]
    fn test_empty_post_is_zero_minutes() {
        assert_eq!(estimate_reading_time("", &[]), 0);
        assert_eq!(estimate_reading_time("", &[section("", 0)]), 0);
    }

    #[test]
    fn test_short_post_rounds_up() {
        let sections = [section("", 5)];
        assert_eq!(estimate_reading_time("Tiny", &sections), 1);
    }
}
