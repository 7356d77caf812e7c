//! Word wrapping by display width, for panes that scroll by visual row.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wrap `text` into rows no wider than `width` columns. Words longer than a
/// row are broken at character boundaries; embedded newlines start new rows.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for paragraph in text.split('\n') {
        let mut row = String::new();
        let mut row_w = 0usize;

        for word in paragraph.split(' ') {
            let word_w = UnicodeWidthStr::width(word);
            let sep = usize::from(!row.is_empty());
            if row_w + sep + word_w <= width {
                if sep == 1 {
                    row.push(' ');
                }
                row.push_str(word);
                row_w += sep + word_w;
                continue;
            }
            if !row.is_empty() {
                rows.push(std::mem::take(&mut row));
                row_w = 0;
            }
            for ch in word.chars() {
                let cw = UnicodeWidthChar::width(ch).unwrap_or(0);
                if row_w + cw > width && !row.is_empty() {
                    rows.push(std::mem::take(&mut row));
                    row_w = 0;
                }
                row.push(ch);
                row_w += cw;
            }
        }
        rows.push(row);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_on_words() {
        assert_eq!(
            wrap_text("hello world foo", 11),
            vec!["hello world".to_string(), "foo".to_string()]
        );
    }

    #[test]
    fn test_breaks_long_words() {
        assert_eq!(wrap_text("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn test_counts_wide_chars_as_two_columns() {
        assert_eq!(wrap_text("😊😊😊", 4), vec!["😊😊", "😊"]);
    }

    #[test]
    fn test_newlines_and_empty_text() {
        assert_eq!(wrap_text("a\nb", 10), vec!["a", "b"]);
        assert_eq!(wrap_text("", 10), vec![""]);
    }
}
