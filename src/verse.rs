use std::borrow::Cow;

use crate::pagination::Pagination;

pub const DEFAULT_LIMIT: i64 = 3;

const DELIMITER: &str = "\n\n";
// Some upstreams store the newline escape sequence itself instead of a newline.
const ESCAPED_NEWLINE: &str = "\\n";

fn normalize(text: &str) -> Cow<'_, str> {
    if text.contains(ESCAPED_NEWLINE) || text.contains('\r') {
        text.replace(ESCAPED_NEWLINE, "\n").replace("\r\n", "\n").into()
    } else {
        text.into()
    }
}

fn split(text: &str) -> impl Iterator<Item = &str> {
    text.split(DELIMITER).map(str::trim).filter(|verse| !verse.is_empty())
}

/// Verses of `text` that fall into the requested page. A page past the last verse is empty.
pub fn paginate(text: &str, pagination: Pagination) -> Vec<String> {
    let text = normalize(text);
    pagination.window(split(&text)).map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const TEXT: &str = "Line1\n\nLine2\n\nLine3\n\nLine4";

    #[rstest]
    #[case(1, 2, &["Line1", "Line2"])]
    #[case(2, 2, &["Line3", "Line4"])]
    #[case(2, 3, &["Line4"])]
    #[case(3, 2, &[])]
    #[case(10, 2, &[])]
    #[case(0, 0, &["Line1", "Line2", "Line3"])]
    #[case(-1, 10, &["Line1", "Line2", "Line3", "Line4"])]
    fn test_paginate(#[case] page: i64, #[case] limit: i64, #[case] expected: &[&str]) {
        assert_eq!(paginate(TEXT, Pagination::new(page, limit, DEFAULT_LIMIT)), expected);
    }

    #[rstest]
    #[case::escaped(r"Line1\n\nLine2\n\nLine3")]
    #[case::crlf("Line1\r\n\r\nLine2\r\n\r\nLine3")]
    #[case::extra_blank_lines("\nLine1\n\n\n\nLine2\n\n  \n\nLine3\n")]
    fn test_paginate_delimiter(#[case] text: &str) {
        assert_eq!(
            paginate(text, Pagination::new(1, 10, DEFAULT_LIMIT)),
            &["Line1", "Line2", "Line3"]
        );
    }

    #[test]
    fn test_paginate_keep_line_break_inside_verse() {
        assert_eq!(
            paginate("a\nb\n\nc\nd", Pagination::new(1, 10, DEFAULT_LIMIT)),
            &["a\nb", "c\nd"]
        );
    }

    #[test]
    fn test_paginate_empty() {
        assert!(paginate("", Pagination::new(1, 3, DEFAULT_LIMIT)).is_empty());
    }
}
