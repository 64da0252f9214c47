use annoview_types::truncate;

/// `1 question`, `3 questions`.
pub fn counted(n: usize, one: &str, many: &str) -> String {
    format!("{} {}", n, if n == 1 { one } else { many })
}

/// Cut `text` to `width` characters when a width is known.
pub fn fit(text: &str, width: Option<usize>) -> String {
    match width {
        Some(width) => truncate(text, width),
        None => text.to_string(),
    }
}

/// Collapse line breaks so a value fits one list row.
pub fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counted() {
        assert_eq!(counted(0, "question", "questions"), "0 questions");
        assert_eq!(counted(1, "question", "questions"), "1 question");
        assert_eq!(counted(2, "entry", "entries"), "2 entries");
    }

    #[test]
    fn test_fit() {
        assert_eq!(fit("How do Koreans celebrate?", Some(10)), "How do ...");
        assert_eq!(fit("short", Some(10)), "short");
        assert_eq!(fit("anything", None), "anything");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("a\n\nb  c\n"), "a b c");
    }
}
