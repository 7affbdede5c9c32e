//! Title cleanup and title/subtitle joining

/// Characters stripped when deriving a clean title
const TITLE_PUNCTUATION: &[char] = &['"', '\'', ',', '.', '!', '?', '-', '$', '(', ')'];

/// Remove sort-hostile punctuation from a title
pub fn clean_title(title: &str) -> String {
    title.chars().filter(|c| !TITLE_PUNCTUATION.contains(c)).collect()
}

/// Locale-aware joining of title parts (title, subtitle, ...)
pub trait TitleJoiner {
    fn join_title_parts(&self, parts: &[&str]) -> String;
}

/// Joins parts with a separator, or a bare space when the previous part
/// already ends in `?`, `!` or `:`.
#[derive(Clone, Debug)]
pub struct SeparatorJoiner {
    separator: String,
}

impl SeparatorJoiner {
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }
}

impl Default for SeparatorJoiner {
    fn default() -> Self {
        Self::new(": ")
    }
}

impl TitleJoiner for SeparatorJoiner {
    fn join_title_parts(&self, parts: &[&str]) -> String {
        let mut joined = String::new();
        for part in parts.iter().map(|p| p.trim()).filter(|p| !p.is_empty()) {
            if !joined.is_empty() {
                if joined.ends_with(['?', '!', ':']) {
                    joined.push(' ');
                } else {
                    joined.push_str(&self.separator);
                }
            }
            joined.push_str(part);
        }
        joined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_title_strips_punctuation() {
        assert_eq!(
            clean_title("\"Hello,\" she said - (it's $5.00!?)"),
            "Hello she said  its 500"
        );
        assert_eq!(clean_title("Plain Title"), "Plain Title");
    }

    #[test]
    fn test_join_with_separator() {
        let joiner = SeparatorJoiner::default();
        assert_eq!(
            joiner.join_title_parts(&["Moby Dick", "The Whale"]),
            "Moby Dick: The Whale"
        );
    }

    #[test]
    fn test_join_after_terminal_punctuation() {
        let joiner = SeparatorJoiner::default();
        assert_eq!(
            joiner.join_title_parts(&["Why Read?", "An Essay"]),
            "Why Read? An Essay"
        );
    }

    #[test]
    fn test_join_skips_empty_parts() {
        let joiner = SeparatorJoiner::new(" - ");
        assert_eq!(joiner.join_title_parts(&["", "Only", " "]), "Only");
    }
}
