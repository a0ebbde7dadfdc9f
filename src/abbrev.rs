// Label abbreviation.
//
// Short labels are what fits inside a node circle: initials for people and
// keyword terms, registry codes for categories, a truncated title for the
// center node. Full labels stay untouched for the tooltip.

use std::fmt;

/// Known category names and their display codes.
/// Lookup is exact; unknown categories fall back to first-letter codes.
pub const CATEGORY_REGISTRY: &[(&str, &str)] = &[
    ("Animal Studies", "AS"),
    ("Cross-Cutting Themes & Technologies", "CCT"),
    ("Human & Human Cell Studies", "HCS"),
    ("Microbial Studies", "MS"),
    ("Plant Studies", "PS"),
    ("Plant Biology", "PB"),
    ("Human Biology", "HB"),
    ("Microbiology", "MB"),
    ("Biotechnology", "BT"),
];

/// Words used for the fallback code of an unknown category with more than
/// two words.
pub const CODE_FALLBACK_WORDS: usize = 3;

/// Default maximum length of the center node's title label.
pub const TITLE_MAX_LEN: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidInput {
    pub msg: String,
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid input: {}", self.msg)
    }
}
impl std::error::Error for InvalidInput {}

fn invalid(msg: impl Into<String>) -> InvalidInput {
    InvalidInput { msg: msg.into() }
}

/// Initials for a person name or keyword term: one word gives its first
/// letter, two or more give first letter of first and last word, uppercased.
pub fn initials(name: &str) -> Result<String, InvalidInput> {
    let words: Vec<&str> = name.split_whitespace().collect();
    let (first, last) = match words.as_slice() {
        [] => return Err(invalid("empty or whitespace-only name")),
        [only] => (*only, None),
        [first, .., last] => (*first, Some(*last)),
    };

    let mut out = String::new();
    push_first_upper(&mut out, first);
    if let Some(last) = last {
        push_first_upper(&mut out, last);
    }
    Ok(out)
}

/// Short display code for a category. Registry hit wins; otherwise first
/// letters of each word (up to two words) or of the first
/// `CODE_FALLBACK_WORDS` words.
pub fn category_code(category: &str) -> Result<String, InvalidInput> {
    category_code_with(category, CODE_FALLBACK_WORDS)
}

pub fn category_code_with(category: &str, fallback_words: usize) -> Result<String, InvalidInput> {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        return Err(invalid("empty or whitespace-only category"));
    }
    if let Some(code) = registry_code(trimmed) {
        return Ok(code.to_string());
    }

    let words: Vec<&str> = trimmed.split_whitespace().collect();
    let take = if words.len() <= 2 {
        words.len()
    } else {
        fallback_words
    };

    let mut out = String::new();
    for word in words.iter().take(take) {
        push_first_upper(&mut out, word);
    }
    Ok(out)
}

/// Exact registry lookup.
pub fn registry_code(category: &str) -> Option<&'static str> {
    CATEGORY_REGISTRY
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, code)| *code)
}

/// Titles at or under `max_len` chars pass through; longer ones keep the
/// first `max_len - 3` chars plus an ellipsis.
pub fn truncate_title(title: &str, max_len: usize) -> String {
    let chars: Vec<char> = title.chars().collect();
    if chars.len() <= max_len {
        return title.to_string();
    }
    let mut out: String = chars[..max_len.saturating_sub(3)].iter().collect();
    out.push_str("...");
    out
}

fn push_first_upper(out: &mut String, word: &str) {
    if let Some(c) = word.chars().next() {
        out.extend(c.to_uppercase());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_two_words() {
        assert_eq!(initials("Elena Rodriguez").unwrap(), "ER");
    }

    #[test]
    fn test_initials_single_word() {
        assert_eq!(initials("Plato").unwrap(), "P");
    }

    #[test]
    fn test_initials_uses_first_and_last_word() {
        assert_eq!(initials("Jean Luc Picard").unwrap(), "JP");
        assert_eq!(initials("maria de la cruz").unwrap(), "MC");
    }

    #[test]
    fn test_initials_rejects_blank() {
        assert!(initials("").is_err());
        assert!(initials("   ").is_err());
    }

    #[test]
    fn test_category_registry_hit() {
        assert_eq!(category_code("Animal Studies").unwrap(), "AS");
        assert_eq!(
            category_code("Cross-Cutting Themes & Technologies").unwrap(),
            "CCT"
        );
        assert_eq!(category_code("Biotechnology").unwrap(), "BT");
    }

    #[test]
    fn test_category_fallback_two_words() {
        assert_eq!(category_code("Synthetic Biology").unwrap(), "SB");
    }

    #[test]
    fn test_category_fallback_long() {
        assert_eq!(
            category_code("Some Brand New Category Name").unwrap(),
            "SBN"
        );
    }

    #[test]
    fn test_category_fallback_word_budget_is_a_parameter() {
        assert_eq!(
            category_code_with("Some Brand New Category Name", 2).unwrap(),
            "SB"
        );
    }

    #[test]
    fn test_category_rejects_blank() {
        assert!(category_code("").is_err());
        assert!(category_code(" \t ").is_err());
    }

    #[test]
    fn test_truncate_passthrough() {
        assert_eq!(truncate_title("Short title", TITLE_MAX_LEN), "Short title");
        // Exactly at the limit stays whole.
        assert_eq!(
            truncate_title("123456789012345", TITLE_MAX_LEN),
            "123456789012345"
        );
    }

    #[test]
    fn test_truncate_long_title() {
        assert_eq!(
            truncate_title("A title longer than fifteen characters", TITLE_MAX_LEN),
            "A title long..."
        );
    }
}
