use std::collections::BTreeSet;

/// A finite set of string tokens.
pub type StringSet = BTreeSet<String>;

/// Returns `true` for characters that separate set elements.
fn is_separator(ch: char) -> bool {
    ch == ',' || ch.is_whitespace()
}

/// Splits raw text into set elements.
///
/// Elements are separated by commas and/or whitespace. A run enclosed in
/// double or single quotes is one element, with the quotes removed and any
/// separators inside kept. Empty elements are discarded, and an unterminated
/// quote runs to the end of the input.
///
/// # Example
/// ```
/// use mathkit::set::tokenize;
///
/// assert_eq!(tokenize("1, 2 3,,4"), vec!["1", "2", "3", "4"]);
/// assert_eq!(tokenize(r#""New York", 'a b', x"#), vec!["New York", "a b", "x"]);
/// assert_eq!(tokenize(r#" "" , "#), Vec::<String>::new());
/// ```
#[must_use]
pub fn tokenize(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&ch) = chars.peek() {
        if is_separator(ch) {
            chars.next();
            continue;
        }

        let mut token = String::new();
        if ch == '"' || ch == '\'' {
            chars.next();
            for inner in chars.by_ref() {
                if inner == ch {
                    break;
                }
                token.push(inner);
            }
        } else {
            while let Some(&inner) = chars.peek() {
                if is_separator(inner) {
                    break;
                }
                token.push(inner);
                chars.next();
            }
        }

        if !token.is_empty() {
            tokens.push(token);
        }
    }

    tokens
}

/// Parses raw text into a set; duplicate elements collapse.
///
/// Elements are compared as raw strings, so `5` and `05` are different.
///
/// # Example
/// ```
/// use mathkit::set::parse_set;
///
/// let set = parse_set("3 1 2 1");
/// assert_eq!(set.len(), 3);
/// assert!(set.contains("1"));
/// ```
#[must_use]
pub fn parse_set(input: &str) -> StringSet {
    tokenize(input).into_iter().collect()
}
