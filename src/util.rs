//! Small text helpers shared by the parser and the converters.
//!
//! They are public because custom converters usually need the same splitting and joining
//! the built-in `Vec<T>` converter uses.

use std::fmt::{Display, Write};

/// Whitespace characters removed by [`trim`].
pub const WHITESPACE: &[char] = &[' ', '\t', '\n', '\r', '\x0c', '\x0b'];

/// Removes leading and trailing whitespace (space, tab, newline, carriage return,
/// form feed, vertical tab).
///
/// # Examples
///
/// ```rust
/// assert_eq!(inifile::trim("  \tHello World\n "), "Hello World");
/// assert_eq!(inifile::trim(" \r\n "), "");
/// ```
#[inline]
#[must_use]
pub fn trim(s: &str) -> &str {
    s.trim_matches(WHITESPACE)
}

/// Splits `text` on every `delimiter`, keeping empty pieces.
///
/// An empty input yields a single empty piece.
///
/// # Examples
///
/// ```rust
/// assert_eq!(inifile::split("a,,b", ','), vec!["a", "", "b"]);
/// assert_eq!(inifile::split("", ','), vec![""]);
/// ```
#[must_use]
pub fn split(text: &str, delimiter: char) -> Vec<String> {
    text.split(delimiter).map(str::to_string).collect()
}

/// Splits `text` on every `delimiter`, dropping empty pieces.
///
/// ```rust
/// assert_eq!(inifile::split_skip_empty(",abc,def,", ','), vec!["abc", "def"]);
/// ```
#[must_use]
pub fn split_skip_empty(text: &str, delimiter: char) -> Vec<String> {
    text.split(delimiter)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Splits `text` on a multi-character delimiter. An empty delimiter returns the whole text.
///
/// ```rust
/// assert_eq!(
///     inifile::split_str("C:\\Users\\Admin", "\\"),
///     vec!["C:", "Users", "Admin"]
/// );
/// ```
#[must_use]
pub fn split_str(text: &str, delimiter: &str) -> Vec<String> {
    if delimiter.is_empty() {
        return vec![text.to_string()];
    }
    text.split(delimiter).map(str::to_string).collect()
}

/// Joins the display form of every item with `separator`.
///
/// ```rust
/// assert_eq!(inifile::join([1, 2, 3], " + "), "1 + 2 + 3");
/// assert_eq!(inifile::join(["apple", "banana"], ','), "apple,banana");
/// ```
pub fn join<I, S>(items: I, separator: S) -> String
where
    I: IntoIterator,
    I::Item: Display,
    S: Display,
{
    let mut out = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            let _ = write!(out, "{}", separator);
        }
        let _ = write!(out, "{}", item);
    }
    out
}
