//! Comments attached to sections and fields.
//!
//! A [`Comment`] is an ordered list of lines that are already formatted: each one starts
//! with a marker (`;` or `#`). Input text is split on line breaks, every line is trimmed,
//! blank lines are dropped, and the marker plus a single space is prepended unless the line
//! already begins with that marker.
//!
//! ```rust
//! use inifile::Comment;
//!
//! let mut comment = Comment::new();
//! comment.add("first line\n\n  second line  ");
//! comment.add_with_marker("# already marked", '#');
//!
//! assert_eq!(comment.view(), ["; first line", "; second line", "# already marked"]);
//! ```
//!
//! Sections and fields store their comment as `Option<Comment>` and only allocate one when
//! a line is actually added.

use crate::options::CommentMarker;
use crate::util;

/// Ordered, pre-formatted comment lines.
///
/// Two comments are equal when their formatted lines are equal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Comment {
    lines: Vec<String>,
}

impl Comment {
    /// Creates an empty comment.
    #[must_use]
    pub fn new() -> Self {
        Comment { lines: Vec::new() }
    }

    /// Builds a comment from `text` formatted with `marker`.
    ///
    /// ```rust
    /// use inifile::Comment;
    ///
    /// let comment = Comment::from_text("a\nb", '#');
    /// assert_eq!(comment.view(), ["# a", "# b"]);
    /// ```
    #[must_use]
    pub fn from_text(text: &str, marker: impl Into<CommentMarker>) -> Self {
        let mut comment = Comment::new();
        comment.add_with_marker(text, marker);
        comment
    }

    /// Appends `text` using the default `;` marker.
    pub fn add(&mut self, text: &str) {
        self.add_with_marker(text, CommentMarker::Semicolon);
    }

    /// Appends `text` using `marker`. Characters other than `#` fall back to `;`.
    pub fn add_with_marker(&mut self, text: &str, marker: impl Into<CommentMarker>) {
        push_formatted(&mut self.lines, text, marker.into());
    }

    /// Appends every item of `lines` as if each had been passed to [`Comment::add_with_marker`].
    ///
    /// ```rust
    /// use inifile::Comment;
    ///
    /// let mut comment = Comment::new();
    /// comment.add_lines(["one", "two\nthree"], ';');
    /// assert_eq!(comment.len(), 3);
    /// ```
    pub fn add_lines<I, S>(&mut self, lines: I, marker: impl Into<CommentMarker>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let marker = marker.into();
        for text in lines {
            push_formatted(&mut self.lines, text.as_ref(), marker);
        }
    }

    /// Replaces the comment with `text` using the default `;` marker.
    pub fn set(&mut self, text: &str) {
        self.set_with_marker(text, CommentMarker::Semicolon);
    }

    /// Replaces the comment with `text` using `marker`.
    ///
    /// Blank `text` leaves the comment empty.
    pub fn set_with_marker(&mut self, text: &str, marker: impl Into<CommentMarker>) {
        self.lines.clear();
        push_formatted(&mut self.lines, text, marker.into());
    }

    /// Removes every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Borrows the formatted lines.
    #[must_use]
    pub fn view(&self) -> &[String] {
        &self.lines
    }

    /// Returns an owned copy of the formatted lines.
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.lines.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.lines.iter()
    }

    /// Appends a line exactly as read from a document.
    pub(crate) fn push_raw(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

impl<'a> IntoIterator for &'a Comment {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

fn push_formatted(lines: &mut Vec<String>, text: &str, marker: CommentMarker) {
    let marker = marker.as_char();
    for line in text.lines() {
        let line = util::trim(line);
        if line.is_empty() {
            continue;
        }
        if line.starts_with(marker) {
            lines.push(line.to_string());
        } else {
            lines.push(format!("{} {}", marker, line));
        }
    }
}

/// Generates the comment accessors shared by [`Field`](crate::Field) and
/// [`Section`](crate::Section). The target struct must have a `comment: Option<Comment>` field.
macro_rules! impl_comment_accessors {
    ($ty:ident $(<$p:ident: $bound:path>)?) => {
        impl$(<$p: $bound>)? $ty$(<$p>)? {
            /// Returns the attached comment, or `None` when there is none.
            #[must_use]
            pub fn comment(&self) -> Option<&$crate::Comment> {
                self.comment.as_ref().filter(|c| !c.is_empty())
            }

            /// Returns the attached comment, creating an empty one if needed.
            pub fn comment_mut(&mut self) -> &mut $crate::Comment {
                self.comment.get_or_insert_with($crate::Comment::new)
            }

            /// Returns `true` if at least one comment line is attached.
            #[must_use]
            pub fn has_comment(&self) -> bool {
                self.comment().is_some()
            }

            /// Replaces the comment with `text` using the `;` marker.
            pub fn set_comment(&mut self, text: &str) {
                self.set_comment_with(text, $crate::CommentMarker::Semicolon);
            }

            /// Replaces the comment with `text` using `marker`. Blank text removes the comment.
            pub fn set_comment_with(&mut self, text: &str, marker: impl Into<$crate::CommentMarker>) {
                let comment = $crate::Comment::from_text(text, marker);
                self.comment = if comment.is_empty() { None } else { Some(comment) };
            }

            /// Appends `text` to the comment using the `;` marker.
            pub fn add_comment(&mut self, text: &str) {
                self.add_comment_with(text, $crate::CommentMarker::Semicolon);
            }

            /// Appends `text` to the comment using `marker`.
            pub fn add_comment_with(&mut self, text: &str, marker: impl Into<$crate::CommentMarker>) {
                let comment = self.comment.get_or_insert_with($crate::Comment::new);
                comment.add_with_marker(text, marker);
                if comment.is_empty() {
                    self.comment = None;
                }
            }

            /// Removes the comment entirely.
            pub fn clear_comment(&mut self) {
                self.comment = None;
            }

            /// Attaches an already formatted comment, replacing any previous one.
            pub(crate) fn attach_comment(&mut self, comment: $crate::Comment) {
                self.comment = if comment.is_empty() { None } else { Some(comment) };
            }

            pub(crate) fn comment_lines(&self) -> &[String] {
                self.comment.as_ref().map_or(&[][..], $crate::Comment::view)
            }
        }
    };
}

pub(crate) use impl_comment_accessors;
