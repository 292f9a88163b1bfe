//! Formatting options for comments and serialized output.
//!
//! - [`CommentMarker`]: which character prefixes comment lines (`;` or `#`)
//! - [`LineEnding`]: `\n` or `\r\n`
//! - [`WriteOptions`]: main configuration struct for [`IniFile::write_with_options`](crate::IniFile::write_with_options)
//!
//! The defaults reproduce the canonical layout: `key=value`, `\n` line endings, and one
//! blank line between sections.
//!
//! ## Examples
//!
//! ```rust
//! use inifile::{IniFile, LineEnding, WriteOptions};
//!
//! let mut ini = IniFile::new();
//! ini.set("server", "port", 8080);
//!
//! let options = WriteOptions::new()
//!     .with_spaced_delimiter(true)
//!     .with_line_ending(LineEnding::CrLf);
//! assert_eq!(ini.to_string_with_options(&options), "[server]\r\nport = 8080\r\n");
//! ```

/// Marker character placed in front of comment lines.
///
/// Conversion from `char` is lenient: `'#'` selects [`CommentMarker::Hash`], every other
/// character degrades to [`CommentMarker::Semicolon`].
///
/// # Examples
///
/// ```rust
/// use inifile::CommentMarker;
///
/// assert_eq!(CommentMarker::from('#'), CommentMarker::Hash);
/// assert_eq!(CommentMarker::from('!'), CommentMarker::Semicolon);
/// assert_eq!(CommentMarker::Hash.as_char(), '#');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CommentMarker {
    #[default]
    Semicolon,
    Hash,
}

impl CommentMarker {
    /// Returns the marker character.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            CommentMarker::Semicolon => ';',
            CommentMarker::Hash => '#',
        }
    }

    /// Returns `true` if `line` starts with any recognised comment marker.
    #[inline]
    #[must_use]
    pub fn starts_comment(line: &str) -> bool {
        line.starts_with(';') || line.starts_with('#')
    }
}

impl From<char> for CommentMarker {
    fn from(c: char) -> Self {
        match c {
            '#' => CommentMarker::Hash,
            _ => CommentMarker::Semicolon,
        }
    }
}

/// Line terminator used when writing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// Returns the string representation of this line ending.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Configuration options for INI serialization.
///
/// # Examples
///
/// ```rust
/// use inifile::{LineEnding, WriteOptions};
///
/// let options = WriteOptions::new();
/// assert_eq!(options.line_ending, LineEnding::Lf);
/// assert!(!options.spaced_delimiter);
/// assert!(options.section_spacing);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriteOptions {
    pub line_ending: LineEnding,
    /// Write `key = value` instead of `key=value`.
    pub spaced_delimiter: bool,
    /// Emit a blank line before every section header that is not the first output.
    pub section_spacing: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        WriteOptions {
            line_ending: LineEnding::default(),
            spaced_delimiter: false,
            section_spacing: true,
        }
    }
}

impl WriteOptions {
    /// Creates default options (`key=value`, `\n`, blank line between sections).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the line terminator.
    #[must_use]
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Surrounds `=` with single spaces when enabled.
    ///
    /// The parser trims keys and values, so both layouts read back identically.
    #[must_use]
    pub fn with_spaced_delimiter(mut self, spaced: bool) -> Self {
        self.spaced_delimiter = spaced;
        self
    }

    /// Enables or disables the blank separator line between sections.
    #[must_use]
    pub fn with_section_spacing(mut self, spacing: bool) -> Self {
        self.section_spacing = spacing;
        self
    }

    pub(crate) fn delimiter(&self) -> &'static str {
        if self.spaced_delimiter {
            " = "
        } else {
            "="
        }
    }
}
