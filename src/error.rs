//! Error types for INI documents.
//!
//! Parsing itself never fails on malformed lines; they are skipped. Errors come from
//! lookups, conversions and I/O instead:
//!
//! ## Error Categories
//!
//! - **Not found**: strict lookups ([`IniFile::at`](crate::IniFile::at),
//!   [`Section::at`](crate::Section::at)) on a missing section or key
//! - **Decode**: the stored text cannot be read as the requested type
//!   (empty text as a number, `"abc"` as an integer, ...)
//! - **Out of range**: the text is numeric but does not fit the requested type
//! - **I/O**: a file could not be opened, or a stream failed mid-way
//!
//! ## Examples
//!
//! ```rust
//! use inifile::{Error, IniFile};
//!
//! let ini: IniFile = "[server]\nport=99999999999".parse().unwrap();
//! let port = ini.at("server").unwrap().at("port").unwrap();
//!
//! let err = port.get::<u16>().unwrap_err();
//! assert!(err.is_out_of_range());
//! eprintln!("config error: {}", err);
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Strict section lookup on a section that does not exist
    #[error("section not found: {0:?}")]
    SectionNotFound(String),

    /// Strict key lookup on a key that does not exist
    #[error("key not found: {0:?}")]
    KeyNotFound(String),

    /// The stored text cannot be interpreted as the requested type
    #[error("cannot decode {value:?} as {ty}: {msg}")]
    Decode {
        ty: &'static str,
        value: String,
        msg: String,
    },

    /// The stored text is numeric but outside the range of the requested type
    #[error("value {value:?} is out of range for {ty}")]
    OutOfRange { ty: &'static str, value: String },

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Error raised by a user-defined converter
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates a not-found error for a missing section.
    pub fn section_not_found(name: &str) -> Self {
        Error::SectionNotFound(name.to_string())
    }

    /// Creates a not-found error for a missing key.
    pub fn key_not_found(key: &str) -> Self {
        Error::KeyNotFound(key.to_string())
    }

    /// Creates a decode error for text that cannot be read as `ty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inifile::Error;
    ///
    /// let err = Error::decode("i32", "abc", "invalid digit found in string");
    /// assert!(err.to_string().contains("as i32"));
    /// assert!(err.is_decode());
    /// ```
    pub fn decode<M: fmt::Display>(ty: &'static str, value: &str, msg: M) -> Self {
        Error::Decode {
            ty,
            value: value.to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates a range error for numeric text that does not fit `ty`.
    pub fn out_of_range(ty: &'static str, value: &str) -> Self {
        Error::OutOfRange {
            ty,
            value: value.to_string(),
        }
    }

    /// Creates a custom error, typically from a user converter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inifile::Error;
    ///
    /// let err = Error::custom("expected id,age,name");
    /// assert_eq!(err.to_string(), "expected id,age,name");
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for file or stream failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns `true` for missing section or key errors.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::SectionNotFound(_) | Error::KeyNotFound(_))
    }

    /// Returns `true` for decode (format) errors.
    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode { .. })
    }

    /// Returns `true` for numeric range errors.
    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Error::OutOfRange { .. })
    }

    /// Returns `true` for I/O errors.
    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates() {
        assert!(Error::section_not_found("s").is_not_found());
        assert!(Error::key_not_found("k").is_not_found());
        assert!(Error::decode("i32", "", "empty").is_decode());
        assert!(Error::out_of_range("u8", "300").is_out_of_range());
        assert!(Error::io("denied").is_io());
        assert!(!Error::custom("x").is_decode());
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.ini");
        let err: Error = io.into();
        assert!(err.is_io());
        assert!(err.to_string().contains("missing.ini"));
    }

    #[test]
    fn test_display() {
        let err = Error::out_of_range("i32", "99999999999999999999");
        assert_eq!(
            err.to_string(),
            "value \"99999999999999999999\" is out of range for i32"
        );
        assert_eq!(
            Error::section_not_found("db").to_string(),
            "section not found: \"db\""
        );
    }
}
