//! A single value stored under a key.
//!
//! The text is the only thing a [`Field`] stores. Typed reads decode it on every call
//! and typed writes encode immediately, so there is no cached typed copy to go stale.
//!
//! ```rust
//! use inifile::Field;
//!
//! let mut field = Field::with_value(42);
//! assert_eq!(field.as_str(), "42");
//! assert_eq!(field.get::<i64>().unwrap(), 42);
//!
//! field.set(3.5);
//! assert_eq!(field.get::<f32>().unwrap(), 3.5);
//! assert!(field.get::<i32>().unwrap_err().is_decode());
//! ```

use crate::comment::{impl_comment_accessors, Comment};
use crate::convert::{FromIniValue, ToIniValue};
use crate::error::Result;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The text value for one key, plus an optional comment.
#[derive(Clone, Debug, Default)]
pub struct Field {
    value: String,
    comment: Option<Comment>,
}

impl Field {
    /// Creates a field holding empty text.
    #[must_use]
    pub fn new() -> Self {
        Field::default()
    }

    /// Creates a field holding the encoded form of `value`.
    #[must_use]
    pub fn with_value<T: ToIniValue>(value: T) -> Self {
        Field {
            value: value.to_ini_value(),
            comment: None,
        }
    }

    /// Encodes `value` and stores the result, replacing the previous text.
    ///
    /// The comment is left untouched.
    pub fn set<T: ToIniValue>(&mut self, value: T) -> &mut Self {
        self.value = value.to_ini_value();
        self
    }

    /// Decodes the stored text as `T`.
    ///
    /// # Errors
    ///
    /// Returns a decode or range error when the text is not a valid `T`.
    pub fn get<T: FromIniValue>(&self) -> Result<T> {
        T::from_ini_value(&self.value)
    }

    /// Decodes the stored text into `out` and hands it back for chaining.
    ///
    /// `out` is left unchanged on error.
    ///
    /// ```rust
    /// use inifile::Field;
    ///
    /// let field = Field::with_value("7");
    /// let mut port = 0u16;
    /// *field.get_into(&mut port).unwrap() += 1;
    /// assert_eq!(port, 8);
    /// ```
    ///
    /// # Errors
    ///
    /// Same as [`Field::get`].
    pub fn get_into<'a, T: FromIniValue>(&self, out: &'a mut T) -> Result<&'a mut T> {
        *out = self.get()?;
        Ok(out)
    }

    /// Decodes the stored text as `T`, falling back to `default` on any error.
    #[must_use]
    pub fn get_or<T: FromIniValue>(&self, default: T) -> T {
        self.get().unwrap_or(default)
    }

    /// Borrows the stored text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Consumes the field and returns the stored text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.value
    }

    /// Returns `true` if the stored text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl_comment_accessors!(Field);

impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.comment_lines() == other.comment_lines()
    }
}

impl Eq for Field {}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for Field {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        String::deserialize(deserializer).map(|value| Field {
            value,
            comment: None,
        })
    }
}
