//! Conversions between typed values and the text stored in a [`Field`](crate::Field).
//!
//! INI has exactly one native representation, a line of text. Every other type goes
//! through a pair of traits:
//!
//! - [`ToIniValue`]: encode a value as text (used by `Field::set`)
//! - [`FromIniValue`]: decode text into a value (used by `Field::get`)
//!
//! The implementation is picked by the type system at compile time; nothing is looked up
//! at runtime.
//!
//! ## Built-in Conversions
//!
//! | Type | Encode | Decode |
//! |------|--------|--------|
//! | `bool` | `true` / `false` | `""`, `"0"`, `"false"` (any case) are false, everything else true |
//! | `char` | one-character string | first character; empty text is an error |
//! | `String`, `&str` | identity | identity |
//! | integers | decimal | whole-string parse with range checking |
//! | `f32`, `f64` | round-trip exact, `inf`/`-inf`/`nan` | whole-string parse, `inf`/`nan` tokens, range checking |
//! | `Vec<T>` | elements joined with `,` | split on `,`, each element trimmed and decoded |
//! | `Option<T>` | `None` is empty text | empty text is `None` |
//! | `PathBuf` | path text | path text |
//! | `DateTime<Utc>` | RFC 3339 | RFC 3339 |
//! | `BigInt` | decimal | decimal |
//!
//! ## Custom Types
//!
//! Implement both traits for your own type:
//!
//! ```rust
//! use inifile::{Error, FromIniValue, IniFile, Result, ToIniValue};
//!
//! #[derive(Debug, PartialEq)]
//! struct Person {
//!     id: u32,
//!     name: String,
//! }
//!
//! impl ToIniValue for Person {
//!     fn to_ini_value(&self) -> String {
//!         format!("{},{}", self.id, self.name)
//!     }
//! }
//!
//! impl FromIniValue for Person {
//!     fn from_ini_value(text: &str) -> Result<Self> {
//!         let (id, name) = text
//!             .split_once(',')
//!             .ok_or_else(|| Error::custom("expected id,name"))?;
//!         Ok(Person {
//!             id: u32::from_ini_value(id)?,
//!             name: name.to_string(),
//!         })
//!     }
//! }
//!
//! let mut ini = IniFile::new();
//! ini.set("people", "admin", Person { id: 1, name: "abin".into() });
//! assert_eq!(ini.to_string(), "[people]\nadmin=1,abin\n");
//!
//! let admin: Person = ini.at("people")?.at("admin")?.get()?;
//! assert_eq!(admin, Person { id: 1, name: "abin".into() });
//! # Ok::<(), Error>(())
//! ```

use crate::error::{Error, Result};
use crate::util;
use chrono::{DateTime, Utc};
use num_bigint::BigInt;
use std::num::IntErrorKind;
use std::path::{Path, PathBuf};

/// Encodes a value as the text stored in a field.
pub trait ToIniValue {
    fn to_ini_value(&self) -> String;
}

/// Decodes the text stored in a field.
pub trait FromIniValue: Sized {
    /// # Errors
    ///
    /// Returns [`Error::Decode`] when the text is not a valid `Self`, or
    /// [`Error::OutOfRange`] when it is numeric but does not fit.
    fn from_ini_value(text: &str) -> Result<Self>;
}

impl<T: ToIniValue + ?Sized> ToIniValue for &T {
    #[inline]
    fn to_ini_value(&self) -> String {
        (**self).to_ini_value()
    }
}

impl<T: ToIniValue + ?Sized> ToIniValue for &mut T {
    #[inline]
    fn to_ini_value(&self) -> String {
        (**self).to_ini_value()
    }
}

impl ToIniValue for bool {
    fn to_ini_value(&self) -> String {
        String::from(if *self { "true" } else { "false" })
    }
}

impl FromIniValue for bool {
    fn from_ini_value(text: &str) -> Result<Self> {
        Ok(!(text.is_empty() || text == "0" || text.eq_ignore_ascii_case("false")))
    }
}

impl ToIniValue for char {
    fn to_ini_value(&self) -> String {
        self.to_string()
    }
}

impl FromIniValue for char {
    fn from_ini_value(text: &str) -> Result<Self> {
        text.chars()
            .next()
            .ok_or_else(|| Error::decode("char", text, "cannot take a character from empty text"))
    }
}

impl ToIniValue for str {
    fn to_ini_value(&self) -> String {
        self.to_string()
    }
}

impl ToIniValue for String {
    fn to_ini_value(&self) -> String {
        self.clone()
    }
}

impl FromIniValue for String {
    fn from_ini_value(text: &str) -> Result<Self> {
        Ok(text.to_string())
    }
}

macro_rules! impl_signed {
    ($($t:ty),*) => {$(
        impl ToIniValue for $t {
            fn to_ini_value(&self) -> String {
                self.to_string()
            }
        }

        impl FromIniValue for $t {
            fn from_ini_value(text: &str) -> Result<Self> {
                text.parse::<$t>().map_err(|e| match e.kind() {
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                        Error::out_of_range(stringify!($t), text)
                    }
                    _ => Error::decode(stringify!($t), text, e),
                })
            }
        }
    )*};
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {$(
        impl ToIniValue for $t {
            fn to_ini_value(&self) -> String {
                self.to_string()
            }
        }

        impl FromIniValue for $t {
            fn from_ini_value(text: &str) -> Result<Self> {
                text.parse::<$t>().map_err(|e| match e.kind() {
                    IntErrorKind::PosOverflow => Error::out_of_range(stringify!($t), text),
                    _ if is_negative_integer(text) => Error::out_of_range(stringify!($t), text),
                    _ => Error::decode(stringify!($t), text, e),
                })
            }
        }
    )*};
}

impl_signed!(i8, i16, i32, i64, i128, isize);
impl_unsigned!(u8, u16, u32, u64, u128, usize);

/// `-` followed by at least one digit, and nothing else.
fn is_negative_integer(text: &str) -> bool {
    text.strip_prefix('-')
        .map_or(false, |digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

macro_rules! impl_float {
    ($($t:ident),*) => {$(
        impl ToIniValue for $t {
            fn to_ini_value(&self) -> String {
                if self.is_nan() {
                    "nan".to_string()
                } else if self.is_infinite() {
                    String::from(if *self > 0.0 { "inf" } else { "-inf" })
                } else {
                    // Debug prints the shortest text that parses back to the same bits,
                    // switching to exponent form for very large or small magnitudes.
                    format!("{:?}", self)
                }
            }
        }

        impl FromIniValue for $t {
            fn from_ini_value(text: &str) -> Result<Self> {
                let (negative, body) = match text.as_bytes().first() {
                    Some(b'-') => (true, &text[1..]),
                    Some(b'+') => (false, &text[1..]),
                    _ => (false, text),
                };
                if body.eq_ignore_ascii_case("inf") || body.eq_ignore_ascii_case("infinity") {
                    return Ok(if negative { $t::NEG_INFINITY } else { $t::INFINITY });
                }
                if body.eq_ignore_ascii_case("nan") {
                    return Ok(if negative { -$t::NAN } else { $t::NAN });
                }

                let value = text
                    .parse::<$t>()
                    .map_err(|e| Error::decode(stringify!($t), text, e))?;
                if value.is_infinite() {
                    return Err(Error::out_of_range(stringify!($t), text));
                }
                Ok(value)
            }
        }
    )*};
}

impl_float!(f32, f64);

impl<T: ToIniValue> ToIniValue for [T] {
    fn to_ini_value(&self) -> String {
        util::join(self.iter().map(ToIniValue::to_ini_value), ',')
    }
}

impl<T: ToIniValue> ToIniValue for Vec<T> {
    fn to_ini_value(&self) -> String {
        self.as_slice().to_ini_value()
    }
}

impl<T: FromIniValue> FromIniValue for Vec<T> {
    fn from_ini_value(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Ok(Vec::new());
        }
        text.split(',')
            .map(|item| T::from_ini_value(util::trim(item)))
            .collect()
    }
}

impl<T: ToIniValue> ToIniValue for Option<T> {
    fn to_ini_value(&self) -> String {
        self.as_ref().map(ToIniValue::to_ini_value).unwrap_or_default()
    }
}

impl<T: FromIniValue> FromIniValue for Option<T> {
    fn from_ini_value(text: &str) -> Result<Self> {
        if text.is_empty() {
            Ok(None)
        } else {
            T::from_ini_value(text).map(Some)
        }
    }
}

impl ToIniValue for Path {
    fn to_ini_value(&self) -> String {
        self.to_string_lossy().into_owned()
    }
}

impl ToIniValue for PathBuf {
    fn to_ini_value(&self) -> String {
        self.as_path().to_ini_value()
    }
}

impl FromIniValue for PathBuf {
    fn from_ini_value(text: &str) -> Result<Self> {
        Ok(PathBuf::from(text))
    }
}

impl ToIniValue for DateTime<Utc> {
    fn to_ini_value(&self) -> String {
        self.to_rfc3339()
    }
}

impl FromIniValue for DateTime<Utc> {
    fn from_ini_value(text: &str) -> Result<Self> {
        DateTime::parse_from_rfc3339(text)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| Error::decode("DateTime<Utc>", text, e))
    }
}

impl ToIniValue for BigInt {
    fn to_ini_value(&self) -> String {
        self.to_string()
    }
}

impl FromIniValue for BigInt {
    fn from_ini_value(text: &str) -> Result<Self> {
        text.parse::<BigInt>()
            .map_err(|e| Error::decode("BigInt", text, e))
    }
}
