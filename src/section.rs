//! A named group of fields.
//!
//! Keys are trimmed on every operation, so `" port "` and `"port"` name the same field.
//! Whether `"Port"` and `"port"` do as well depends on the section's [`KeyPolicy`].
//!
//! ```rust
//! use inifile::Section;
//!
//! let mut section = Section::new();
//! section.set("host", "localhost");
//! section.set(" port ", 3306);
//!
//! assert!(section.contains("port"));
//! assert_eq!(section.at("port").unwrap().get::<u16>().unwrap(), 3306);
//! assert_eq!(section.get_or("user", "root").as_str(), "root");
//! assert!(!section.contains("user"));
//! ```

use crate::comment::{impl_comment_accessors, Comment};
use crate::convert::ToIniValue;
use crate::error::{Error, Result};
use crate::field::Field;
use crate::map::{self, CaseInsensitive, CaseSensitive, KeyMap, KeyPolicy};
use crate::util::trim;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// Fields keyed by name, plus an optional comment.
///
/// Fields are kept in first-insertion order.
#[derive(Clone, Debug, Default)]
pub struct Section<P: KeyPolicy = CaseSensitive> {
    fields: KeyMap<Field, P>,
    comment: Option<Comment>,
}

/// A section whose keys ignore ASCII case.
pub type CaseInsensitiveSection = Section<CaseInsensitive>;

impl Section {
    /// Creates an empty case-sensitive section.
    ///
    /// Use [`Section::default`] for other key policies.
    #[must_use]
    pub fn new() -> Self {
        Section::default()
    }
}

impl<P: KeyPolicy> Section<P> {
    /// Returns the field for `key`, inserting an empty one when it is absent.
    ///
    /// Use [`Section::contains`] to test for existence without inserting.
    pub fn field_mut(&mut self, key: &str) -> &mut Field {
        self.fields.get_or_insert_with(trim(key), Field::new)
    }

    /// Stores the encoded form of `value` under `key`, keeping any existing comment.
    pub fn set<T: ToIniValue>(&mut self, key: &str, value: T) -> &mut Field {
        let field = self.field_mut(key);
        field.set(value);
        field
    }

    /// Replaces the field stored under `key` (value and comment) with `field`.
    pub fn insert(&mut self, key: &str, field: Field) -> Option<Field> {
        self.fields.insert(trim(key), field)
    }

    /// Returns `true` if `key` exists. Never inserts.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(trim(key))
    }

    /// Returns the field for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] when `key` does not exist.
    pub fn at(&self, key: &str) -> Result<&Field> {
        let key = trim(key);
        self.fields.get(key).ok_or_else(|| Error::key_not_found(key))
    }

    /// Mutable form of [`Section::at`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] when `key` does not exist.
    pub fn at_mut(&mut self, key: &str) -> Result<&mut Field> {
        let key = trim(key);
        self.fields.get_mut(key).ok_or_else(|| Error::key_not_found(key))
    }

    /// Returns the field for `key` if it exists.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Field> {
        self.fields.get(trim(key))
    }

    /// Returns a copy of the field for `key`, or a field holding `default`.
    ///
    /// Never inserts and never fails.
    #[must_use]
    pub fn get_or<T: ToIniValue>(&self, key: &str, default: T) -> Field {
        self.get(key)
            .cloned()
            .unwrap_or_else(|| Field::with_value(default))
    }

    /// Returns a copy of the field for `key`, or an empty field.
    #[must_use]
    pub fn get_or_default(&self, key: &str) -> Field {
        self.get(key).cloned().unwrap_or_default()
    }

    /// Deletes `key`. Returns `true` if something was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        self.fields.remove(trim(key)).is_some()
    }

    /// Deletes `key` and returns its field.
    pub fn take(&mut self, key: &str) -> Option<Field> {
        self.fields.remove(trim(key))
    }

    /// Keeps only the fields for which `keep` returns `true`.
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&str, &mut Field) -> bool,
    {
        self.fields.retain(keep);
    }

    /// Removes every field. The section comment is kept.
    pub fn clear(&mut self) {
        self.fields.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Snapshot of the keys.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.fields.keys().map(str::to_string).collect()
    }

    /// Snapshot of the fields.
    #[must_use]
    pub fn values(&self) -> Vec<Field> {
        self.fields.values().cloned().collect()
    }

    /// Snapshot of the key/field pairs.
    #[must_use]
    pub fn items(&self) -> Vec<(String, Field)> {
        self.fields
            .iter()
            .map(|(k, f)| (k.to_string(), f.clone()))
            .collect()
    }

    /// Iterates over key/field pairs without copying.
    pub fn iter(&self) -> map::Iter<'_, Field, P> {
        self.fields.iter()
    }

    pub fn iter_mut(&mut self) -> map::IterMut<'_, Field, P> {
        self.fields.iter_mut()
    }
}

impl_comment_accessors!(Section<P: KeyPolicy>);

impl<P: KeyPolicy> PartialEq for Section<P> {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields && self.comment_lines() == other.comment_lines()
    }
}

impl<P: KeyPolicy> Eq for Section<P> {}

impl<'a, P: KeyPolicy> IntoIterator for &'a Section<P> {
    type Item = (&'a str, &'a Field);
    type IntoIter = map::Iter<'a, Field, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl<K: AsRef<str>, P: KeyPolicy> Extend<(K, Field)> for Section<P> {
    fn extend<I: IntoIterator<Item = (K, Field)>>(&mut self, iter: I) {
        for (key, field) in iter {
            self.insert(key.as_ref(), field);
        }
    }
}

impl<K: AsRef<str>, P: KeyPolicy> FromIterator<(K, Field)> for Section<P> {
    fn from_iter<I: IntoIterator<Item = (K, Field)>>(iter: I) -> Self {
        let mut section = Section::default();
        section.extend(iter);
        section
    }
}

impl<P: KeyPolicy> Serialize for Section<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, field) in self {
            map.serialize_entry(key, field)?;
        }
        map.end()
    }
}

struct SectionVisitor<P>(PhantomData<P>);

impl<'de, P: KeyPolicy> Visitor<'de> for SectionVisitor<P> {
    type Value = Section<P>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of keys to string values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Self::Value, A::Error> {
        let mut section = Section::default();
        while let Some((key, field)) = access.next_entry::<String, Field>()? {
            section.insert(&key, field);
        }
        Ok(section)
    }
}

impl<'de, P: KeyPolicy> Deserialize<'de> for Section<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(SectionVisitor(PhantomData))
    }
}
