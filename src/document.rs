//! The INI document: named sections of fields.
//!
//! [`IniFile`] owns the sections, and [`read`](IniFile::read) and [`write`](IniFile::write)
//! move it to and from text. Section names follow the same rules as keys: they are trimmed,
//! compared according to the [`KeyPolicy`], and kept in first-insertion order. The section
//! named `""` holds keys that appear before the first header.
//!
//! ```rust
//! use inifile::IniFile;
//!
//! let mut ini = IniFile::new();
//! ini.set("network", "ip", "127.0.0.1");
//! ini.set("network", "port", 1024);
//!
//! let text = ini.to_string();
//! assert_eq!(text, "[network]\nip=127.0.0.1\nport=1024\n");
//!
//! let back: IniFile = text.parse()?;
//! assert_eq!(back.at("network")?.at("port")?.get::<u16>()?, 1024);
//! assert_eq!(back, ini);
//! # Ok::<(), inifile::Error>(())
//! ```

use crate::convert::ToIniValue;
use crate::de;
use crate::error::{Error, Result};
use crate::field::Field;
use crate::map::{self, CaseInsensitive, CaseSensitive, KeyMap, KeyPolicy};
use crate::options::WriteOptions;
use crate::section::Section;
use crate::ser::Serializer;
use crate::util::trim;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::marker::PhantomData;
use std::path::Path;
use std::str::FromStr;
use std::{fmt, result};

/// An INI document.
///
/// `P` selects how section names and keys are compared; see [`CaseInsensitiveIniFile`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IniFile<P: KeyPolicy = CaseSensitive> {
    sections: KeyMap<Section<P>, P>,
}

/// A document whose section names and keys ignore ASCII case.
///
/// The spelling used when an entry is first inserted is the one written out.
///
/// ```rust
/// use inifile::CaseInsensitiveIniFile;
///
/// let ini: CaseInsensitiveIniFile = "[Section]\nFlag=123\n".parse().unwrap();
/// assert!(ini.contains("SECTION"));
/// assert_eq!(ini.at("section").unwrap().at("FLAG").unwrap().get::<i32>().unwrap(), 123);
/// assert_eq!(ini.to_string(), "[Section]\nFlag=123\n");
/// ```
pub type CaseInsensitiveIniFile = IniFile<CaseInsensitive>;

impl IniFile {
    /// Creates an empty case-sensitive document.
    ///
    /// Use [`IniFile::default`] (or [`CaseInsensitiveIniFile::default`]) for other key policies.
    #[must_use]
    pub fn new() -> Self {
        IniFile::default()
    }
}

impl<P: KeyPolicy> IniFile<P> {
    /// Returns the section called `name`, inserting an empty one when it is absent.
    ///
    /// Use [`IniFile::contains`] to test for existence without inserting.
    pub fn section_mut(&mut self, name: &str) -> &mut Section<P> {
        self.sections.get_or_insert_with(trim(name), Section::default)
    }

    /// Returns the field `key` of section `name`, inserting either when absent.
    pub fn field_mut(&mut self, name: &str, key: &str) -> &mut Field {
        self.section_mut(name).field_mut(key)
    }

    /// Stores the encoded form of `value` at `[name] key`, creating what is missing.
    pub fn set<T: ToIniValue>(&mut self, name: &str, key: &str, value: T) -> &mut Field {
        self.section_mut(name).set(key, value)
    }

    /// Replaces the section called `name` (fields and comment) with `section`.
    pub fn insert_section(&mut self, name: &str, section: Section<P>) -> Option<Section<P>> {
        self.sections.insert(trim(name), section)
    }

    /// Returns `true` if section `name` exists. Never inserts.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.sections.contains_key(trim(name))
    }

    /// Returns `true` if section `name` exists and has `key`. Never inserts.
    #[must_use]
    pub fn contains_key(&self, name: &str, key: &str) -> bool {
        self.get_section(name).map_or(false, |s| s.contains(key))
    }

    /// Returns the section called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SectionNotFound`] when there is no such section.
    pub fn at(&self, name: &str) -> Result<&Section<P>> {
        let name = trim(name);
        self.sections
            .get(name)
            .ok_or_else(|| Error::section_not_found(name))
    }

    /// Mutable form of [`IniFile::at`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::SectionNotFound`] when there is no such section.
    pub fn at_mut(&mut self, name: &str) -> Result<&mut Section<P>> {
        let name = trim(name);
        self.sections
            .get_mut(name)
            .ok_or_else(|| Error::section_not_found(name))
    }

    /// Returns the section called `name` if it exists.
    #[must_use]
    pub fn get_section(&self, name: &str) -> Option<&Section<P>> {
        self.sections.get(trim(name))
    }

    /// Returns the field at `[name] key` if both exist.
    #[must_use]
    pub fn get(&self, name: &str, key: &str) -> Option<&Field> {
        self.get_section(name).and_then(|s| s.get(key))
    }

    /// Returns a copy of the field at `[name] key`, or a field holding `default`.
    ///
    /// Never inserts and never fails.
    ///
    /// ```rust
    /// use inifile::IniFile;
    ///
    /// let ini = IniFile::new();
    /// assert_eq!(ini.get_or("db", "port", 5432).get::<u16>().unwrap(), 5432);
    /// assert!(ini.get_or("db", "user", "default").get::<i32>().is_err());
    /// assert!(ini.is_empty());
    /// ```
    #[must_use]
    pub fn get_or<T: ToIniValue>(&self, name: &str, key: &str, default: T) -> Field {
        self.get(name, key)
            .cloned()
            .unwrap_or_else(|| Field::with_value(default))
    }

    /// Returns a copy of the field at `[name] key`, or an empty field.
    #[must_use]
    pub fn get_or_default(&self, name: &str, key: &str) -> Field {
        self.get(name, key).cloned().unwrap_or_default()
    }

    /// Deletes section `name`. Returns `true` if something was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        self.sections.remove(trim(name)).is_some()
    }

    /// Deletes section `name` and returns it.
    pub fn take_section(&mut self, name: &str) -> Option<Section<P>> {
        self.sections.remove(trim(name))
    }

    /// Keeps only the sections for which `keep` returns `true`.
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&str, &mut Section<P>) -> bool,
    {
        self.sections.retain(keep);
    }

    /// Removes every section.
    pub fn clear(&mut self) {
        self.sections.clear();
    }

    /// Number of sections, including the unnamed one if present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Snapshot of the section names.
    #[must_use]
    pub fn sections(&self) -> Vec<String> {
        self.sections.keys().map(str::to_string).collect()
    }

    /// Iterates over name/section pairs without copying.
    pub fn iter(&self) -> map::Iter<'_, Section<P>, P> {
        self.sections.iter()
    }

    pub fn iter_mut(&mut self) -> map::IterMut<'_, Section<P>, P> {
        self.sections.iter_mut()
    }

    /// Replaces the contents with the document read from `reader`.
    ///
    /// Malformed lines are skipped, never reported.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the reader fails before end of stream. Whatever was
    /// parsed up to that point stays in the document.
    pub fn read<R: io::BufRead>(&mut self, reader: R) -> Result<()> {
        de::read_into(reader, self)
    }

    /// Replaces the contents with the document parsed from `text`.
    pub fn read_str(&mut self, text: &str) {
        de::read_str_into(text, self);
    }

    /// Writes the document in the default layout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the writer fails.
    pub fn write<W: Write>(&self, writer: W) -> Result<()> {
        self.write_with_options(writer, &WriteOptions::default())
    }

    /// Writes the document using `options`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the writer fails.
    pub fn write_with_options<W: Write>(&self, mut writer: W, options: &WriteOptions) -> Result<()> {
        let text = self.to_string_with_options(options);
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Renders the document using `options`.
    #[must_use]
    pub fn to_string_with_options(&self, options: &WriteOptions) -> String {
        let mut serializer = Serializer::new(options.clone());
        serializer.serialize(self);
        serializer.into_inner()
    }

    /// Replaces the contents with the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be opened or read.
    pub fn load<Q: AsRef<Path>>(&mut self, path: Q) -> Result<()> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::io(&format!("{}: {}", path.display(), e)))?;
        self.read(BufReader::new(file))?;
        log::debug!("loaded {} section(s) from {}", self.len(), path.display());
        Ok(())
    }

    /// Writes the document to the file at `path`, replacing it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be created or written.
    pub fn save<Q: AsRef<Path>>(&self, path: Q) -> Result<()> {
        let path = path.as_ref();
        let file =
            File::create(path).map_err(|e| Error::io(&format!("{}: {}", path.display(), e)))?;
        self.write(BufWriter::new(file))?;
        log::debug!("saved {} section(s) to {}", self.len(), path.display());
        Ok(())
    }

    /// Reads a new document from the file at `path`.
    ///
    /// # Errors
    ///
    /// Same as [`IniFile::load`].
    pub fn from_file<Q: AsRef<Path>>(path: Q) -> Result<Self> {
        let mut ini = IniFile::default();
        ini.load(path)?;
        Ok(ini)
    }
}

impl<P: KeyPolicy> FromStr for IniFile<P> {
    type Err = Error;

    /// Parsing text cannot fail; the `Result` only satisfies `FromStr`.
    fn from_str(s: &str) -> Result<Self> {
        let mut ini = IniFile::default();
        ini.read_str(s);
        Ok(ini)
    }
}

impl<P: KeyPolicy> fmt::Display for IniFile<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with_options(&WriteOptions::default()))
    }
}

impl<'a, P: KeyPolicy> IntoIterator for &'a IniFile<P> {
    type Item = (&'a str, &'a Section<P>);
    type IntoIter = map::Iter<'a, Section<P>, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}

impl<K: AsRef<str>, P: KeyPolicy> Extend<(K, Section<P>)> for IniFile<P> {
    fn extend<I: IntoIterator<Item = (K, Section<P>)>>(&mut self, iter: I) {
        for (name, section) in iter {
            self.insert_section(name.as_ref(), section);
        }
    }
}

impl<K: AsRef<str>, P: KeyPolicy> FromIterator<(K, Section<P>)> for IniFile<P> {
    fn from_iter<I: IntoIterator<Item = (K, Section<P>)>>(iter: I) -> Self {
        let mut ini = IniFile::default();
        ini.extend(iter);
        ini
    }
}

impl<P: KeyPolicy> Serialize for IniFile<P> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, section) in self {
            map.serialize_entry(name, section)?;
        }
        map.end()
    }
}

struct IniFileVisitor<P>(PhantomData<P>);

impl<'de, P: KeyPolicy> Visitor<'de> for IniFileVisitor<P> {
    type Value = IniFile<P>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of section names to sections")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> result::Result<Self::Value, A::Error> {
        let mut ini = IniFile::default();
        while let Some((name, section)) = access.next_entry::<String, Section<P>>()? {
            ini.insert_section(&name, section);
        }
        Ok(ini)
    }
}

impl<'de, P: KeyPolicy> Deserialize<'de> for IniFile<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> result::Result<Self, D::Error> {
        deserializer.deserialize_map(IniFileVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visiting_creates_entries() {
        let mut ini = IniFile::new();
        ini.section_mut("only_section");
        ini.field_mut("section", "only_key");
        ini.field_mut("", "");
        assert_eq!(ini.sections(), vec!["only_section", "section", ""]);
        assert!(ini.contains_key("section", "only_key"));
        assert!(ini.contains_key("", ""));
    }

    #[test]
    fn test_contains_never_inserts() {
        let mut ini = IniFile::new();
        ini.set("section", "key", true);
        assert!(ini.contains("section"));
        assert!(!ini.contains("section_no"));
        assert!(ini.contains_key("section", "key"));
        assert!(!ini.contains_key("section_no", "key"));
        assert!(!ini.contains_key("section", "key_no"));
        assert_eq!(ini.len(), 1);
    }

    #[test]
    fn test_at_errors() {
        let mut ini = IniFile::new();
        ini.set("section", "key", 2.5);
        ini.section_mut("section01");

        assert_eq!(
            ini.at("section_no").unwrap_err(),
            Error::SectionNotFound("section_no".to_string())
        );
        assert!(ini.at("section").unwrap().at("key_no").unwrap_err().is_not_found());
        assert!(ini.at("section01").unwrap().is_empty());
        assert!(ini.at_mut("nope").is_err());
        assert_eq!(ini.at("section").unwrap().at("key").unwrap().as_str(), "2.5");
    }

    #[test]
    fn test_get_or_does_not_insert() {
        let ini = IniFile::new();
        let field = ini.get_or("section", "key_no", "default");
        assert!(field.get::<i32>().unwrap_err().is_decode());
        assert!(ini.get_or_default("section", "key_no").is_empty());
        assert!(ini.get("section", "key_no").is_none());
        assert!(ini.is_empty());
    }

    #[test]
    fn test_remove_and_take() {
        let mut ini = IniFile::new();
        ini.section_mut("a");
        ini.section_mut("b");
        ini.section_mut("c");
        assert!(ini.remove(" b "));
        assert!(!ini.remove("b"));
        assert!(ini.take_section("a").is_some());
        assert_eq!(ini.sections(), vec!["c"]);
    }

    #[test]
    fn test_retain_sections() {
        let mut ini = IniFile::new();
        ini.set("keep", "k", 1);
        ini.section_mut("drop");
        ini.retain(|_, section| !section.is_empty());
        assert_eq!(ini.sections(), vec!["keep"]);
    }

    #[test]
    fn test_set_section_comment_through_at_mut() {
        let mut ini = IniFile::new();
        ini.set("database", "host", "localhost");
        ini.at_mut("database").unwrap().set_comment_with("comment about database", '#');
        ini.at_mut("database")
            .unwrap()
            .at_mut("host")
            .unwrap()
            .set_comment("database host");
        assert_eq!(
            ini.to_string(),
            "# comment about database\n[database]\n; database host\nhost=localhost\n"
        );
    }

    #[test]
    fn test_write_to_buffer() {
        let mut ini = IniFile::new();
        ini.set("s", "k", 'c');
        let mut buf = Vec::new();
        ini.write(&mut buf).unwrap();
        assert_eq!(buf, b"[s]\nk=c\n");
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let mut ini = CaseInsensitiveIniFile::default();
        ini.set("Section", "KEY", "Value");
        assert!(ini.contains("section"));
        assert!(ini.contains("SECTION"));
        assert!(ini.contains_key("SeCtIoN", "key"));
        assert_eq!(ini.field_mut("SECTION", "Key").as_str(), "Value");
        assert_eq!(ini.len(), 1);
        assert_eq!(ini.sections(), vec!["Section"]);
    }

    #[test]
    fn test_serde_nested_maps() {
        let mut ini = IniFile::new();
        ini.set("", "x", 1);
        ini.set("db", "port", 5432).set_comment("not in json");
        let json = serde_json::to_value(&ini).unwrap();
        assert_eq!(json, serde_json::json!({ "": { "x": "1" }, "db": { "port": "5432" } }));

        let back: IniFile = serde_json::from_value(json).unwrap();
        assert_eq!(back.at("db").unwrap().at("port").unwrap().get::<u16>().unwrap(), 5432);
        assert!(!back.at("db").unwrap().at("port").unwrap().has_comment());
    }
}
