//! INI serialization.
//!
//! This module provides the [`Serializer`] that turns an [`IniFile`] back into text.
//!
//! ## Layout
//!
//! - Fields of the unnamed section (`""`) come first, with no header
//! - Every other section follows in insertion order: an optional blank separator line,
//!   its comment lines, the `[name]` header, then its fields
//! - Each field is written as its comment lines followed by `key=value`
//!
//! Comment lines are written exactly as stored. The comment of the unnamed section is not
//! written, because without a header it would read back as the first key's comment.
//!
//! ```rust
//! use inifile::{IniFile, Serializer, WriteOptions};
//!
//! let mut ini = IniFile::new();
//! ini.set("", "version", 2);
//! ini.set("db", "host", "localhost").set_comment("database host");
//! ini.section_mut("db").set_comment_with("database settings", '#');
//!
//! let mut serializer = Serializer::new(WriteOptions::default());
//! serializer.serialize(&ini);
//! assert_eq!(
//!     serializer.into_inner(),
//!     "version=2\n\n# database settings\n[db]\n; database host\nhost=localhost\n"
//! );
//! ```

use crate::document::IniFile;
use crate::field::Field;
use crate::map::KeyPolicy;
use crate::options::WriteOptions;
use crate::section::Section;

/// Writes INI documents into an in-memory buffer.
pub struct Serializer {
    output: String,
    options: WriteOptions,
}

impl Serializer {
    pub fn new(options: WriteOptions) -> Self {
        Serializer {
            output: String::with_capacity(256),
            options,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Appends the whole document.
    pub fn serialize<P: KeyPolicy>(&mut self, doc: &IniFile<P>) {
        if let Some(global) = doc.get_section("") {
            self.write_fields(global);
        }

        for (name, section) in doc.iter() {
            if name.is_empty() {
                continue;
            }
            if self.options.section_spacing && !self.output.is_empty() {
                self.write_line("");
            }
            self.write_comment(section.comment_lines());
            self.write_header(name);
            self.write_fields(section);
        }
    }

    fn write_header(&mut self, name: &str) {
        self.output.push('[');
        self.output.push_str(name);
        self.output.push(']');
        self.output.push_str(self.options.line_ending.as_str());
    }

    fn write_fields<P: KeyPolicy>(&mut self, section: &Section<P>) {
        for (key, field) in section {
            self.write_field(key, field);
        }
    }

    fn write_field(&mut self, key: &str, field: &Field) {
        self.write_comment(field.comment_lines());
        self.output.push_str(key);
        self.output.push_str(self.options.delimiter());
        self.output.push_str(field.as_str());
        self.output.push_str(self.options.line_ending.as_str());
    }

    fn write_comment(&mut self, lines: &[String]) {
        for line in lines {
            self.write_line(line);
        }
    }

    #[inline]
    fn write_line(&mut self, line: &str) {
        self.output.push_str(line);
        self.output.push_str(self.options.line_ending.as_str());
    }
}
