//! INI parsing.
//!
//! This module provides the line-oriented [`Parser`] behind
//! [`IniFile::read`](crate::IniFile::read) and friends.
//!
//! ## Overview
//!
//! Each line is trimmed and then classified:
//!
//! - **Blank**: ignored
//! - **Comment** (`;` or `#` first): kept verbatim in a pending buffer
//! - **Section header** (`[name]`): the trimmed name becomes the current section
//! - **Key/value** (`key=value`): split on the first `=`, both halves trimmed
//! - **Anything else**: skipped
//!
//! Pending comment lines attach to whichever section or field comes next. Key/value lines
//! that appear before any header belong to the section named `""`.
//!
//! Parsing never fails on bad lines; only the underlying reader can produce an error.
//!
//! ```rust
//! use inifile::IniFile;
//!
//! let ini: IniFile = "x=1\n; about s\n[s]\nk = v\nnot a pair\n".parse().unwrap();
//!
//! assert_eq!(ini.at("")?.at("x")?.get::<i32>()?, 1);
//! assert_eq!(ini.at("s")?.at("k")?.as_str(), "v");
//! assert_eq!(ini.at("s")?.comment().unwrap().view(), ["; about s"]);
//! # Ok::<(), inifile::Error>(())
//! ```

use crate::comment::Comment;
use crate::document::IniFile;
use crate::error::Result;
use crate::map::KeyPolicy;
use crate::options::CommentMarker;
use crate::util::trim;
use std::io::BufRead;

/// UTF-8 byte order mark, dropped from the start of the input.
const BOM: &str = "\u{feff}";

/// Feeds lines into an [`IniFile`], tracking the current section and pending comment.
///
/// The target document is cleared when the parser is created.
pub struct Parser<'a, P: KeyPolicy> {
    doc: &'a mut IniFile<P>,
    current_section: String,
    pending: Comment,
    line: usize,
}

impl<'a, P: KeyPolicy> Parser<'a, P> {
    pub fn new(doc: &'a mut IniFile<P>) -> Self {
        doc.clear();
        Parser {
            doc,
            current_section: String::new(),
            pending: Comment::new(),
            line: 0,
        }
    }

    /// Processes one line of input. The line may still carry its terminator.
    pub fn feed_line(&mut self, raw: &str) {
        self.line += 1;
        let raw = if self.line == 1 {
            raw.strip_prefix(BOM).unwrap_or(raw)
        } else {
            raw
        };

        let line = trim(raw);
        if line.is_empty() {
            return;
        }

        if CommentMarker::starts_comment(line) {
            self.pending.push_raw(line);
            return;
        }

        if line.len() >= 2 && line.starts_with('[') && line.ends_with(']') {
            self.parse_section_header(&line[1..line.len() - 1]);
            return;
        }

        match line.split_once('=') {
            Some((key, value)) => self.parse_key_value(key, value),
            None => log::trace!("line {}: skipping {:?}", self.line, line),
        }
    }

    fn parse_section_header(&mut self, inner: &str) {
        let name = trim(inner);
        if name.is_empty() {
            log::trace!("line {}: ignoring section header with empty name", self.line);
            return;
        }

        self.current_section = name.to_string();
        let section = self.doc.section_mut(name);
        if !self.pending.is_empty() {
            log::trace!(
                "line {}: attaching {} comment line(s) to section {:?}",
                self.line,
                self.pending.len(),
                name
            );
            section.attach_comment(std::mem::take(&mut self.pending));
        }
    }

    fn parse_key_value(&mut self, key: &str, value: &str) {
        let field = self
            .doc
            .section_mut(&self.current_section)
            .field_mut(key);
        field.set(trim(value));
        if !self.pending.is_empty() {
            log::trace!(
                "line {}: attaching {} comment line(s) to key {:?}",
                self.line,
                self.pending.len(),
                trim(key)
            );
            field.attach_comment(std::mem::take(&mut self.pending));
        }
    }

    /// Ends parsing. Comment lines with nothing after them are dropped.
    pub fn finish(self) {
        if !self.pending.is_empty() {
            log::trace!(
                "dropping {} trailing comment line(s) with no section or key after them",
                self.pending.len()
            );
        }
        log::debug!(
            "parsed {} line(s) into {} section(s)",
            self.line,
            self.doc.len()
        );
    }
}

/// Parses everything `reader` yields into `doc`, replacing its contents.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub(crate) fn read_into<R, P>(mut reader: R, doc: &mut IniFile<P>) -> Result<()>
where
    R: BufRead,
    P: KeyPolicy,
{
    let mut parser = Parser::new(doc);
    let mut buf = Vec::with_capacity(256);
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        parser.feed_line(&String::from_utf8_lossy(&buf));
    }
    parser.finish();
    Ok(())
}

/// Parses `text` into `doc`, replacing its contents.
pub(crate) fn read_str_into<P: KeyPolicy>(text: &str, doc: &mut IniFile<P>) {
    let mut parser = Parser::new(doc);
    for line in text.lines() {
        parser.feed_line(line);
    }
    parser.finish();
}

#[cfg(test)]
mod tests {
    use crate::{CaseInsensitiveIniFile, IniFile};
    use std::io::{self, BufReader, Read};

    fn parse(text: &str) -> IniFile {
        text.parse().unwrap()
    }

    #[test]
    fn test_section_and_key() {
        let ini = parse("[s]\nk=v\n");
        assert_eq!(ini.at("s").unwrap().at("k").unwrap().as_str(), "v");
    }

    #[test]
    fn test_comments_accumulate_for_section() {
        let ini = parse(";c1\n;c2\n[s]\n");
        assert_eq!(ini.at("s").unwrap().comment().unwrap().view(), [";c1", ";c2"]);
    }

    #[test]
    fn test_comment_attaches_to_key() {
        let ini = parse("[s]\n# about k\n  ; second  \nk=v\nj=w\n");
        let s = ini.at("s").unwrap();
        assert_eq!(s.at("k").unwrap().comment().unwrap().view(), ["# about k", "; second"]);
        assert!(s.at("j").unwrap().comment().is_none());
        assert!(s.comment().is_none());
    }

    #[test]
    fn test_keys_before_header_go_to_empty_section() {
        let ini = parse("x=1\n[s]\ny=2");
        assert_eq!(ini.at("").unwrap().at("x").unwrap().get::<i32>().unwrap(), 1);
        assert!(!ini.at("").unwrap().contains("y"));
    }

    #[test]
    fn test_trims_names_keys_and_values() {
        let ini = parse("  [  spaced name ]  \n  key   =   a = b  \n");
        let section = ini.at("spaced name").unwrap();
        assert_eq!(section.at("key").unwrap().as_str(), "a = b");
    }

    #[test]
    fn test_empty_header_is_ignored() {
        let ini = parse("; kept\n[s]\na=1\n[  ]\nb=2\n");
        assert_eq!(ini.len(), 1);
        assert!(ini.at("s").unwrap().contains("b"));
        assert!(!ini.contains(""));
    }

    #[test]
    fn test_comment_survives_empty_header() {
        let ini = parse("; note\n[]\n[s]\n");
        assert_eq!(ini.at("s").unwrap().comment().unwrap().view(), ["; note"]);
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let ini = parse("garbage\n[unclosed\nclosed]\n[ok]\n=empty key\nnovalue=\n");
        assert_eq!(ini.sections(), vec!["ok"]);
        let ok = ini.at("ok").unwrap();
        assert_eq!(ok.at("").unwrap().as_str(), "empty key");
        assert!(ok.at("novalue").unwrap().is_empty());
    }

    #[test]
    fn test_empty_sections_are_kept() {
        let ini = parse("[Section]\nkey=value\n[Nothing1]\n[Test]\nstatus=pass\n[Nothing2]\n");
        assert_eq!(ini.sections(), vec!["Section", "Nothing1", "Test", "Nothing2"]);
        assert!(ini.at("Nothing2").unwrap().is_empty());
    }

    #[test]
    fn test_repeated_section_merges() {
        let ini = parse("[a]\nx=1\n[b]\n[a]\ny=2\nx=3\n");
        let a = ini.at("a").unwrap();
        assert_eq!(a.keys(), vec!["x", "y"]);
        assert_eq!(a.at("x").unwrap().as_str(), "3");
    }

    #[test]
    fn test_trailing_comment_dropped() {
        let ini = parse("[s]\nk=v\n; orphan\n");
        assert!(!ini.at("s").unwrap().at("k").unwrap().has_comment());
    }

    #[test]
    fn test_read_replaces_existing_content() {
        let mut ini = parse("[old]\nk=v\n");
        ini.read_str("[new]\n");
        assert!(!ini.contains("old"));
        assert!(ini.contains("new"));
    }

    #[test]
    fn test_crlf_and_bom() {
        let mut ini = IniFile::new();
        ini.read("\u{feff}[s]\r\nk=v\r\n".as_bytes()).unwrap();
        assert_eq!(ini.at("s").unwrap().at("k").unwrap().as_str(), "v");
    }

    #[test]
    fn test_case_insensitive_parse() {
        let ini: CaseInsensitiveIniFile = "[Section]\nKEY=Value\n".parse().unwrap();
        assert_eq!(ini.at("SECTION").unwrap().at("key").unwrap().as_str(), "Value");
        assert_eq!(ini.sections(), vec!["Section"]);
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
        }
    }

    #[test]
    fn test_reader_error_is_io() {
        let mut ini = IniFile::new();
        let err = ini.read(BufReader::new(FailingReader)).unwrap_err();
        assert!(err.is_io());
        assert!(err.to_string().contains("disk on fire"));
    }
}
