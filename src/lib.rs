//! # inifile
//!
//! An in-memory document model for the INI configuration format.
//!
//! ## What does it do?
//!
//! Text is parsed into a tree of sections and key/value fields. The tree can be edited with
//! typed values (booleans, integers, floats, text, your own types) and written back out,
//! keeping the comments attached to every section and field.
//!
//! ## Key Features
//!
//! - **Typed access**: `field.get::<u16>()`, `section.set("port", 8080)`, with precise
//!   decode and range errors
//! - **Comments survive**: `;` and `#` comment lines stay attached to the section or key
//!   that follows them
//! - **Lenient parsing**: malformed lines are skipped, never fatal
//! - **Deterministic output**: sections and keys are written in first-insertion order
//! - **Case-insensitive variant**: [`CaseInsensitiveIniFile`] folds ASCII case for lookups
//!   while keeping the original spelling
//! - **Extensible**: implement [`ToIniValue`] and [`FromIniValue`] for your own types
//!
//! ## Quick Start
//!
//! ```rust
//! use inifile::IniFile;
//!
//! let text = "\
//! ; main server
//! [server]
//! host = example.org
//! port = 8080
//! debug = false
//! ";
//!
//! let mut ini: IniFile = text.parse()?;
//! let server = ini.at("server")?;
//!
//! assert_eq!(server.at("host")?.as_str(), "example.org");
//! assert_eq!(server.at("port")?.get::<u16>()?, 8080);
//! assert!(!server.at("debug")?.get::<bool>()?);
//! assert_eq!(server.comment().unwrap().view(), ["; main server"]);
//!
//! ini.set("server", "port", 9090).set_comment("moved");
//! assert_eq!(
//!     ini.to_string(),
//!     "; main server\n[server]\nhost=example.org\n; moved\nport=9090\ndebug=false\n"
//! );
//! # Ok::<(), inifile::Error>(())
//! ```
//!
//! ### Building documents with the ini! macro
//!
//! ```rust
//! use inifile::ini;
//!
//! let ini = ini! {
//!     "database" => { "host" => "localhost", "port" => 3306 },
//!     "network" => { "timeout" => 30 },
//! };
//! assert_eq!(ini.get("database", "port").unwrap().get::<i32>().unwrap(), 3306);
//! ```
//!
//! ### Files
//!
//! ```rust,no_run
//! use inifile::IniFile;
//!
//! let mut ini: IniFile = IniFile::from_file("config.ini")?;
//! ini.set("app", "runs", ini.get_or("app", "runs", 0).get::<u32>()? + 1);
//! ini.save("config.ini")?;
//! # Ok::<(), inifile::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Parsing never fails because of a bad line. Errors come from strict lookups
//! ([`IniFile::at`], [`Section::at`]), typed reads ([`Field::get`]) and I/O; see [`Error`].
//!
//! ## Concurrency
//!
//! Everything is synchronous and the tree is plain owned data. Share it across threads the
//! usual way (`Mutex`, `RwLock`) if you need to.
//!
//! ## Format Description
//!
//! See the [`format`] module for the accepted grammar and the exact output layout.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`basic.rs`** - read, edit and write a document
//! - **`comments.rs`** - section and key comments
//! - **`custom_type.rs`** - converters for your own types and for `Vec<T>`
//! - **`case_insensitive.rs`** - case-folded lookups
//!
//! Run any example with: `cargo run --example <name>`

pub mod comment;
pub mod convert;
pub mod de;
pub mod document;
pub mod error;
pub mod field;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod section;
pub mod ser;
pub mod util;

pub use comment::Comment;
pub use convert::{FromIniValue, ToIniValue};
pub use de::Parser;
pub use document::{CaseInsensitiveIniFile, IniFile};
pub use error::{Error, Result};
pub use field::Field;
pub use map::{CaseInsensitive, CaseSensitive, KeyMap, KeyPolicy};
pub use options::{CommentMarker, LineEnding, WriteOptions};
pub use section::{CaseInsensitiveSection, Section};
pub use ser::Serializer;
pub use util::{join, split, split_skip_empty, split_str, trim};

use std::io;

/// Parse a case-sensitive document from a string.
///
/// # Examples
///
/// ```rust
/// let ini = inifile::from_str("[s]\nk=v\n");
/// assert_eq!(ini.get("s", "k").unwrap().as_str(), "v");
/// ```
#[must_use]
pub fn from_str(s: &str) -> IniFile {
    let mut ini = IniFile::new();
    ini.read_str(s);
    ini
}

/// Parse a case-sensitive document from bytes. Invalid UTF-8 is replaced, not rejected.
///
/// # Examples
///
/// ```rust
/// let ini = inifile::from_slice(b"[s]\nk=v\n");
/// assert!(ini.contains_key("s", "k"));
/// ```
#[must_use]
pub fn from_slice(v: &[u8]) -> IniFile {
    from_str(&String::from_utf8_lossy(v))
}

/// Parse a case-sensitive document from an I/O stream.
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
///
/// let ini = inifile::from_reader(Cursor::new("x=1\n")).unwrap();
/// assert_eq!(ini.get("", "x").unwrap().get::<i32>().unwrap(), 1);
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails before end of stream.
pub fn from_reader<R: io::Read>(reader: R) -> Result<IniFile> {
    let mut ini = IniFile::new();
    ini.read(io::BufReader::new(reader))?;
    Ok(ini)
}

/// Render a document in the default layout.
#[must_use]
pub fn to_string<P: KeyPolicy>(ini: &IniFile<P>) -> String {
    ini.to_string_with_options(&WriteOptions::default())
}

/// Render a document using `options`.
#[must_use]
pub fn to_string_with_options<P: KeyPolicy>(ini: &IniFile<P>, options: &WriteOptions) -> String {
    ini.to_string_with_options(options)
}

/// Write a document to an I/O stream in the default layout.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
pub fn to_writer<W: io::Write, P: KeyPolicy>(writer: W, ini: &IniFile<P>) -> Result<()> {
    ini.write(writer)
}
