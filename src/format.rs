//! INI Format Description
//!
//! This module documents the INI dialect read and written by this library.
//!
//! # Overview
//!
//! An INI document is a list of lines. Each line is a section header, a key/value
//! pair, a comment, or blank. There is no nesting, no quoting and no escaping: every
//! value is plain text, and typed access happens on demand through the converters in
//! [`crate::convert`].
//!
//! # Reading
//!
//! Every physical line is trimmed of surrounding whitespace (space, tab, `\r`, `\n`,
//! form feed, vertical tab) and then classified in this order:
//!
//! | Line | Meaning |
//! |------|---------|
//! | empty | ignored |
//! | starts with `;` or `#` | comment line, kept verbatim |
//! | starts with `[` and ends with `]` | section header |
//! | contains `=` | key/value pair in the current section |
//! | anything else | ignored |
//!
//! ## Section headers
//!
//! ```text
//! [database]
//! [ spaced name ]
//! ```
//!
//! **Rules**:
//! - The name between the brackets is trimmed, so both headers above are valid
//! - An empty name (`[]`, `[   ]`) is ignored and the current section does not change
//! - Repeating a header merges into the existing section
//! - A header with no fields still creates the section
//!
//! ## Key/value pairs
//!
//! ```text
//! host = localhost
//! path=/usr/local/share=data
//! empty =
//! ```
//!
//! **Rules**:
//! - The line is split at the **first** `=`, so values may contain `=`
//! - Key and value are trimmed
//! - The key may be empty (`=value` is stored under `""`)
//! - A repeated key overwrites the value but keeps its position
//! - Pairs before the first header belong to the unnamed section `""`
//!
//! ## Comments
//!
//! Comment lines accumulate until the next header or pair, and are attached to it:
//!
//! ```text
//! ; applies to the section
//! [server]
//! # applies to the key
//! # (second line)
//! port = 8080
//! ```
//!
//! Comment lines keep their marker and text exactly as read. Comments at the end of
//! the document, with nothing after them, are dropped.
//!
//! ## Encoding
//!
//! Input is treated as UTF-8. A byte order mark on the first line is removed and
//! invalid sequences are replaced with `U+FFFD`. Both `\n` and `\r\n` line endings are
//! accepted.
//!
//! # Writing
//!
//! Output is fully determined by the document:
//!
//! 1. Fields of the unnamed section first, without a header
//! 2. Each named section in insertion order: a blank line if anything was already
//!    written, the section comment, `[name]`, then the fields
//! 3. Each field: its comment lines, then `key=value`
//!
//! ```text
//! version=2
//!
//! ; connection settings
//! [database]
//! host=localhost
//! ; default port
//! port=3306
//! ```
//!
//! The comment of the unnamed section is never written. See
//! [`WriteOptions`](crate::WriteOptions) for the line ending, the delimiter spacing and
//! the blank separator line.
//!
//! # Values
//!
//! | Type | Written as | Read from |
//! |------|------------|-----------|
//! | `bool` | `true`, `false` | anything but empty, `0`, `false` (any case) is `true` |
//! | integers | decimal | decimal with optional sign, range checked |
//! | `f32`, `f64` | shortest round-trip form, `inf`, `-inf`, `nan` | decimal or exponent form |
//! | `char` | the character | first character |
//! | `String` | verbatim | verbatim |
//! | `Vec<T>` | elements joined by `,` | split on `,`, each element trimmed |
//! | `Option<T>` | empty for `None` | empty is `None` |
//! | `DateTime<Utc>` | RFC 3339 | RFC 3339 |
//! | `BigInt` | decimal | decimal |
//!
//! # Differences From Other Dialects
//!
//! Not supported: inline comments after a value, quoted values, escape sequences,
//! line continuations, `:` as a delimiter, nested or dotted sections.
