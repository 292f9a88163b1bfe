//! Section and key comments.
//!
//! Run with: cargo run --example comments

use inifile::{CommentMarker, IniFile};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let text = "\
; Database settings
; (edit with care)
[database]
# Host name or address
host = localhost
port = 3306
";

    let mut ini: IniFile = text.parse()?;

    let db = ini.at("database")?;
    println!("Section comment:");
    for line in db.comment().map(|c| c.view()).unwrap_or_default() {
        println!("  {}", line);
    }
    if let Some(comment) = db.at("host")?.comment() {
        println!("Host comment: {:?}", comment.view());
    }

    // Add and replace comments
    ini.at_mut("database")?
        .at_mut("port")?
        .set_comment("Default MySQL port");
    ini.section_mut("cache")
        .set_comment_with("Cache tuning\nValues in seconds", CommentMarker::Hash);
    ini.set("cache", "ttl", 300).add_comment("Five minutes");

    println!("\nDefault output:\n{}", ini);

    ini.at_mut("database")?.clear_comment();
    println!("Without the database comment:\n{}", ini);

    Ok(())
}
