//! Case-folded section and key lookups.
//!
//! Run with: cargo run --example case_insensitive

use inifile::CaseInsensitiveIniFile;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let text = "[Section]\nFlag=123\n";
    let mut ini: CaseInsensitiveIniFile = text.parse()?;

    for name in ["Section", "SECTION", "section"] {
        println!("contains({:?}) = {}", name, ini.contains(name));
    }

    let flag: i32 = ini.at("SECTION")?.at("flag")?.get()?;
    println!("flag = {}", flag);

    // Writes through any spelling update the original entry
    ini.set("section", "FLAG", 456);
    ini.set("SECTION", "Other", "x");

    // The first spelling is the one written out
    print!("{}", ini);
    Ok(())
}
