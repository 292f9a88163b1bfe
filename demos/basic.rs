//! Reading, editing and writing a document.
//!
//! Run with: cargo run --example basic

use inifile::IniFile;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let mut ini = IniFile::new();

    // Typed setters
    ini.set("network", "ip", "127.0.0.1");
    ini.set("network", "port", 1024);
    ini.set("network", "timeout", 2.5);
    ini.set("features", "logging", true);

    let path = std::env::temp_dir().join("inifile_basic.ini");
    ini.save(&path)?;
    println!("Saved to {}:\n{}", path.display(), ini);

    // Load it back and read typed values
    let loaded: IniFile = IniFile::from_file(&path)?;
    let network = loaded.at("network")?;
    let ip: String = network.at("ip")?.get()?;
    let port: u16 = network.at("port")?.get()?;
    let timeout: f64 = network.at("timeout")?.get()?;
    println!("ip={} port={} timeout={}", ip, port, timeout);

    // Missing values
    let retries = loaded.get_or("network", "retries", 3).get::<u32>()?;
    println!("retries (default) = {}", retries);

    match loaded.at("database") {
        Ok(_) => println!("database section found"),
        Err(e) => println!("lookup failed: {}", e),
    }

    // Decode errors carry the type and the offending text
    if let Err(e) = network.at("ip")?.get::<i32>() {
        println!("decode failed: {}", e);
    }

    // Iterate in insertion order
    for (name, section) in &loaded {
        println!("[{}] has {} key(s)", name, section.len());
        for (key, field) in section {
            println!("  {} = {}", key, field);
        }
    }

    std::fs::remove_file(&path)?;
    Ok(())
}
