//! Converters for your own types and for lists.
//!
//! Run with: cargo run --example custom_type

use inifile::{split, Error, FromIniValue, IniFile, Result, ToIniValue};

#[derive(Debug, Clone, PartialEq)]
struct Person {
    id: u32,
    name: String,
}

impl ToIniValue for Person {
    fn to_ini_value(&self) -> String {
        format!("{},{}", self.id, self.name)
    }
}

impl FromIniValue for Person {
    fn from_ini_value(text: &str) -> Result<Self> {
        let parts = split(text, ',');
        if parts.len() != 2 {
            return Err(Error::decode("Person", text, "expected `id,name`"));
        }
        Ok(Person {
            id: parts[0].trim().parse().map_err(|e| Error::decode("Person", text, e))?,
            name: parts[1].trim().to_string(),
        })
    }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let mut ini = IniFile::new();

    let admin = Person {
        id: 1,
        name: "abin".to_string(),
    };
    ini.set("people", "admin", &admin);
    ini.set("people", "primes", vec![2, 3, 5, 7, 11]);
    ini.set("people", "names", vec!["ann", "bob"]);

    println!("{}", ini);

    let people = ini.at("people")?;
    let back: Person = people.at("admin")?.get()?;
    assert_eq!(back, admin);
    println!("admin = {:?}", back);

    let primes: Vec<u64> = people.at("primes")?.get()?;
    println!("primes = {:?}", primes);

    let names: Vec<String> = people.at("names")?.get()?;
    println!("names = {:?}", names);

    ini.set("people", "broken", "not a person");
    match ini.at("people")?.at("broken")?.get::<Person>() {
        Ok(p) => println!("unexpected: {:?}", p),
        Err(e) => println!("decode failed: {}", e),
    }

    Ok(())
}
