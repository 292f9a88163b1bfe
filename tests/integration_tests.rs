use inifile::{
    from_reader, from_str, to_string, to_writer, CaseInsensitiveIniFile, Error, Field, IniFile,
    LineEnding, WriteOptions,
};
use std::fs;

const CONFIG: &str = "\
; global settings
version=3

; database connection
[database]
host = db.example.org
# primary port
port = 5432
tags = a, b ,c

[network]
timeout=2.5
enabled=yes
";

#[test]
fn test_read_text_value() {
    let ini = from_str("[s]\nk=v\n");
    assert_eq!(ini.at("s").unwrap().at("k").unwrap().as_str(), "v");
}

#[test]
fn test_comment_lines_attach_to_next_section() {
    let ini = from_str(";c1\n;c2\n[s]\n");
    let comment = ini.at("s").unwrap().comment().unwrap();
    assert_eq!(comment.view().len(), 2);
    assert_eq!(comment.view(), [";c1", ";c2"]);
}

#[test]
fn test_set_integer_read_text_and_integer() {
    let mut ini = IniFile::new();
    ini.set("s", "k", 42);
    let field = ini.at("s").unwrap().at("k").unwrap();
    assert_eq!(field.get::<String>().unwrap(), "42");
    assert_eq!(field.get::<i32>().unwrap(), 42);
}

#[test]
fn test_pair_before_header_is_global() {
    let ini = from_str("x=1\n[s]\ny=2\n");
    assert_eq!(ini.at("").unwrap().at("x").unwrap().get::<i32>().unwrap(), 1);
    assert!(!ini.contains_key("s", "x"));
}

#[test]
fn test_decode_and_range_errors() {
    let empty = Field::with_value("");
    assert!(empty.get::<i32>().unwrap_err().is_decode());

    let huge = Field::with_value("99999999999999999999");
    assert!(huge.get::<i32>().unwrap_err().is_out_of_range());
    assert_eq!(
        huge.get::<i32>().unwrap_err(),
        Error::out_of_range("i32", "99999999999999999999")
    );
}

#[test]
fn test_case_insensitive_document() {
    let mut ini = CaseInsensitiveIniFile::default();
    ini.set("Section", "Key", "first");
    ini.set("SECTION", "key", "second");

    for name in ["Section", "SECTION", "section"] {
        assert!(ini.contains(name));
        assert_eq!(ini.at(name).unwrap().at("KEY").unwrap().as_str(), "second");
    }
    assert_eq!(ini.len(), 1);
    assert_eq!(ini.to_string(), "[Section]\nKey=second\n");
}

#[test]
fn test_full_config() {
    let ini = from_str(CONFIG);

    assert_eq!(ini.sections(), vec!["", "database", "network"]);
    assert_eq!(ini.get("", "version").unwrap().get::<u8>().unwrap(), 3);

    let db = ini.at("database").unwrap();
    assert_eq!(db.comment().unwrap().view(), ["; database connection"]);
    assert_eq!(db.at("host").unwrap().as_str(), "db.example.org");
    assert_eq!(db.at("port").unwrap().get::<u16>().unwrap(), 5432);
    assert_eq!(db.at("port").unwrap().comment().unwrap().view(), ["# primary port"]);
    assert_eq!(
        db.at("tags").unwrap().get::<Vec<String>>().unwrap(),
        vec!["a", "b", "c"]
    );

    let net = ini.at("network").unwrap();
    assert_eq!(net.at("timeout").unwrap().get::<f64>().unwrap(), 2.5);
    assert!(net.at("enabled").unwrap().get::<bool>().unwrap());
    assert!(!net.get_or("missing", false).get::<bool>().unwrap());
}

#[test]
fn test_full_config_roundtrip() {
    let ini = from_str(CONFIG);
    let text = to_string(&ini);
    let back = from_str(&text);
    assert_eq!(back, ini);
    assert_eq!(to_string(&back), text);
}

#[test]
fn test_global_comment_becomes_key_comment() {
    // Without a header, the leading comment belongs to the first key.
    let ini = from_str(CONFIG);
    let version = ini.get("", "version").unwrap();
    assert_eq!(version.comment().unwrap().view(), ["; global settings"]);
}

#[test]
fn test_missing_lookups() {
    let ini = from_str(CONFIG);
    assert!(matches!(ini.at("nope"), Err(Error::SectionNotFound(name)) if name == "nope"));
    assert!(matches!(
        ini.at("database").unwrap().at("nope"),
        Err(Error::KeyNotFound(key)) if key == "nope"
    ));
    assert!(ini.get("database", "nope").is_none());
    assert!(ini.get("nope", "host").is_none());
    assert!(!ini.contains("nope"));
    assert_eq!(ini.len(), 3);
}

#[test]
fn test_empty_sections_survive() {
    let ini = from_str("[a]\n[b]\n[c]\nk=1\n");
    assert_eq!(ini.sections(), vec!["a", "b", "c"]);
    assert!(ini.at("a").unwrap().is_empty());
    assert_eq!(to_string(&ini), "[a]\n\n[b]\n\n[c]\nk=1\n");
}

#[test]
fn test_empty_key_and_value() {
    let ini = from_str("[s]\n=12345\nempty=\n");
    let s = ini.at("s").unwrap();
    assert_eq!(s.at("").unwrap().get::<i32>().unwrap(), 12345);
    assert!(s.at("empty").unwrap().is_empty());
    assert_eq!(to_string(&ini), "[s]\n=12345\nempty=\n");
}

#[test]
fn test_remove_then_write() {
    let mut ini = from_str(CONFIG);
    assert!(ini.remove("network"));
    assert!(ini.at_mut("database").unwrap().remove("tags"));
    assert_eq!(
        to_string(&ini),
        "; global settings\nversion=3\n\n; database connection\n[database]\nhost=db.example.org\n# primary port\nport=5432\n"
    );
}

#[test]
fn test_write_options() {
    let ini = from_str("[a]\nx=1\n");
    let options = WriteOptions::new()
        .with_line_ending(LineEnding::CrLf)
        .with_spaced_delimiter(true);
    assert_eq!(ini.to_string_with_options(&options), "[a]\r\nx = 1\r\n");
}

#[test]
fn test_reader_writer() {
    let ini = from_str(CONFIG);
    let mut buf = Vec::new();
    to_writer(&mut buf, &ini).unwrap();
    let back = from_reader(buf.as_slice()).unwrap();
    assert_eq!(back, ini);
}

#[test]
fn test_load_and_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.ini");

    let mut ini = from_str(CONFIG);
    ini.set("network", "timeout", 10);
    ini.save(&path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("timeout=10\n"));

    let mut loaded = IniFile::new();
    loaded.set("stale", "key", 1);
    loaded.load(&path).unwrap();
    assert!(!loaded.contains("stale"));
    assert_eq!(loaded, ini);

    let again = IniFile::from_file(&path).unwrap();
    assert_eq!(again, ini);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut ini = IniFile::new();
    let err = ini.load(dir.path().join("missing.ini")).unwrap_err();
    assert!(err.is_io());
}

#[test]
fn test_save_to_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let ini = from_str(CONFIG);
    assert!(ini.save(dir.path()).unwrap_err().is_io());
}

#[test]
fn test_json_roundtrip() {
    let ini = from_str("[db]\nhost=localhost\nport=3306\n");
    let json = serde_json::to_string(&ini).unwrap();
    assert_eq!(json, r#"{"db":{"host":"localhost","port":"3306"}}"#);

    let back: IniFile = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ini);
}
