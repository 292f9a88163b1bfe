use inifile::{ini, IniFile};

#[test]
fn test_ini_macro_empty() {
    let ini: IniFile = ini!();
    assert!(ini.is_empty());
}

#[test]
fn test_ini_macro_single_section() {
    let ini = ini! {
        "server" => { "host" => "localhost", "port" => 8080 }
    };
    assert_eq!(ini.sections(), vec!["server"]);
    assert_eq!(ini.get("server", "host").unwrap().as_str(), "localhost");
    assert_eq!(ini.get("server", "port").unwrap().get::<u16>().unwrap(), 8080);
}

#[test]
fn test_ini_macro_mixed_values() {
    let ini = ini! {
        "values" => {
            "flag" => true,
            "ratio" => 0.25,
            "letter" => 'z',
            "list" => vec![1, 2, 3],
            "none" => Option::<i32>::None,
        },
    };
    let values = ini.at("values").unwrap();
    assert!(values.at("flag").unwrap().get::<bool>().unwrap());
    assert_eq!(values.at("ratio").unwrap().get::<f64>().unwrap(), 0.25);
    assert_eq!(values.at("letter").unwrap().get::<char>().unwrap(), 'z');
    assert_eq!(values.at("list").unwrap().as_str(), "1,2,3");
    assert_eq!(values.at("none").unwrap().get::<Option<i32>>().unwrap(), None);
}

#[test]
fn test_ini_macro_empty_section_and_global() {
    let ini = ini! {
        "" => { "top" => 1 },
        "empty" => {},
    };
    assert!(ini.contains("empty"));
    assert!(ini.at("empty").unwrap().is_empty());
    assert_eq!(ini.to_string(), "top=1\n\n[empty]\n");
}

#[test]
fn test_ini_macro_repeated_section_merges() {
    let ini = ini! {
        "s" => { "a" => 1 },
        "s" => { "b" => 2, "a" => 3 },
    };
    assert_eq!(ini.len(), 1);
    assert_eq!(ini.at("s").unwrap().keys(), vec!["a", "b"]);
    assert_eq!(ini.get("s", "a").unwrap().as_str(), "3");
}

#[test]
fn test_ini_macro_expressions() {
    let name = String::from("dynamic");
    let port: u16 = 4000 + 1;
    let ini = ini! {
        name.as_str() => { "port" => port, "double" => port * 2 },
    };
    assert_eq!(ini.get("dynamic", "double").unwrap().get::<u32>().unwrap(), 8002);
}
