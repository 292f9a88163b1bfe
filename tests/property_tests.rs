//! Property-based tests for value conversion and document round trips.

use inifile::{from_str, to_string, trim, Comment, Field, IniFile};
use proptest::prelude::*;

fn roundtrip<T>(value: T) -> bool
where
    T: inifile::ToIniValue + inifile::FromIniValue + PartialEq + std::fmt::Debug + Clone,
{
    let field = Field::with_value(value.clone());
    match field.get::<T>() {
        Ok(back) => back == value,
        Err(e) => {
            eprintln!("Decode failed: {}", e);
            eprintln!("Encoded was: {}", field.as_str());
            false
        }
    }
}

// Names and values the format can carry: no line breaks, no brackets, no `=`,
// no leading comment marker, no surrounding whitespace.
fn name() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_.]{1,12}"
}

fn value() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_.,:/ ]{0,20}".prop_map(|s| trim(&s).to_string())
}

proptest! {
    #[test]
    fn prop_i32(n in any::<i32>()) {
        prop_assert!(roundtrip(n));
    }

    #[test]
    fn prop_i64(n in any::<i64>()) {
        prop_assert!(roundtrip(n));
    }

    #[test]
    fn prop_u64(n in any::<u64>()) {
        prop_assert!(roundtrip(n));
    }

    #[test]
    fn prop_bool(b in any::<bool>()) {
        prop_assert!(roundtrip(b));
    }

    #[test]
    fn prop_f64_finite(x in any::<f64>().prop_filter("finite", |x| x.is_finite())) {
        prop_assert!(roundtrip(x));
    }

    #[test]
    fn prop_vec_i32(v in prop::collection::vec(any::<i32>(), 0..20)) {
        prop_assert!(roundtrip(v));
    }

    #[test]
    fn prop_i64_in_i8_range_or_error(n in any::<i64>()) {
        let result = Field::with_value(n).get::<i8>();
        if i8::try_from(n).is_ok() {
            prop_assert_eq!(result.unwrap() as i64, n);
        } else {
            prop_assert!(result.unwrap_err().is_out_of_range());
        }
    }

    #[test]
    fn prop_trim_idempotent(s in "\\PC*") {
        let once = trim(&s);
        prop_assert_eq!(trim(once), once);
    }

    #[test]
    fn prop_comment_marker_added_once(text in "[a-z ]{1,20}") {
        let mut comment = Comment::new();
        comment.set(&text);
        let stored = comment.to_vec();
        let mut again = Comment::new();
        for line in &stored {
            again.add(line);
        }
        prop_assert_eq!(again.to_vec(), stored);
    }

    #[test]
    fn prop_document_roundtrip(
        sections in prop::collection::vec(
            (name(), prop::collection::vec((name(), value()), 0..5)),
            0..5,
        )
    ) {
        let mut ini = IniFile::new();
        for (section, fields) in &sections {
            ini.section_mut(section);
            for (key, value) in fields {
                ini.set(section, key, value.as_str());
            }
        }
        let text = to_string(&ini);
        let back = from_str(&text);
        prop_assert_eq!(&back, &ini);
        prop_assert_eq!(to_string(&back), text);
    }
}
