#![cfg(test)]
use proptest::prelude::*;
use scaffold_core::text::{ends_with, join, replace_all, split, starts_with, trim};

proptest! {
    #[test]
    fn clean_fields_round_trip(fields in prop::collection::vec("[a-z0-9 ]{1,8}", 1..6)) {
        let csv = join(&fields, ",");
        prop_assert_eq!(split(&csv, ','), fields.clone());
        prop_assert_eq!(join(&split(&csv, ','), ","), csv);
    }

    #[test]
    fn split_never_yields_empty_tokens(s in "[a,]{0,16}") {
        for token in split(&s, ',') {
            prop_assert!(!token.is_empty());
            prop_assert!(!token.contains(','));
        }
    }

    #[test]
    fn empty_affixes_always_match(s in ".*") {
        prop_assert!(starts_with(&s, ""));
        prop_assert!(ends_with(&s, ""));
    }

    #[test]
    fn empty_pattern_is_identity(s in ".*", to in ".*") {
        prop_assert_eq!(replace_all(&s, "", &to), s);
    }

    #[test]
    fn trim_is_idempotent(s in "[ \t\r\na-z]{0,16}") {
        let once = trim(&s);
        prop_assert_eq!(trim(&once), once.clone());
        prop_assert!(!once.starts_with(char::is_whitespace));
        prop_assert!(!once.ends_with(char::is_whitespace));
    }
}

#[test]
fn trim_examples() {
    assert_eq!(trim("  hello  "), "hello");
    assert_eq!(trim("\t\n"), "");
}

#[test]
fn lossy_round_trip_with_empty_fields() {
    assert_eq!(split("a,,b", ','), ["a", "b"]);
    assert_eq!(join(&split(",a,,b,", ','), ","), "a,b");
    assert!(split("", ',').is_empty());
}

#[test]
fn overlapping_replacement_scans_left_to_right() {
    assert_eq!(replace_all("aaa", "aa", "b"), "ba");
}

#[test]
fn fruit_basket() {
    assert_eq!(
        split("apple,banana,cherry,date", ','),
        ["apple", "banana", "cherry", "date"]
    );
    assert_eq!(
        join(&["Hello", "beautiful", "world"], " "),
        "Hello beautiful world"
    );
}
