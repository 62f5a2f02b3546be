use clover::loader::{clean, load, LineBreaks};
use proptest::prelude::*;

#[test]
fn smoke_test() {
    assert!(load("").is_empty());
}

#[test]
fn test_comment_line_is_kept_blank() {
    assert_eq!(load("5\n;comment\n10"), vec!["5", "", "10"]);
}

#[test]
fn test_trailing_line_break_is_dropped_once() {
    assert_eq!(load("show\n"), vec!["show"]);
    assert_eq!(load("show\n\n"), vec!["show", ""]);
}

#[test]
fn test_trailing_comment_line_is_dropped() {
    assert_eq!(load("show\n  ; done"), vec!["show"]);
}

#[test]
fn test_interior_blank_lines_are_kept() {
    assert_eq!(load("\n\nshow\n"), vec!["", "", "show"]);
}

#[test]
fn test_clean() {
    assert_eq!(clean("  add 5 ; five  "), "add 5");
    assert_eq!(clean("set 'a;b'"), "set 'a");
    assert_eq!(clean("stop\r"), "stop");
    assert_eq!(clean(";"), "");
}

#[test]
fn test_line_breaks() {
    let src = "set 1\n\nshow";
    let breaks = LineBreaks::new(src);
    assert_eq!(breaks.get_max_line(), 3);
    assert_eq!(breaks.get_line_range(1), Some(0..5));
    assert_eq!(breaks.get_line_range(2), Some(6..6));
    assert_eq!(&src[breaks.get_line_range(3).unwrap()], "show");
    assert_eq!(breaks.get_line_range(0), None);
    assert_eq!(breaks.get_line_range(4), None);
}

fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,6}( [a-z0-9]{1,4}){0,2}",
        "[ \t]*",
        "[a-z ]{0,6};[a-z ;]{0,8}",
    ]
}

proptest! {
    #[test]
    fn loader_keeps_one_entry_per_source_line(lines in prop::collection::vec(line_strategy(), 1..12)) {
        let src = lines.join("\n");
        let loaded = load(&src);
        let last_is_blank = clean(lines.last().unwrap()).is_empty();
        let expected = if last_is_blank { lines.len() - 1 } else { lines.len() };
        prop_assert_eq!(loaded.len(), expected);
        for (raw, cleaned) in lines.iter().zip(loaded.iter()) {
            prop_assert_eq!(clean(raw), *cleaned);
            prop_assert!(!cleaned.contains(';'));
        }
    }
}
