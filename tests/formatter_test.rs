use clover::value::formatter::{
    format, pretty, BasicFormatter, PrettyFormatter, ValueFormatter, EMPTY_STRING_MARKER,
    UNDEFINED_MARKER,
};
use clover::value::{HostFault, LanguageError, Leaf, Plant, Value};
use proptest::prelude::*;

#[test]
fn test_undefined() {
    assert_eq!(pretty(&Value::Undefined, 1), UNDEFINED_MARKER);
}

#[test]
fn test_numbers() {
    assert_eq!(pretty(&Value::Number(5.0), 1), "5");
    assert_eq!(pretty(&Value::Number(2.5), 1), "2.5");
    assert_eq!(pretty(&Value::Number(-0.0), 1), "0");
    assert_eq!(pretty(&Value::Number(f64::INFINITY), 1), "Infinity");
    assert_eq!(pretty(&Value::Number(f64::NAN), 1), "NaN");
}

#[test]
fn test_number_exponent_form() {
    assert_eq!(pretty(&Value::Number(1e21), 1), "1e+21");
    assert_eq!(pretty(&Value::Number(-1.5e21), 1), "-1.5e+21");
    assert_eq!(pretty(&Value::Number(1e-7), 1), "1e-7");
    assert_eq!(pretty(&Value::Number(1e20), 1), "100000000000000000000");
    assert_eq!(pretty(&Value::Number(0.000001), 1), "0.000001");
    assert_eq!(pretty(&Value::Number(123.5), 1), "123.5");
    assert_eq!(Value::Number(1e21).to_string(), "1e+21");
}

#[test]
fn test_numeric_string_renders_as_number() {
    assert_eq!(pretty(&Value::from("42"), 1), "42");
    assert_eq!(pretty(&Value::from("42"), 1), pretty(&Value::Number(42.0), 1));
    assert_eq!(pretty(&Value::from("4 2"), 1), "'4 2'");
}

#[test]
fn test_strings() {
    assert_eq!(pretty(&Value::from("hi"), 1), "'hi'");
    assert_eq!(pretty(&Value::from("a\nb"), 1), "'a\\nb'");
}

#[test]
fn test_empty_string_marker() {
    let text = pretty(&Value::empty_string(), 1);
    assert_eq!(text, EMPTY_STRING_MARKER);
    assert_ne!(text, "''");
}

#[test]
fn test_lists() {
    let value = Value::List(vec![
        Value::Number(1.0),
        Value::from("x"),
        Value::List(vec![Value::Undefined]),
    ]);
    assert_eq!(pretty(&value, 1), "[1, 'x', [(undefined!)]]");
    assert_eq!(pretty(&Value::List(vec![]), 1), "[]");
}

#[test]
fn test_leaf_and_plant() {
    let leaf = Leaf::new().with("name", "fern").with("height", 3.0);
    assert_eq!(
        pretty(&Value::Leaf(leaf.clone()), 1),
        "{\n  name = 'fern',\n  height = 3\n}"
    );
    let plant = Plant::new(vec![leaf, Leaf::new().with("name", "moss")]);
    assert_eq!(
        pretty(&Value::Plant(plant), 1),
        "{\n  name = 'fern',\n  height = 3\n},\n{\n  name = 'moss'\n}"
    );
}

#[test]
fn test_leaf_insert_replaces_in_place() {
    let mut leaf = Leaf::new().with("a", 1.0).with("b", 2.0);
    leaf.insert("a", 3.0);
    assert_eq!(leaf.get("a"), Some(&Value::Number(3.0)));
    let names: Vec<&str> = leaf.fields().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn test_language_error_uses_current_line() {
    let error = Value::Error(LanguageError {
        message: "bad thing".into(),
    });
    assert_eq!(pretty(&error, 7), "e: bad thing\n   (line 7)");
}

#[test]
fn test_host_fault() {
    let fault = Value::Fault(HostFault {
        message: "Unknown command: jump".into(),
        trace: vec!["    at line 2".into()],
    });
    assert_eq!(
        pretty(&fault, 2),
        "e: Unknown command: jump (uncaught!)\n    at line 2"
    );
}

#[test]
fn test_opaque() {
    assert_eq!(pretty(&Value::Opaque("handle".into()), 1), "<handle>");
}

#[test]
fn test_pretty_formatter_has_same_text() {
    let value = Value::List(vec![Value::from("a\nb"), Value::Number(1.0)]);
    let painted = PrettyFormatter.format(&value, 1);
    let plain = BasicFormatter.format(&value, 1);
    assert_eq!(strip_ansi(&painted), plain);
}

#[test]
fn test_format() {
    let text = format(
        "%s and %t",
        &[Value::from("x"), Value::Number(5.0)],
        &BasicFormatter,
        1,
    );
    assert_eq!(text, "x and 5");
}

#[test]
fn test_format_quotes_tokens() {
    let text = format("got %t", &[Value::from("abc")], &BasicFormatter, 1);
    assert_eq!(text, "got 'abc'");
}

#[test]
fn test_format_missing_substitution_is_kept() {
    let text = format("%s, %s and %t", &[Value::from("a")], &BasicFormatter, 1);
    assert_eq!(text, "a, %s and %t");
}

#[test]
fn test_format_undefined_substitution() {
    let undefined = [Value::Undefined, Value::Undefined];
    let text = format("got %s and %t", &undefined, &BasicFormatter, 1);
    assert_eq!(text, format!("got %s and {UNDEFINED_MARKER}"));
    let text = format("%s then %s", &[Value::Undefined, Value::from("b")], &BasicFormatter, 1);
    assert_eq!(text, "%s then b");
}

#[test]
fn test_format_unknown_specifier_takes_a_position() {
    let text = format(
        "%d %s",
        &[Value::from("a"), Value::from("b")],
        &BasicFormatter,
        1,
    );
    assert_eq!(text, "%d b");
}

#[test]
fn test_format_does_not_rescan_substitutions() {
    let text = format(
        "%s %s",
        &[Value::from("%s"), Value::from("b")],
        &BasicFormatter,
        1,
    );
    assert_eq!(text, "%s b");
}

#[test]
fn test_format_trailing_percent() {
    let text = format("100%", &[Value::from("a")], &BasicFormatter, 1);
    assert_eq!(text, "100%");
}

fn strip_ansi(text: &str) -> String {
    let mut output = String::new();
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            output.push(c);
        }
    }
    output
}

proptest! {
    #[test]
    fn template_without_specifiers_is_unchanged(template in "[^%]{0,40}") {
        let text = format(&template, &[Value::from("x")], &BasicFormatter, 1);
        prop_assert_eq!(text, template);
    }

    #[test]
    fn digit_strings_render_like_numbers(n in 0u32..1_000_000) {
        let text = n.to_string();
        prop_assert_eq!(pretty(&Value::from(text.as_str()), 1), text);
    }
}
