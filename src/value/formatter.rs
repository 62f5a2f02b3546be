use super::{HostFault, LanguageError, Leaf, Plant, Value};
use ariadne::{Color, Fmt};

pub const UNDEFINED_MARKER: &str = "(undefined!)";
pub const EMPTY_STRING_MARKER: &str = "(empty)";

pub trait ValueFormatter {
    /// Renders `value`. `line` is the line currently being run, used by
    /// language errors.
    fn format(&self, value: &Value, line: u32) -> String;
}

pub struct DebugFormatter;

impl ValueFormatter for DebugFormatter {
    fn format(&self, value: &Value, line: u32) -> String {
        let _ = line;
        format!("{value:?}")
    }
}

/// Plain text rendering.
pub struct BasicFormatter;

impl ValueFormatter for BasicFormatter {
    fn format(&self, value: &Value, line: u32) -> String {
        Renderer { colored: false, line }.render(value)
    }
}

/// Same text as [`BasicFormatter`], painted for a terminal.
pub struct PrettyFormatter;

impl ValueFormatter for PrettyFormatter {
    fn format(&self, value: &Value, line: u32) -> String {
        Renderer { colored: true, line }.render(value)
    }
}

/// Plain rendering of `value` while `line` is running.
pub fn pretty(value: &Value, line: u32) -> String {
    BasicFormatter.format(value, line)
}

struct Renderer {
    colored: bool,
    line: u32,
}

impl Renderer {
    fn paint<T: std::fmt::Display>(&self, text: T, color: Color) -> String {
        text.fg(self.colored.then_some(color)).to_string()
    }

    // The order of these checks is part of the language: numeric text must
    // win over string rendering, so `'42'` prints exactly like `42`.
    fn render(&self, value: &Value) -> String {
        match value {
            Value::Plant(plant) => self.render_plant(plant),
            Value::Leaf(leaf) => self.render_leaf(leaf),
            Value::Undefined => self.paint(UNDEFINED_MARKER, Color::Yellow),
            Value::Number(_) => self.paint(value, Color::Cyan),
            _ if value.is_numeric() => self.paint(value, Color::Cyan),
            Value::String(text) => self.render_string(text),
            Value::List(values) => self.render_list(values),
            Value::Error(error) => self.render_error(error),
            Value::Fault(fault) => self.render_fault(fault),
            Value::Item(item) => self.render(&item.working),
            Value::Opaque(text) => self.paint(format!("<{text}>"), Color::White),
        }
    }

    fn render_plant(&self, plant: &Plant) -> String {
        plant
            .leaves()
            .iter()
            .map(|leaf| self.render_leaf(leaf))
            .collect::<Vec<_>>()
            .join(",\n")
    }

    fn render_leaf(&self, leaf: &Leaf) -> String {
        let entries = leaf
            .fields()
            .map(|(name, value)| format!("  {name} = {}", self.render(value)))
            .collect::<Vec<_>>()
            .join(",\n");
        let open = self.paint('{', Color::Green);
        let close = self.paint('}', Color::Green);
        format!("{open}\n{entries}\n{close}")
    }

    fn render_string(&self, text: &str) -> String {
        if text.is_empty() {
            return self.paint(EMPTY_STRING_MARKER, Color::BrightBlack);
        }
        let mut escaped = String::with_capacity(text.len() + 2);
        escaped.push('\'');
        for (index, part) in text.split('\n').enumerate() {
            if index > 0 {
                escaped.push_str(&self.paint("\\n", Color::Yellow));
            }
            escaped.push_str(&self.paint(part, Color::Cyan));
        }
        escaped.push('\'');
        escaped
    }

    fn render_list(&self, values: &[Value]) -> String {
        let separator = self.paint(", ", Color::White);
        let items = values
            .iter()
            .map(|value| self.render(value))
            .collect::<Vec<_>>()
            .join(&separator);
        format!("[{items}]")
    }

    fn render_error(&self, error: &LanguageError) -> String {
        format!(
            "{} {}\n{}",
            self.paint("e:", Color::Red),
            error.message,
            self.paint(format!("   (line {})", self.line), Color::Cyan)
        )
    }

    fn render_fault(&self, fault: &HostFault) -> String {
        let mut text = format!(
            "{} {} {}",
            self.paint("e:", Color::Red),
            fault.message,
            self.paint("(uncaught!)", Color::Red)
        );
        for entry in &fault.trace {
            text.push('\n');
            text.push_str(&self.paint(entry, Color::BrightBlack));
        }
        text
    }
}

/// Substitutes format specifiers in `template`.
///
/// Every `%` followed by a character is a specifier and takes the next
/// substitution by position. `%s` inserts the substitution's raw text and `%t`
/// inserts its rendering through `formatter`. Any other specifier, or one left
/// without a substitution, is kept as written. An undefined substitution
/// counts as missing for `%s`. Inserted text is not scanned
/// again.
pub fn format(
    template: &str,
    substitutions: &[Value],
    formatter: &dyn ValueFormatter,
    line: u32,
) -> String {
    let mut output = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    let mut index = 0;
    while let Some(c) = chars.next() {
        if c != '%' {
            output.push(c);
            continue;
        }
        let Some(specifier) = chars.next_if(|&next| next != '\n') else {
            output.push(c);
            continue;
        };
        match (specifier, substitutions.get(index)) {
            ('s', Some(Value::Undefined)) => {
                output.push(c);
                output.push(specifier);
            }
            ('s', Some(value)) => output.push_str(&value.to_string()),
            ('t', Some(value)) => output.push_str(&formatter.format(value, line)),
            _ => {
                output.push(c);
                output.push(specifier);
            }
        }
        index += 1;
    }
    output
}
