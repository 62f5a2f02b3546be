pub mod formatter;

use crate::interpreter::focus::FocusItem;
use compact_str::{format_compact, CompactString, ToCompactString};

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Undefined,
    Number(f64),
    String(CompactString),
    List(Vec<Value>),
    Plant(Plant),
    Leaf(Leaf),
    Error(LanguageError),
    Fault(HostFault),
    Item(Box<FocusItem>),
    Opaque(CompactString),
}

impl Value {
    pub fn empty_string() -> Self {
        Self::String(CompactString::default())
    }

    /// Numeric view of the value. Strings holding a decimal number coerce.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::String(text) => coerce_number(text),
            _ => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.as_number().is_some()
    }
}

/// Parses `text` as a number the way the language does for display and arithmetic.
///
/// Surrounding whitespace is ignored. Blank text is not a number, and neither
/// are spellings like `inf` or `NaN`; only `Infinity` is accepted by name.
pub fn coerce_number(text: &str) -> Option<f64> {
    let text = text.trim();
    match text {
        "" => None,
        "Infinity" | "+Infinity" => Some(f64::INFINITY),
        "-Infinity" => Some(f64::NEG_INFINITY),
        _ if text
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')) =>
        {
            text.parse::<f64>().ok()
        }
        _ => None,
    }
}

pub fn number_text(value: f64) -> CompactString {
    if value.is_nan() {
        CompactString::new("NaN")
    } else if value.is_infinite() {
        if value > 0.0 {
            CompactString::new("Infinity")
        } else {
            CompactString::new("-Infinity")
        }
    } else if value == 0.0 {
        CompactString::new("0")
    } else if !(1e-6..1e21).contains(&value.abs()) {
        let text = format_compact!("{value:e}");
        match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format_compact!("{mantissa}e+{exponent}")
            }
            _ => text,
        }
    } else {
        format_compact!("{value}")
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Number(v) => write!(f, "{}", number_text(*v)),
            Self::String(v) => write!(f, "{v}"),
            Self::List(values) => {
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{value}")?;
                }
                Ok(())
            }
            Self::Plant(plant) => {
                for (index, leaf) in plant.leaves().iter().enumerate() {
                    if index > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{leaf}")?;
                }
                Ok(())
            }
            Self::Leaf(leaf) => write!(f, "{leaf}"),
            Self::Error(error) => write!(f, "{}", error.message),
            Self::Fault(fault) => write!(f, "{}", fault.message),
            Self::Item(item) => write!(f, "{}", item.working),
            Self::Opaque(text) => write!(f, "{text}"),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_compact_string())
    }
}

impl From<CompactString> for Value {
    fn from(value: CompactString) -> Self {
        Self::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::List(value)
    }
}

impl From<FocusItem> for Value {
    fn from(value: FocusItem) -> Self {
        Self::Item(Box::new(value))
    }
}

impl From<LanguageError> for Value {
    fn from(value: LanguageError) -> Self {
        Self::Error(value)
    }
}

impl From<Leaf> for Value {
    fn from(value: Leaf) -> Self {
        Self::Leaf(value)
    }
}

impl From<Plant> for Value {
    fn from(value: Plant) -> Self {
        Self::Plant(value)
    }
}

/// An error raised by the language itself. It is plain data: it can sit in a
/// working value or in the outputs like any other value.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageError {
    pub message: CompactString,
}

impl LanguageError {
    /// Builds the message from `template`, see [`formatter::format`].
    pub fn new(template: &str, substitutions: &[Value], line: u32) -> Self {
        Self {
            message: formatter::format(
                template,
                substitutions,
                &formatter::BasicFormatter,
                line,
            )
            .into(),
        }
    }
}

/// A host-level error captured for display.
#[derive(Debug, Clone, PartialEq)]
pub struct HostFault {
    pub message: CompactString,
    pub trace: Vec<CompactString>,
}

/// Ordered mapping of field name to value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Leaf {
    fields: Vec<(CompactString, Value)>,
}

impl Leaf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Replaces the value of an existing field in place, otherwise appends.
    pub fn insert(&mut self, name: &str, value: impl Into<Value>) {
        let value = value.into();
        match self.fields.iter().position(|(field, _)| field == name) {
            Some(index) => self.fields[index].1 = value,
            None => self.fields.push((name.to_compact_string(), value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl std::fmt::Display for Leaf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (index, (name, value)) in self.fields().enumerate() {
            if index > 0 {
                write!(f, ",")?;
            }
            write!(f, "{name}={value}")?;
        }
        write!(f, "}}")
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Plant {
    leaves: Vec<Leaf>,
}

impl Plant {
    pub fn new(leaves: Vec<Leaf>) -> Self {
        Self { leaves }
    }

    pub fn push(&mut self, leaf: Leaf) {
        self.leaves.push(leaf);
    }

    pub fn leaves(&self) -> &[Leaf] {
        &self.leaves
    }
}
