use super::CommandError;
use crate::value::{coerce_number, Value};
use compact_str::ToCompactString;

const QUOTE: char = '\'';

/// Splits a line into raw tokens. Quoted tokens keep their quotes.
pub fn tokenize(line: &str) -> Result<Vec<&str>, CommandError> {
    let mut tokens = Vec::new();
    let mut rest = line.trim_start();
    while !rest.is_empty() {
        let end = if let Some(quoted) = rest.strip_prefix(QUOTE) {
            let close = quoted
                .find(QUOTE)
                .ok_or_else(|| CommandError::UnterminatedString(rest.to_compact_string()))?;
            close + 2 * QUOTE.len_utf8()
        } else {
            rest.find(char::is_whitespace).unwrap_or(rest.len())
        };
        let (token, remainder) = rest.split_at(end);
        tokens.push(token);
        rest = remainder.trim_start();
    }
    Ok(tokens)
}

/// Converts raw text to a typed value.
pub fn cast(text: &str) -> Result<Value, CommandError> {
    if let Some(quoted) = text.strip_prefix(QUOTE) {
        return match quoted.strip_suffix(QUOTE) {
            Some(inner) => Ok(Value::from(inner)),
            None => Err(CommandError::UnterminatedString(text.to_compact_string())),
        };
    }
    match coerce_number(text) {
        Some(number) => Ok(Value::Number(number)),
        None => Ok(Value::from(text)),
    }
}
