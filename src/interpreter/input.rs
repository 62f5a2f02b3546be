use crate::command::{cast, CommandError};
use crate::value::Value;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_INPUT_PATH: &str = "input.txt";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read implicit input: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to cast implicit input: {0}")]
    Cast(#[from] CommandError),
}

/// Reads the implicit input at `path`. Any failure gives the empty string.
pub fn acquire(path: &Path) -> Value {
    match read_input(path) {
        Ok(value) => value,
        Err(error) => {
            tracing::debug!(path = %path.display(), %error, "implicit input unavailable");
            Value::empty_string()
        }
    }
}

fn read_input(path: &Path) -> Result<Value, InputError> {
    let text = std::fs::read_to_string(path)?;
    Ok(cast(text.trim_end())?)
}
