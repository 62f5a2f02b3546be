use crate::command::CommandError;
use crate::value::{HostFault, Value};
use compact_str::{format_compact, ToCompactString};
use std::error::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("{source}")]
    Uncaught {
        line: u32,
        #[source]
        source: CommandError,
    },
}

impl RunError {
    pub fn line(&self) -> u32 {
        match self {
            RunError::Uncaught { line, .. } => *line,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            RunError::Uncaught { source, .. } => source.code(),
        }
    }

    /// The error as a displayable value, with its cause chain as the trace.
    pub fn fault(&self) -> Value {
        let mut trace = vec![format_compact!("    at line {}", self.line())];
        let mut cause = self.source().and_then(|source| source.source());
        while let Some(error) = cause {
            trace.push(format_compact!("    caused by: {error}"));
            cause = error.source();
        }
        Value::Fault(HostFault {
            message: self.to_compact_string(),
            trace,
        })
    }
}
