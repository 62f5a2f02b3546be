pub mod context;
pub mod error;
pub mod focus;
pub mod input;
pub mod surface;

use crate::command::CommandError;
use crate::loader;
use crate::value::formatter::{BasicFormatter, DebugFormatter, PrettyFormatter, ValueFormatter};
use crate::value::Value;
pub use context::Context;
pub use error::RunError;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayFormat {
    Debug,
    Basic,
    #[default]
    Pretty,
}

impl DisplayFormat {
    pub fn formatter(self) -> Box<dyn ValueFormatter> {
        match self {
            DisplayFormat::Debug => Box::new(DebugFormatter),
            DisplayFormat::Basic => Box::new(BasicFormatter),
            DisplayFormat::Pretty => Box::new(PrettyFormatter),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Suppresses display only; outputs are still collected.
    pub silent: bool,
    pub display: DisplayFormat,
    pub input_path: PathBuf,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            silent: false,
            display: DisplayFormat::default(),
            input_path: PathBuf::from(input::DEFAULT_INPUT_PATH),
        }
    }
}

/// Executes one cleaned, non-empty line against the context.
///
/// An `Err` is a host-level failure and aborts the run. Language-level errors
/// are values and belong in the context instead.
pub trait Evaluator {
    fn evaluate(&mut self, line: &str, context: &mut Context<'_>) -> Result<(), CommandError>;
}

impl<E: Evaluator + ?Sized> Evaluator for &mut E {
    fn evaluate(&mut self, line: &str, context: &mut Context<'_>) -> Result<(), CommandError> {
        (**self).evaluate(line, context)
    }
}

pub struct Interpreter<'s, E: Evaluator> {
    evaluator: E,
    context: Context<'s>,
}

impl<'s, E> Interpreter<'s, E>
where
    E: Evaluator,
{
    pub fn new(evaluator: E, context: Context<'s>) -> Self {
        Self { evaluator, context }
    }

    /// Runs every line of `source`, then records the implicit output of the
    /// focus.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn execute(mut self, source: &str) -> Result<Finished<'s>, RunError> {
        let lines = loader::load(source);
        let mut dispatched = 0usize;
        for text in lines {
            let line = self.context.advance_line();
            if text.is_empty() {
                tracing::trace!(line, "skipping blank line");
                continue;
            }
            tracing::debug!(line, text, "dispatching");
            self.evaluator
                .evaluate(text, &mut self.context)
                .map_err(|source| RunError::Uncaught { line, source })?;
            dispatched += 1;
            if self.context.is_stopped() {
                tracing::debug!(line, "stop signal raised");
                break;
            }
        }
        self.context.output_focus();
        tracing::debug!(
            lines = self.context.line(),
            dispatched,
            outputs = self.context.outputs().len(),
            "run finished"
        );
        Ok(Finished {
            context: self.context,
        })
    }

    pub fn run(self, source: &str) -> Result<Value, RunError> {
        Ok(self.execute(source)?.collapse())
    }
}

/// A run that reached its end, normally or through the stop signal.
#[derive(Debug)]
pub struct Finished<'s> {
    context: Context<'s>,
}

impl<'s> Finished<'s> {
    pub fn context(&self) -> &Context<'s> {
        &self.context
    }

    pub fn collapse(self) -> Value {
        collapse(self.context.into_outputs())
    }
}

/// Flattens `outputs` and replaces working-bearing elements by their working
/// value, unless that value is undefined. A single element comes back
/// unwrapped.
pub fn collapse(outputs: Vec<Value>) -> Value {
    let mut flattened = Vec::with_capacity(outputs.len());
    flatten_into(outputs, &mut flattened);
    if flattened.len() == 1 {
        if let Some(value) = flattened.pop() {
            return value;
        }
    }
    Value::List(flattened)
}

fn flatten_into(values: Vec<Value>, flattened: &mut Vec<Value>) {
    for value in values {
        match value {
            Value::List(values) => flatten_into(values, flattened),
            Value::Item(item) if item.working != Value::Undefined => flattened.push(item.working),
            value => flattened.push(value),
        }
    }
}
