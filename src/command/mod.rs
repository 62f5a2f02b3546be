mod builtin;
mod token;

use crate::interpreter::{Context, Evaluator};
use crate::value::Value;
use compact_str::{CompactString, ToCompactString};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
pub use token::{cast, tokenize};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CommandError {
    #[error("Empty instruction")]
    EmptyInstruction,
    #[error("Unterminated string: {0}")]
    UnterminatedString(CompactString),
    #[error("Unknown command: {0}")]
    UnknownCommand(CompactString),
    #[error("Invalid argument count for {name}: {actual} of {expected}")]
    InvalidArgumentCount {
        name: CompactString,
        actual: usize,
        expected: usize,
    },
}

impl CommandError {
    pub fn code(&self) -> &'static str {
        match self {
            CommandError::EmptyInstruction => "CM001",
            CommandError::UnterminatedString(_) => "CM002",
            CommandError::UnknownCommand(_) => "CM003",
            CommandError::InvalidArgumentCount { .. } => "CM004",
        }
    }
}

/// A line split into a command name and its cast arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    pub name: CompactString,
    pub arguments: Vec<Value>,
}

impl Instruction {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let tokens = tokenize(line)?;
        let (name, arguments) = tokens
            .split_first()
            .ok_or(CommandError::EmptyInstruction)?;
        let arguments = arguments
            .iter()
            .map(|token| cast(token))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            name: name.to_compact_string(),
            arguments,
        })
    }
}

pub trait Command: std::fmt::Debug + Send + Sync {
    fn get_name(&self) -> &'static str;
    fn get_parameters(&self) -> &'static [&'static str];
    fn call(&self, arguments: &[Value], context: &mut Context<'_>) -> Result<(), CommandError>;
}

/// Commands by name. Dispatches lines as an [`Evaluator`].
#[derive(Debug, Clone, Default)]
pub struct Registry {
    commands: HashMap<CompactString, Arc<dyn Command>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        builtin::register_all(&mut registry);
        registry
    }

    pub fn register<C: Command + 'static>(&mut self, command: C) {
        self.commands
            .insert(command.get_name().to_compact_string(), Arc::new(command));
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Command>> {
        self.commands.get(name)
    }
}

impl Evaluator for Registry {
    fn evaluate(&mut self, line: &str, context: &mut Context<'_>) -> Result<(), CommandError> {
        let instruction = Instruction::parse(line)?;
        let command = self
            .get(&instruction.name)
            .ok_or_else(|| CommandError::UnknownCommand(instruction.name.clone()))?;
        let expected = command.get_parameters().len();
        if instruction.arguments.len() != expected {
            return Err(CommandError::InvalidArgumentCount {
                name: instruction.name,
                actual: instruction.arguments.len(),
                expected,
            });
        }
        command.call(&instruction.arguments, context)
    }
}
