use super::{Command, CommandError, Registry};
use crate::interpreter::Context;
use crate::value::Value;

pub(super) fn register_all(registry: &mut Registry) {
    registry.register(Show);
    registry.register(Stop);
    registry.register(Set);
    registry.register(Reset);
    registry.register(Remember);
    registry.register(Recall);
    for operator in [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ] {
        registry.register(Arithmetic(operator));
    }
}

fn single<'a>(command: &dyn Command, arguments: &'a [Value]) -> Result<&'a Value, CommandError> {
    match arguments {
        [argument] => Ok(argument),
        _ => Err(CommandError::InvalidArgumentCount {
            name: command.get_name().into(),
            actual: arguments.len(),
            expected: 1,
        }),
    }
}

#[derive(Debug)]
struct Show;

impl Command for Show {
    fn get_name(&self) -> &'static str {
        "show"
    }

    fn get_parameters(&self) -> &'static [&'static str] {
        &[]
    }

    fn call(&self, arguments: &[Value], context: &mut Context<'_>) -> Result<(), CommandError> {
        let _ = arguments;
        let focus = context.focus_value();
        context.output(focus);
        Ok(())
    }
}

#[derive(Debug)]
struct Stop;

impl Command for Stop {
    fn get_name(&self) -> &'static str {
        "stop"
    }

    fn get_parameters(&self) -> &'static [&'static str] {
        &[]
    }

    fn call(&self, arguments: &[Value], context: &mut Context<'_>) -> Result<(), CommandError> {
        let _ = arguments;
        context.stop();
        Ok(())
    }
}

#[derive(Debug)]
struct Set;

impl Command for Set {
    fn get_name(&self) -> &'static str {
        "set"
    }

    fn get_parameters(&self) -> &'static [&'static str] {
        &["value"]
    }

    fn call(&self, arguments: &[Value], context: &mut Context<'_>) -> Result<(), CommandError> {
        let value = single(self, arguments)?;
        for item in context.focus_mut() {
            item.working = value.clone();
        }
        Ok(())
    }
}

#[derive(Debug)]
struct Reset;

impl Command for Reset {
    fn get_name(&self) -> &'static str {
        "reset"
    }

    fn get_parameters(&self) -> &'static [&'static str] {
        &[]
    }

    fn call(&self, arguments: &[Value], context: &mut Context<'_>) -> Result<(), CommandError> {
        let _ = arguments;
        for item in context.focus_mut() {
            item.working = item.input.clone();
        }
        Ok(())
    }
}

#[derive(Debug)]
struct Remember;

impl Command for Remember {
    fn get_name(&self) -> &'static str {
        "remember"
    }

    fn get_parameters(&self) -> &'static [&'static str] {
        &["name"]
    }

    fn call(&self, arguments: &[Value], context: &mut Context<'_>) -> Result<(), CommandError> {
        let name = single(self, arguments)?.to_string();
        for item in context.focus_mut() {
            let working = item.working.clone();
            item.storage.set(&name, working);
        }
        Ok(())
    }
}

#[derive(Debug)]
struct Recall;

impl Command for Recall {
    fn get_name(&self) -> &'static str {
        "recall"
    }

    fn get_parameters(&self) -> &'static [&'static str] {
        &["name"]
    }

    fn call(&self, arguments: &[Value], context: &mut Context<'_>) -> Result<(), CommandError> {
        let name = single(self, arguments)?.to_string();
        for item in context.focus_mut() {
            item.working = item.storage.get(&name).cloned().unwrap_or(Value::Undefined);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    fn name(self) -> &'static str {
        match self {
            Operator::Add => "add",
            Operator::Subtract => "subtract",
            Operator::Multiply => "multiply",
            Operator::Divide => "divide",
        }
    }

    fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
        }
    }
}

/// Applies an operator to every working value. Operands that are not numbers
/// turn the working value into a language error; an existing error is kept.
#[derive(Debug)]
struct Arithmetic(Operator);

impl Command for Arithmetic {
    fn get_name(&self) -> &'static str {
        self.0.name()
    }

    fn get_parameters(&self) -> &'static [&'static str] {
        &["operand"]
    }

    fn call(&self, arguments: &[Value], context: &mut Context<'_>) -> Result<(), CommandError> {
        let operator = self.0;
        let operand = single(self, arguments)?;
        let results: Vec<Option<Value>> = context
            .focus()
            .iter()
            .map(|item| match (&item.working, item.working.as_number(), operand.as_number()) {
                (Value::Error(_), _, _) => None,
                (_, Some(lhs), Some(rhs)) => Some(Value::Number(operator.apply(lhs, rhs))),
                (working, None, _) => Some(context.error(
                    "cannot %s %t: working value %t is not a number",
                    &[operator.name().into(), operand.clone(), working.clone()],
                )),
                (_, Some(_), None) => Some(context.error(
                    "cannot %s %t: not a number",
                    &[operator.name().into(), operand.clone()],
                )),
            })
            .collect();
        for (item, result) in context.focus_mut().iter_mut().zip(results) {
            if let Some(working) = result {
                item.working = working;
            }
        }
        Ok(())
    }
}
