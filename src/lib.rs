pub mod command;
pub mod interpreter;
pub mod loader;
pub mod value;

use command::Registry;
use interpreter::surface::StdioSurface;
use interpreter::{input, Context, Interpreter, RunError, RunOptions};
use value::Value;

/// Runs `source` with the built-in commands, showing outputs on stdout.
pub fn run(source: &str, options: RunOptions) -> Result<Value, RunError> {
    let input = input::acquire(&options.input_path);
    let mut surface = StdioSurface;
    let context = Context::new(options, input, &mut surface);
    Interpreter::new(Registry::with_builtins(), context).run(source)
}
