use super::focus::{Focus, FocusItem};
use super::surface::DisplaySurface;
use super::RunOptions;
use crate::value::formatter::{self, BasicFormatter, ValueFormatter};
use crate::value::{LanguageError, Value};

/// State of a single run. Commands read and mutate it through `&mut`.
pub struct Context<'s> {
    outputs: Vec<Value>,
    options: RunOptions,
    focus: Focus,
    line: u32,
    stop: bool,
    surface: &'s mut dyn DisplaySurface,
    formatter: Box<dyn ValueFormatter>,
}

impl<'s> Context<'s> {
    pub fn new(options: RunOptions, input: Value, surface: &'s mut dyn DisplaySurface) -> Self {
        let formatter = options.display.formatter();
        Self {
            outputs: Vec::new(),
            options,
            focus: Focus::new(input),
            line: 0,
            stop: false,
            surface,
            formatter,
        }
    }

    pub fn outputs(&self) -> &[Value] {
        &self.outputs
    }

    pub fn options(&self) -> &RunOptions {
        &self.options
    }

    pub fn focus(&self) -> &[FocusItem] {
        self.focus.items()
    }

    pub fn focus_mut(&mut self) -> &mut [FocusItem] {
        self.focus.items_mut()
    }

    /// The whole focus as a list of working-bearing values.
    pub fn focus_value(&self) -> Value {
        self.focus.to_value()
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn is_stopped(&self) -> bool {
        self.stop
    }

    /// Ends the run once the current line has finished.
    pub fn stop(&mut self) {
        self.stop = true;
    }

    /// Records `value` and shows it unless the run is silent.
    pub fn output(&mut self, value: Value) {
        if !self.options.silent {
            let text = self.formatter.format(&value, self.line);
            self.surface.writeln(&text);
        }
        self.outputs.push(value);
    }

    pub fn pprint(&mut self, value: &Value) {
        let text = self.formatter.format(value, self.line);
        self.surface.writeln(&text);
    }

    pub fn pretty(&self, value: &Value) -> String {
        formatter::pretty(value, self.line)
    }

    pub fn format(&self, template: &str, substitutions: &[Value]) -> String {
        formatter::format(template, substitutions, &BasicFormatter, self.line)
    }

    pub fn error(&self, template: &str, substitutions: &[Value]) -> Value {
        Value::Error(LanguageError::new(template, substitutions, self.line))
    }

    pub(super) fn advance_line(&mut self) -> u32 {
        self.line += 1;
        self.line
    }

    pub(super) fn output_focus(&mut self) {
        let focus = self.focus_value();
        self.output(focus);
    }

    pub(super) fn into_outputs(self) -> Vec<Value> {
        self.outputs
    }
}

impl std::fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("outputs", &self.outputs)
            .field("options", &self.options)
            .field("focus", &self.focus)
            .field("line", &self.line)
            .field("stop", &self.stop)
            .finish_non_exhaustive()
    }
}
