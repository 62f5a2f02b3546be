use ariadne::{Color, Fmt, Label, Report, ReportKind, Source};
use clap::{Parser, Subcommand, ValueEnum};
use clover::command::Registry;
use clover::interpreter::surface::StdioSurface;
use clover::interpreter::{input, Context, DisplayFormat, Interpreter, RunError, RunOptions};
use clover::loader::{self, LineBreaks};
use color_eyre::eyre::Result;
use std::path::{Path, PathBuf};
use std::{fs::read_to_string, process::ExitCode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Parser)]
#[clap(name = "clover", version)]
pub struct CLArgs {
    #[clap(subcommand)]
    pub routine: CloverCommand,
}

#[derive(Debug, Subcommand)]
pub enum CloverCommand {
    /// Print the cleaned, numbered command lines of a program.
    Lines { path: PathBuf },
    /// Run a program.
    Run {
        path: PathBuf,
        #[clap(long)]
        silent: bool,
        /// File holding the implicit input.
        #[clap(long = "input", default_value = input::DEFAULT_INPUT_PATH)]
        input: PathBuf,
        #[clap(long = "format", value_enum, default_value = "pretty")]
        format: ValueFormat,
        /// Print the collapsed return value when the run ends.
        #[clap(long)]
        result: bool,
    },
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ValueFormat {
    Debug,
    Basic,
    Pretty,
}

impl From<ValueFormat> for DisplayFormat {
    fn from(value: ValueFormat) -> Self {
        match value {
            ValueFormat::Debug => DisplayFormat::Debug,
            ValueFormat::Basic => DisplayFormat::Basic,
            ValueFormat::Pretty => DisplayFormat::Pretty,
        }
    }
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let args = CLArgs::parse();
    match args.routine {
        CloverCommand::Lines { path } => {
            let src = read_to_string(path)?;
            for (index, line) in loader::load(&src).iter().enumerate() {
                println!("{:>4} | {line}", index + 1);
            }
            Ok(ExitCode::SUCCESS)
        }
        CloverCommand::Run {
            path,
            silent,
            input,
            format,
            result,
        } => {
            tracing::info!(path = %path.display(), "running");
            let src = read_to_string(&path)?;
            let options = RunOptions {
                silent,
                display: format.into(),
                input_path: input,
            };
            run(&src, &path, options, result)
        }
    }
}

fn run(src: &str, path: &Path, options: RunOptions, print_result: bool) -> Result<ExitCode> {
    let formatter = options.display.formatter();
    let input = input::acquire(&options.input_path);
    let mut surface = StdioSurface;
    let context = Context::new(options, input, &mut surface);
    match Interpreter::new(Registry::with_builtins(), context).execute(src) {
        Ok(finished) => {
            let line = finished.context().line();
            let value = finished.collapse();
            if print_result {
                println!("{}", formatter.format(&value, line));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            eprintln!("{}", formatter.format(&error.fault(), error.line()));
            eprintln!("{}", report(src, path, &error)?);
            Ok(ExitCode::from(70))
        }
    }
}

fn report(src: &str, path: &Path, error: &RunError) -> Result<String> {
    let path = path.to_string_lossy();
    let path: &str = &path;
    let span = LineBreaks::new(src)
        .get_line_range(error.line())
        .unwrap_or(0..src.len());
    let mut output = std::io::Cursor::new(Vec::new());
    Report::build(ReportKind::Error, (path, span.clone()))
        .with_code(error.code())
        .with_message("The run was aborted by an uncaught error")
        .with_label(
            Label::new((path, span))
                .with_message(format!("{}", error.to_string().fg(Color::BrightRed)))
                .with_color(Color::BrightRed),
        )
        .finish()
        .write((path, Source::from(src)), &mut output)?;
    Ok(String::from_utf8(output.into_inner())?)
}
