use std::{fs, io, process::ExitCode};

use clap::Parser;
use reckon::{
    calculate_with,
    interpreter::evaluator::core::{Context, DivisionMode, OverflowMode},
};
use tracing::Level;

/// reckon evaluates arithmetic expressions made of numbers, `+ - * /`,
/// parentheses and unary minus.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells reckon to read the expression from the file named by CONTENTS.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// How integer/integer division is treated: real, exact or truncate.
    #[arg(long, default_value_t = DivisionMode::default())]
    division: DivisionMode,

    /// How integer overflow is treated: promote or fail.
    #[arg(long, default_value_t = OverflowMode::default())]
    overflow: OverflowMode,

    /// Logs pipeline stages to standard error; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The expression to evaluate. One line is read from standard input when
    /// omitted.
    contents: Option<String>,
}

const fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn read_source(args: &Args) -> io::Result<String> {
    match &args.contents {
        Some(path) if args.file => fs::read_to_string(path),
        Some(expression) => Ok(expression.clone()),
        None => {
            let mut line = String::new();
            io::stdin().read_line(&mut line)?;
            Ok(line)
        },
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt().with_max_level(log_level(args.verbose))
                             .with_target(false)
                             .with_writer(io::stderr)
                             .init();

    let source = match read_source(&args) {
        Ok(source) => source,
        Err(e) => {
            if args.file {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          args.contents.as_deref().unwrap_or_default());
            } else {
                eprintln!("Failed to read from standard input: {e}");
            }
            return ExitCode::FAILURE;
        },
    };

    let context = Context::new().with_division(args.division)
                                .with_overflow(args.overflow);

    match calculate_with(&source, &context) {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
