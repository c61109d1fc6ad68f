use std::{
    io::{self, BufRead},
    process::ExitCode,
};

use clap::Parser;
use log::{debug, warn};
use radixcalc::interpreter::{
    evaluator::core::{Context, Evaluation},
    options::{COMMAND_LINE_INTRODUCER, HELP_TEXT, Options},
};

/// radixcalc is an arbitrary-precision calculator for integers, reals and
/// complex numbers in binary, octal, decimal and hexadecimal.
///
/// Arguments that are options configure the session; the remaining ones are
/// joined with spaces and evaluated as a single expression. Without an
/// expression, lines are read from standard input until it ends.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, disable_help_flag = true)]
struct Args {
    /// Options such as `-w32`, `-ox` or `-pr20`, and expression fragments.
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    arguments: Vec<String>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let mut options = Options::default();
    let expression = args.arguments
                         .iter()
                         .filter(|arg| !options.interpret_arg(arg, COMMAND_LINE_INTRODUCER))
                         .map(String::as_str)
                         .collect::<Vec<_>>()
                         .join(" ");
    debug!("starting with {:?}", options.config);

    if options.counts.help > 0 {
        print!("{HELP_TEXT}");
        return ExitCode::SUCCESS;
    }

    let mut context = Context::new(options);
    if !expression.is_empty() {
        return if report(&mut context, &expression) {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }

    for line in io::stdin().lock().lines() {
        match line {
            Ok(line) => {
                report(&mut context, &line);
            },
            Err(e) => {
                warn!("stopped reading input: {e}");
                break;
            },
        }
    }
    ExitCode::SUCCESS
}

/// Evaluates one line and prints its outcome; returns `false` on error.
fn report(context: &mut Context, line: &str) -> bool {
    match context.evaluate(line) {
        Ok(Evaluation::Value(value)) => {
            println!("{}", context.render(&value));
            true
        },
        Ok(Evaluation::Help) => {
            print!("{HELP_TEXT}");
            true
        },
        Ok(Evaluation::Deleted | Evaluation::Configured | Evaluation::Empty) => true,
        Err(e) => {
            eprintln!("{e}");
            false
        },
    }
}
