use std::{
    fs,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::Parser;
use mosho::{
    error::ParseError,
    interpreter::{
        evaluator::core::{DEFAULT_MAX_CALL_DEPTH, Evaluator},
        value::{core::Outcome, environment::Environment},
    },
    run_with,
};

/// mosho is a small scripting language with numbers, variables, `if`,
/// `while` and user-defined functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells mosho to read the script from a file instead of the command
    /// line.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode prints only the last value a script produces.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Maximum nesting of function calls before evaluation is aborted.
    #[arg(long, default_value_t = DEFAULT_MAX_CALL_DEPTH)]
    max_call_depth: usize,

    /// A script, or a path with `--file`. Starts the REPL when omitted.
    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let mut evaluator = Evaluator::stdout().with_max_call_depth(args.max_call_depth);

    let Some(contents) = args.contents else {
        return match repl(&mut evaluator, io::stdin().lock(), &mut io::stdout(), &mut io::stderr()) {
            Ok(true) => ExitCode::SUCCESS,
            Ok(false) => ExitCode::FAILURE,
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    };

    let script = if args.file {
        match fs::read_to_string(&contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents
    };

    let mut environment = Environment::new();
    match run_with(&mut evaluator, &script, &mut environment) {
        Ok(outcomes) => {
            let values: Vec<_> = outcomes.iter().flat_map(Outcome::values).collect();
            if args.pipe_mode {
                if let Some(last) = values.last() {
                    println!("{last}");
                }
            } else {
                for value in values {
                    println!("{value}");
                }
            }
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

/// Reads lines from `input` until end of file, evaluating each against one
/// environment.
///
/// A line that ends inside an unfinished construct is kept and the next line
/// is appended to it. Errors abort the current input only.
///
/// # Returns
/// `false` if input ended inside an unfinished construct.
fn repl<W: Write>(evaluator: &mut Evaluator<W>,
                  mut input: impl BufRead,
                  out: &mut impl Write,
                  err: &mut impl Write)
                  -> io::Result<bool> {
    let mut environment = Environment::new();
    let mut buffer = String::new();
    let mut pending = None;

    loop {
        write!(out, "{}", if buffer.is_empty() { "> " } else { "... " })?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return match pending {
                Some(e) => {
                    writeln!(err, "{e}")?;
                    Ok(false)
                },
                None => Ok(true),
            };
        }
        buffer.push_str(&line);

        match run_with(evaluator, &buffer, &mut environment) {
            Ok(outcomes) => {
                for value in outcomes.iter().flat_map(Outcome::values) {
                    writeln!(out, "{value}")?;
                }
            },
            Err(e) if e.downcast_ref::<ParseError>().is_some_and(ParseError::is_incomplete) => {
                pending = Some(e);
                continue;
            },
            Err(e) => writeln!(err, "{e}")?,
        }

        pending = None;
        buffer.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Feeds `input` to a REPL session and returns its stdout, stderr and
    /// whether it ended cleanly.
    fn session(input: &str) -> (String, String, bool) {
        let mut evaluator = Evaluator::new(Vec::new());
        let mut out = Vec::new();
        let mut err = Vec::new();

        let clean = repl(&mut evaluator, input.as_bytes(), &mut out, &mut err).unwrap();

        (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap(), clean)
    }

    #[test]
    fn repl_keeps_bindings_between_lines() {
        let (out, err, clean) = session("x = 4\nx * 2\n");

        assert_eq!(out, "> > 8.0\n> ");
        assert!(err.is_empty());
        assert!(clean);
    }

    #[test]
    fn repl_continues_unfinished_input() {
        let (out, _, clean) = session("if 1 {\n5\n}\n");

        assert_eq!(out, "> ... ... 5.0\n> ");
        assert!(clean);
    }

    #[test]
    fn repl_reports_errors_and_goes_on() {
        let (out, err, clean) = session("y\n1\n");

        assert_eq!(out, "> > 1.0\n> ");
        assert_eq!(err, "Error on line 1: Undefined name 'y'.\n");
        assert!(clean);
    }

    #[test]
    fn repl_reports_input_ending_mid_construct() {
        let (_, err, clean) = session("while 1 {\n");

        assert_eq!(err, "Error on line 2: Expected '}', found end of input.\n");
        assert!(!clean);
    }
}
