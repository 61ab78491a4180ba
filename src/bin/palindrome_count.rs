use std::env;
use std::ffi::OsString;
use std::io::{self, Write};

use palindrome_count::{
    run_self_check, CodePoints, PalindromeCounter, SelfCheckError, SelfCheckOutcome, SymbolSeq,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_INPUT: &str = "abbcbc";

const EXIT_SELF_CHECK_FAILED: i32 = 1;
const EXIT_USAGE: i32 = 2;

fn main() {
    let options = match Options::parse(env::args_os().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("palindrome_count: {err}");
            Options::print_help();
            std::process::exit(EXIT_USAGE);
        }
    };

    init_logger(options.verbose);

    let stdout = io::stdout();
    let code = match run(&options, &mut stdout.lock(), run_self_check) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("palindrome_count: output error: {err}");
            1
        }
    };
    std::process::exit(code);
}

/// Count the selected input, print the result, then run `self_check` unless
/// disabled. Returns the process exit code.
fn run<W, F>(options: &Options, out: &mut W, self_check: F) -> io::Result<i32>
where
    W: Write,
    F: FnOnce() -> Result<(), SelfCheckError>,
{
    let input = options.input.as_deref().unwrap_or(DEFAULT_INPUT);
    let code_points = CodePoints::new(input);
    let counter = PalindromeCounter::new(&code_points);
    tracing::debug!(len = code_points.len(), "counting input");

    if options.report {
        let report = counter.report();
        writeln!(out, "total: {}", report.total)?;
        writeln!(out, "odd: {}", report.odd)?;
        writeln!(out, "even: {}", report.even)?;
        match report.longest {
            Some(span) => writeln!(
                out,
                "longest: {:?} [{}, {})",
                code_points.slice_to_string(span.start, span.end),
                span.start,
                span.end
            )?,
            None => writeln!(out, "longest: none")?,
        }
    } else {
        writeln!(out, "{}", counter.count())?;
    }

    if options.self_check {
        let outcome = SelfCheckOutcome::from(self_check());
        writeln!(out, "{outcome}")?;
        if !outcome.passed() {
            tracing::error!("self-check failed");
            return Ok(EXIT_SELF_CHECK_FAILED);
        }
    }

    Ok(0)
}

struct Options {
    input: Option<String>,
    report: bool,
    self_check: bool,
    verbose: bool,
}

impl Options {
    fn parse<I>(args: I) -> Result<Self, String>
    where
        I: Iterator<Item = OsString>,
    {
        let mut options = Options {
            input: None,
            report: false,
            self_check: true,
            verbose: false,
        };
        let mut positional_only = false;

        for arg in args {
            let arg = arg
                .into_string()
                .map_err(|_| "input is not valid UTF-8".to_string())?;
            if !positional_only && arg.starts_with('-') && arg != "-" {
                match arg.as_str() {
                    "-h" | "--help" => {
                        Options::print_help();
                        std::process::exit(0);
                    }
                    "--report" => options.report = true,
                    "--no-self-check" => options.self_check = false,
                    "-v" | "--verbose" => options.verbose = true,
                    "--" => positional_only = true,
                    other => return Err(format!("unknown argument '{other}'")),
                }
            } else if options.input.is_some() {
                return Err("expected at most one input string".to_string());
            } else {
                options.input = Some(arg);
            }
        }

        Ok(options)
    }

    fn print_help() {
        println!(
            "\
Usage: palindrome_count [options] [--] [INPUT]

Counts the palindromic substrings of INPUT (default: \"{DEFAULT_INPUT}\"),
comparing Unicode code points.

Options:
  --report            Print total, odd/even split and the longest palindrome
  --no-self-check     Skip the built-in assertion table
  -v, --verbose       Debug logging (RUST_LOG overrides)
  -h, --help          Print this help message

Exit status: 0 on success, 1 if the self-check fails, 2 on a usage error.

Examples:
  cargo run --bin palindrome_count
  cargo run --bin palindrome_count -- --report racecar
"
        );
    }
}

fn init_logger(verbose: bool) {
    let default_directive = if verbose {
        "palindrome_count=debug,info"
    } else {
        "palindrome_count=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}
