use std::fs;

use abacus::evaluate;
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

/// abacus evaluates arithmetic expressions, one per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells abacus to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Rounds every printed result to this many decimal places.
    #[arg(short, long)]
    digits: Option<usize>,

    /// Increases log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG`
    /// takes precedence when set.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    contents: String,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();
}

fn format_result(value: f64, digits: Option<usize>) -> String {
    match digits {
        Some(digits) => format!("{value:.digits$}"),
        None => value.to_string(),
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    match evaluate(&script) {
        Ok(results) => {
            for value in results {
                println!("{}", format_result(value, args.digits));
            }
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_are_rounded_on_request() {
        assert_eq!(format_result(0.1 + 0.2, Some(2)), "0.30");
        assert_eq!(format_result(5.0, None), "5");
        assert_eq!(format_result(-2.5, None), "-2.5");
    }

    #[test]
    fn verbosity_flags_are_counted() {
        let args = Args::try_parse_from(["abacus", "-vv", "1 + 1"]).unwrap();
        assert_eq!(args.verbose, 2);
        assert!(!args.file);
        assert_eq!(args.contents, "1 + 1");
    }
}
