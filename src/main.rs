//! This binary counts from 1 up to a user supplied bound, printing each number according to the rules of FizzBuzz
//!

#![warn(missing_docs)]

use std::process::ExitCode;

use clap::Parser;
use fizzbuzz::classify::fizz_buzz;
use fizzbuzz::parse;
use fizzbuzz::printer::{println_fizzbuzz_dbg, println_fizzbuzz_error};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[arg(short, long, value_name = "VERBOSE")]
    verbose: bool,

    /// Upper bound to count up to, inclusive
    #[arg(value_name = "UPPER_BOUND", allow_hyphen_values = true)]
    upper_bound: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let args: Vec<String> = cli.upper_bound.into_iter().collect();
    let Some(upper_bound) = parse::upper_bound(&args, 0) else {
        println_fizzbuzz_error("Invalid argument for upper bound.");
        return ExitCode::FAILURE;
    };

    if cli.verbose {
        println_fizzbuzz_dbg(format!("Counting up to {}", upper_bound));
    }
    for i in 1..=upper_bound {
        println!("{}", fizz_buzz(i));
    }
    if cli.verbose {
        println_fizzbuzz_dbg("Done");
    }
    ExitCode::SUCCESS
}
