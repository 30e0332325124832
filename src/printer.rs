use std::fmt::Display;

use colored::{Color, Colorize};

fn print_dbg<C: Into<Color>, D: Display>(name: &str, msg: D, color: C) {
    eprintln!("{}: {}", name.color(color).dimmed(), msg);
}

const FIZZBUZZ_COLOR: Color = Color::Yellow;

/// Prints a diagnostic line to stderr.
///
/// The line is written verbatim, with no prefix or color. The exact bytes of
/// the failure diagnostic are part of the command line contract.
pub fn println_fizzbuzz_error<D: Display>(msg: D) {
    eprintln!("{}", msg);
}

/// Prints a colored progress line to stderr, keeping stdout free for the
/// counted output.
pub fn println_fizzbuzz_dbg<D: Display>(msg: D) {
    print_dbg("fizzbuzz", msg, FIZZBUZZ_COLOR);
}
