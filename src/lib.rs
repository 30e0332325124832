//! This library provides the parsing and classification rules behind the fizzbuzz binary
//!

#![warn(missing_docs)]

/// A module for turning integers into their FizzBuzz text
pub mod classify;
/// A module for strictly parsing command line arguments into numeric values
pub mod parse;
/// A module for printing diagnostics to the error stream
pub mod printer;
