//! Command-line front end: argument parsing, terminal console and listing.

pub mod args;
pub mod console;
pub mod report;
