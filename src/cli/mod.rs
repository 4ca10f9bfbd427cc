//! Command line interface.

mod check;
mod clean;
mod commands;
mod generate;

pub use commands::{is_verbose, run};
