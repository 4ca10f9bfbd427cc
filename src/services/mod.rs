//! Service layer for hamdir business logic.
//!
//! This module contains domain logic separated from UI concerns:
//! parsing the extracted page text and rendering the output formats.

pub mod export;
pub mod extract;

pub use export::{remove_outputs, write_outputs, OutputSelection};
pub use extract::parse_directory;
