//! HamVoIP extension directory library.
//!
//! [`fetch`] retrieves the published directory PDF and [`pdf`] turns it
//! into page text. [`services`] holds the parsing core and the format
//! emitters on top of it. The parsing core is pure and does no I/O;
//! everything around it is collaborator glue owned by the CLI.

pub mod cli;
pub mod config;
pub mod fetch;
pub mod models;
pub mod pdf;
pub mod services;
pub mod utils;
