//! Data models for hamdir.

mod entry;

pub use entry::{Directory, NodeExtension, UserExtension};
