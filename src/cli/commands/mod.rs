//! CLI command implementations

pub mod extract;
