//! CLI support: command handlers and error type

pub mod commands;
pub mod error;
