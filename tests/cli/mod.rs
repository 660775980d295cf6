//! CLI tests module

#[cfg(feature = "cli")]
pub mod extract_tests;
