//! Models module
//!
//! Defines the grid read from a worksheet and the schema structures
//! extracted from it.

pub mod grid;
pub mod schema;

pub use grid::{Grid, is_present};
pub use schema::{Field, ModelRecord, SchemaDocument};
