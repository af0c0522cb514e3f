//! Statement builders.
//!
//! Thin consumers of the composition engine: a [`Table`] renders as one
//! bracketed literal and a [`Select`] composes
//! `SELECT {fields} FROM {table} {filter} {order}` by flattening its parts.

pub mod select;
pub mod table;

pub use select::Select;
pub use table::Table;
