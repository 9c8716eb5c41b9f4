//! Fluent statement builders.
//!
//! ## Design
//!
//! - SQL is built from structured parts (table, columns, joins, a nested
//!   WHERE tree, grouping and ordering) and rendered on demand.
//! - Mutators take `&mut self` and return `&mut Self` for chaining.
//! - Nested groups are built on a disposable child builder whose tree is
//!   moved into the parent.
//! - Literals are inlined; executors receive no bound parameters.
//! - Safe default: DELETE requires WHERE (unless explicitly allowed).

pub mod clauses;
pub mod delete;
pub mod select;
pub mod table;
pub mod traits;
pub mod where_builder;

pub use clauses::{Direction, GroupBy, Join, JoinKind, Joins, OrderBy, OrderByFields};
pub use delete::DeleteBuilder;
pub use select::QueryBuilder;
pub use table::Table;
pub use traits::{MutationBuilder, SqlBuilder};
pub use where_builder::WhereBuilder;

#[cfg(test)]
mod tests;
