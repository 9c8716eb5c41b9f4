//! Common imports for building and running statements.
//!
//! ```ignore
//! use fluentsql::prelude::*;
//! ```

pub use crate::{
    DeleteBuilder, GenericClient, MutationBuilder, QbError, QbResult, QueryBuilder, SqlBuilder,
    Table, Value, WhereBuilder,
};
