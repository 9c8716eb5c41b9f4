//! # fluentsql
//!
//! A fluent SELECT / DELETE statement builder for Postgres.
//!
//! ## Features
//!
//! - **Fluent construction**: chain columns, joins, predicates, grouping and
//!   ordering on a `&mut` builder
//! - **Predicate trees**: AND/OR leaves and nested groups rendered in a fixed,
//!   predictable order
//! - **Inline literals**: values are rendered into the SQL text; the executor
//!   receives no bind parameters
//! - **Explicit executors**: statements run against any [`GenericClient`]
//!   you pass in (client, transaction, or your own)
//! - **Safe defaults**: DELETE requires WHERE
//! - **Logging**: executed SQL is reported through `tracing` under the
//!   `fluentsql.sql` and `fluentsql.table` targets
//!
//! ## Example
//!
//! ```rust
//! use fluentsql::{QueryBuilder, WhereBuilder};
//!
//! let mut qb = QueryBuilder::new("users u");
//! qb.select("r.name")
//!     .left_join("roles r", "r.id", "=", "u.role_id")
//!     .and_in("u.status", [1, 2])
//!     .or_group(|g| {
//!         g.and_eq("u.admin", true).and_is_null("u.deleted_at");
//!     })
//!     .order_by_desc("u.id");
//!
//! assert_eq!(
//!     qb.to_sql().unwrap(),
//!     "select *,r.name from users u left join roles r on r.id = u.role_id \
//!      where u.status in (1,2) Or (u.admin = true AND u.deleted_at is null) \
//!      order by u.id desc"
//! );
//! ```
//!
//! Executing against a database:
//!
//! ```ignore
//! use fluentsql::{SqlBuilder, Table, WhereBuilder};
//!
//! let mut users = Table::new("users", &client);
//! users.and_eq("status", 1).order_by_desc("id");
//! let rows = users.get().await?;
//! let total = users.count().await?;
//! ```

pub mod builder;
pub mod client;
pub mod condition;
pub mod error;
pub mod prelude;
pub mod value;
pub mod wheres;

pub use builder::{
    DeleteBuilder, Direction, JoinKind, MutationBuilder, QueryBuilder, SqlBuilder, Table,
    WhereBuilder,
};
pub use client::GenericClient;
pub use condition::{Condition, Connector};
pub use error::{QbError, QbResult};
pub use value::Value;
pub use wheres::Wheres;
