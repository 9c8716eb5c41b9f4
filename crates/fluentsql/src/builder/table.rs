use super::delete::DeleteBuilder;
use super::select::QueryBuilder;
use super::traits::{MutationBuilder, SqlBuilder};
use super::where_builder::WhereBuilder;
use crate::client::GenericClient;
use crate::condition::{Condition, Connector};
use crate::error::{QbError, QbResult};
use crate::value::Value;
use crate::wheres::Wheres;
use std::ops::{Deref, DerefMut};
use tokio_postgres::Row;

/// A query bound to an explicit executor.
///
/// `Table` dereferences to its [`QueryBuilder`], so the whole fluent API is
/// available; the terminal methods render the statement and hand it to the
/// client it was created with. The executor is always passed in: there is no
/// default connection.
///
/// # Example
///
/// ```ignore
/// use fluentsql::{Table, WhereBuilder};
///
/// let mut users = Table::new("users", &client);
/// users.and_eq("status", "'active'").order_by_desc("id");
/// let rows = users.get().await?;
/// ```
pub struct Table<C> {
    query: QueryBuilder,
    client: C,
    primary_key: String,
}

impl<C: GenericClient> Table<C> {
    /// Bind a fresh query on `name` to `client`. The primary key defaults to `id`.
    pub fn new(name: impl Into<String>, client: C) -> Self {
        Self {
            query: QueryBuilder::new(name),
            client,
            primary_key: "id".to_string(),
        }
    }

    /// Override the primary key column (default `id`).
    pub fn with_primary_key(mut self, column: impl Into<String>) -> Self {
        self.primary_key = column.into();
        self
    }

    /// Primary key column used by [`find`](Self::find).
    pub fn primary_key(&self) -> &str {
        &self.primary_key
    }

    /// The bound executor.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Fetch all matching rows.
    pub async fn get(&self) -> QbResult<Vec<Row>> {
        tracing::trace!(target: "fluentsql.table", sql = ?self.query.to_sql(), "get");
        self.query.query(&self.client).await
    }

    /// Fetch the first matching row, if any.
    pub async fn first(&self) -> QbResult<Option<Row>> {
        let mut query = self.query.clone();
        query.limit(1);
        tracing::trace!(target: "fluentsql.table", sql = ?query.to_sql(), "first");
        query.query_opt(&self.client).await
    }

    /// Fetch the row whose primary key equals `id`.
    ///
    /// The existing predicates are wrapped in one AND group so an OR branch
    /// cannot bypass the key filter.
    pub async fn find(&self, id: impl Into<Value>) -> QbResult<Option<Row>> {
        let mut query = self.query.clone();
        let existing = std::mem::take(query.wheres_mut());
        let mut scoped = Wheres::new();
        scoped.push_group(Connector::And, existing);
        scoped.push(
            Connector::And,
            Condition::new(self.primary_key.as_str(), "=", id),
        );
        *query.wheres_mut() = scoped;
        query.limit(1);
        tracing::trace!(target: "fluentsql.table", sql = ?query.to_sql(), "find");
        query.query_opt(&self.client).await
    }

    /// Count matching rows.
    pub async fn count(&self) -> QbResult<i64> {
        tracing::trace!(target: "fluentsql.table", sql = ?self.query.to_count_sql(), "count");
        self.query.count(&self.client).await
    }

    /// Delete matching rows and return the affected row count.
    ///
    /// Refuses to run without a WHERE clause, and for queries with joins or
    /// a sub-select FROM, which a plain DELETE cannot express.
    pub async fn delete(&self) -> QbResult<u64> {
        if self.query.has_joins() {
            return Err(QbError::validation("DELETE cannot include joins"));
        }
        if self.query.has_sub_select() {
            return Err(QbError::validation("DELETE cannot target a sub-select"));
        }
        let table = self.query.table_sql()?;
        let delete = DeleteBuilder::with_wheres(table, self.query.wheres().clone());
        tracing::trace!(target: "fluentsql.table", sql = ?delete.to_sql(), "delete");
        delete.execute(&self.client).await
    }
}

impl<C> Deref for Table<C> {
    type Target = QueryBuilder;

    fn deref(&self) -> &Self::Target {
        &self.query
    }
}

impl<C> DerefMut for Table<C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.query
    }
}
