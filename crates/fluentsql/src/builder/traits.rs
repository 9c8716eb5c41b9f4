use crate::client::GenericClient;
use crate::error::QbResult;
use tokio_postgres::Row;

/// Base trait for SQL builders.
///
/// Literals are inlined into the rendered text, so executors are always
/// called with an empty parameter list.
pub trait SqlBuilder: Sync {
    /// Build the SQL string.
    fn build_sql(&self) -> QbResult<String>;

    /// Validate builder state.
    fn validate(&self) -> QbResult<()> {
        Ok(())
    }

    /// Validate, then build.
    fn checked_sql(&self) -> QbResult<String> {
        self.validate()?;
        self.build_sql()
    }

    /// Execute query and return all rows.
    fn query(
        &self,
        conn: &impl GenericClient,
    ) -> impl std::future::Future<Output = QbResult<Vec<Row>>> + Send {
        async move {
            let sql = self.checked_sql()?;
            tracing::debug!(target: "fluentsql.sql", sql = %sql, "query");
            conn.query(&sql, &[]).await
        }
    }

    /// Execute query and return at most one row.
    fn query_opt(
        &self,
        conn: &impl GenericClient,
    ) -> impl std::future::Future<Output = QbResult<Option<Row>>> + Send {
        async move {
            let sql = self.checked_sql()?;
            tracing::debug!(target: "fluentsql.sql", sql = %sql, "query_opt");
            conn.query_opt(&sql, &[]).await
        }
    }

    /// Execute query and return exactly one row.
    fn query_one(
        &self,
        conn: &impl GenericClient,
    ) -> impl std::future::Future<Output = QbResult<Row>> + Send {
        async move {
            let sql = self.checked_sql()?;
            tracing::debug!(target: "fluentsql.sql", sql = %sql, "query_one");
            conn.query_one(&sql, &[]).await
        }
    }
}

/// Trait for mutation builders (DELETE).
pub trait MutationBuilder: SqlBuilder {
    /// Execute and return affected row count.
    fn execute(
        &self,
        conn: &impl GenericClient,
    ) -> impl std::future::Future<Output = QbResult<u64>> + Send {
        async move {
            let sql = self.checked_sql()?;
            tracing::debug!(target: "fluentsql.sql", sql = %sql, "execute");
            conn.execute(&sql, &[]).await
        }
    }
}
