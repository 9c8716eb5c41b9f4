use super::traits::{MutationBuilder, SqlBuilder};
use super::where_builder::WhereBuilder;
use crate::error::{QbError, QbResult};
use crate::wheres::Wheres;

/// DELETE statement builder.
///
/// Shares the predicate API of [`QueryBuilder`](super::QueryBuilder) through
/// [`WhereBuilder`]. An unfiltered delete is refused unless explicitly
/// allowed.
#[derive(Debug, Clone)]
pub struct DeleteBuilder {
    table: String,
    wheres: Wheres,
    allow_delete_all: bool,
}

impl DeleteBuilder {
    /// Create a DELETE for `table` with no predicates.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            wheres: Wheres::new(),
            allow_delete_all: false,
        }
    }

    /// Build a DELETE that reuses an existing WHERE tree.
    pub fn with_wheres(table: impl Into<String>, wheres: Wheres) -> Self {
        Self {
            table: table.into(),
            wheres,
            allow_delete_all: false,
        }
    }

    /// Allow deleting every row (no WHERE clause).
    pub fn allow_delete_all(&mut self, allow: bool) -> &mut Self {
        self.allow_delete_all = allow;
        self
    }

    /// Render the statement.
    pub fn to_sql(&self) -> QbResult<String> {
        let mut sql = format!("delete from {}", self.table);
        if !self.wheres.is_empty() {
            sql.push_str(" where ");
            sql.push_str(&self.wheres.render()?);
        }
        Ok(sql)
    }
}

impl WhereBuilder for DeleteBuilder {
    fn wheres_mut(&mut self) -> &mut Wheres {
        &mut self.wheres
    }
}

impl SqlBuilder for DeleteBuilder {
    fn build_sql(&self) -> QbResult<String> {
        self.to_sql()
    }

    fn validate(&self) -> QbResult<()> {
        if self.wheres.is_empty() && !self.allow_delete_all {
            return Err(QbError::validation(
                "DELETE without WHERE is not allowed; call allow_delete_all(true) to override",
            ));
        }
        Ok(())
    }
}

impl MutationBuilder for DeleteBuilder {}
