use super::clauses::{Direction, GroupBy, Join, JoinKind, Joins, OrderByFields};
use super::traits::SqlBuilder;
use super::where_builder::WhereBuilder;
use crate::client::GenericClient;
use crate::error::{QbError, QbResult};
use crate::wheres::Wheres;

/// FROM target: a raw fragment or a sub-select rendered on demand.
#[derive(Debug, Clone)]
enum TableRef {
    Raw(String),
    Sub { query: Box<QueryBuilder>, alias: String },
}

impl TableRef {
    fn render(&self) -> QbResult<String> {
        match self {
            TableRef::Raw(table) => Ok(table.clone()),
            TableRef::Sub { query, alias } => Ok(format!("({}) as {}", query.to_sql()?, alias)),
        }
    }
}

/// Structured SELECT query builder.
///
/// # Example
///
/// ```rust
/// use fluentsql::builder::{QueryBuilder, WhereBuilder};
///
/// let mut qb = QueryBuilder::new("users");
/// qb.and_where("age", ">", 18).or_where("status", "=", "active");
/// assert_eq!(
///     qb.to_sql().unwrap(),
///     "select * from users where age > 18 Or status = active"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    /// Main table expression
    table: TableRef,
    /// SELECT columns (default ["*"])
    select_cols: Vec<String>,
    /// JOIN clauses
    joins: Joins,
    /// WHERE tree
    wheres: Wheres,
    /// GROUP BY columns
    group_by: GroupBy,
    /// ORDER BY directives
    order_by: OrderByFields,
    /// LIMIT
    limit: Option<i64>,
    /// OFFSET
    offset: Option<i64>,
}

impl QueryBuilder {
    /// Create a new query builder.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: TableRef::Raw(table.into()),
            select_cols: vec!["*".to_string()],
            joins: Joins::default(),
            wheres: Wheres::new(),
            group_by: GroupBy::default(),
            order_by: OrderByFields::default(),
            limit: None,
            offset: None,
        }
    }

    /// The WHERE tree built so far.
    pub fn wheres(&self) -> &Wheres {
        &self.wheres
    }

    /// Consume the builder, keeping only its WHERE tree.
    pub fn into_wheres(self) -> Wheres {
        self.wheres
    }

    /// The rendered FROM target (sub-selects included).
    pub fn table_sql(&self) -> QbResult<String> {
        self.table.render()
    }

    /// Whether any join has been added.
    pub fn has_joins(&self) -> bool {
        !self.joins.is_empty()
    }

    /// Whether the FROM target is a sub-select.
    pub fn has_sub_select(&self) -> bool {
        matches!(self.table, TableRef::Sub { .. })
    }

    /// SELECT columns in insertion order.
    pub fn columns(&self) -> &[String] {
        &self.select_cols
    }

    // ==================== Columns ====================

    /// Append one SELECT column. The initial `*` is kept.
    pub fn select(&mut self, col: impl Into<String>) -> &mut Self {
        self.select_cols.push(col.into());
        self
    }

    /// Append multiple SELECT columns.
    pub fn add_select<I, S>(&mut self, cols: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select_cols.extend(cols.into_iter().map(Into::into));
        self
    }

    // ==================== FROM ====================

    /// Set the table expression verbatim.
    pub fn from(&mut self, table: impl Into<String>) -> &mut Self {
        self.table = TableRef::Raw(table.into());
        self
    }

    /// Set the table as `<table> as <alias>`.
    pub fn from_as(&mut self, table: &str, alias: &str) -> &mut Self {
        self.table = TableRef::Raw(format!("{} as {}", table, alias));
        self
    }

    /// Select from several tables (comma-joined). Empty input leaves the
    /// current table untouched.
    pub fn from_many(&mut self, tables: &[&str]) -> &mut Self {
        if !tables.is_empty() {
            self.table = TableRef::Raw(tables.join(","));
        }
        self
    }

    /// Select from a sub-query: `(<sub>) as <alias>`.
    pub fn from_sub<F>(&mut self, f: F, alias: impl Into<String>) -> &mut Self
    where
        F: FnOnce() -> QueryBuilder,
    {
        self.table = TableRef::Sub {
            query: Box::new(f()),
            alias: alias.into(),
        };
        self
    }

    // ==================== Joins ====================

    /// Add a join of the given kind constrained by `first op second`.
    pub fn join_with(
        &mut self,
        kind: JoinKind,
        table: &str,
        first: &str,
        op: &str,
        second: &str,
    ) -> &mut Self {
        self.joins.push(Join::new(table, kind, first, op, second));
        self
    }

    /// Add INNER JOIN.
    pub fn join(&mut self, table: &str, first: &str, op: &str, second: &str) -> &mut Self {
        self.join_with(JoinKind::Inner, table, first, op, second)
    }

    /// Add LEFT JOIN.
    pub fn left_join(&mut self, table: &str, first: &str, op: &str, second: &str) -> &mut Self {
        self.join_with(JoinKind::Left, table, first, op, second)
    }

    /// Add RIGHT JOIN.
    pub fn right_join(&mut self, table: &str, first: &str, op: &str, second: &str) -> &mut Self {
        self.join_with(JoinKind::Right, table, first, op, second)
    }

    /// Add FULL OUTER JOIN.
    pub fn full_join(&mut self, table: &str, first: &str, op: &str, second: &str) -> &mut Self {
        self.join_with(JoinKind::FullOuter, table, first, op, second)
    }

    // ==================== Ordering & pagination ====================

    /// Add an ORDER BY entry with an explicit direction.
    pub fn order_by_with(&mut self, field: impl Into<String>, direction: Direction) -> &mut Self {
        self.order_by.push(field, direction);
        self
    }

    /// Add an ascending ORDER BY entry.
    pub fn order_by(&mut self, field: impl Into<String>) -> &mut Self {
        self.order_by_with(field, Direction::Asc)
    }

    /// Add a descending ORDER BY entry.
    pub fn order_by_desc(&mut self, field: impl Into<String>) -> &mut Self {
        self.order_by_with(field, Direction::Desc)
    }

    /// Append GROUP BY columns.
    pub fn group_by<I, S>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.group_by.extend(columns);
        self
    }

    /// Set LIMIT.
    pub fn limit(&mut self, limit: i64) -> &mut Self {
        self.limit = Some(limit);
        self
    }

    /// Set OFFSET.
    pub fn offset(&mut self, offset: i64) -> &mut Self {
        self.offset = Some(offset);
        self
    }

    /// Pagination helper.
    ///
    /// `page` is 1-based (clamped to >= 1).
    /// `per_page` is clamped to >= 1.
    pub fn paginate(&mut self, page: i64, per_page: i64) -> &mut Self {
        let p = page.max(1);
        let size = per_page.max(1);
        self.limit = Some(size);
        self.offset = Some((p - 1) * size);
        self
    }

    // ==================== Conditional chaining ====================

    /// Run `f` against this builder only when `condition` holds.
    pub fn when<F>(&mut self, condition: bool, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        if condition {
            f(self);
        }
        self
    }

    /// Run `f` when `condition` holds, otherwise `otherwise`.
    pub fn when_else<F, G>(&mut self, condition: bool, f: F, otherwise: G) -> &mut Self
    where
        F: FnOnce(&mut Self),
        G: FnOnce(&mut Self),
    {
        if condition {
            f(self);
        } else {
            otherwise(self);
        }
        self
    }

    // ==================== SQL build ====================

    fn build_sql_internal(&self, is_count: bool) -> QbResult<String> {
        let mut sql = if is_count {
            format!("select count(*) from {}", self.table.render()?)
        } else {
            format!(
                "select {} from {}",
                self.select_cols.join(","),
                self.table.render()?
            )
        };

        if !self.joins.is_empty() {
            sql.push(' ');
            sql.push_str(&self.joins.render()?);
        }

        if !self.wheres.is_empty() {
            sql.push_str(" where ");
            sql.push_str(&self.wheres.render()?);
        }

        if !self.group_by.is_empty() {
            sql.push_str(" group by ");
            sql.push_str(&self.group_by.render());
        }

        if !is_count {
            if !self.order_by.is_empty() {
                sql.push_str(" order by ");
                sql.push_str(&self.order_by.render());
            }

            if let Some(limit) = self.limit {
                sql.push_str(&format!(" limit {}", limit));
            }

            if let Some(offset) = self.offset {
                sql.push_str(&format!(" offset {}", offset));
            }
        }

        Ok(sql)
    }

    /// Render the statement.
    ///
    /// Rendering is pure: calling it repeatedly on an unchanged builder
    /// yields the same text.
    pub fn to_sql(&self) -> QbResult<String> {
        self.build_sql_internal(false)
    }

    /// Build COUNT SQL explicitly.
    ///
    /// Grouped queries are wrapped so the count covers groups, not rows.
    pub fn to_count_sql(&self) -> QbResult<String> {
        if self.group_by.is_empty() {
            return self.build_sql_internal(true);
        }

        let mut inner = self.clone();
        inner.select_cols = vec!["1".to_string()];
        inner.order_by = OrderByFields::default();
        inner.limit = None;
        inner.offset = None;
        Ok(format!("select count(*) from ({}) as t", inner.to_sql()?))
    }

    /// Execute COUNT query.
    pub async fn count(&self, conn: &impl GenericClient) -> QbResult<i64> {
        let sql = self.to_count_sql()?;
        let row = conn.query_one(&sql, &[]).await?;
        row.try_get(0)
            .map_err(|e| QbError::decode("count", e.to_string()))
    }
}

impl WhereBuilder for QueryBuilder {
    fn wheres_mut(&mut self) -> &mut Wheres {
        &mut self.wheres
    }
}

impl SqlBuilder for QueryBuilder {
    fn build_sql(&self) -> QbResult<String> {
        self.to_sql()
    }
}
