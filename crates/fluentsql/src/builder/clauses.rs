//! Join, ordering and grouping lists.

use crate::condition::Condition;
use crate::error::QbResult;
use crate::value::Value;
use crate::wheres::Wheres;
use std::fmt;

/// Join kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoinKind {
    #[default]
    Inner,
    Left,
    Right,
    FullOuter,
}

impl JoinKind {
    /// Keyword placed before `join`.
    pub fn as_str(self) -> &'static str {
        match self {
            JoinKind::Inner => "inner",
            JoinKind::Left => "left",
            JoinKind::Right => "right",
            JoinKind::FullOuter => "full outer",
        }
    }
}

/// A join descriptor: `<kind> join <table> on <condition>`.
#[derive(Debug, Clone)]
pub struct Join {
    table: String,
    kind: JoinKind,
    condition: Wheres,
}

impl Join {
    /// Create a join constrained by `first op second`.
    pub fn new(
        table: impl Into<String>,
        kind: JoinKind,
        first: impl Into<String>,
        op: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Self {
            table: table.into(),
            kind,
            condition: Wheres::single(Condition::new(first, op, Value::Text(second.into()))),
        }
    }

    /// Joined table expression, verbatim.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Join kind.
    pub fn kind(&self) -> JoinKind {
        self.kind
    }

    /// Render `<kind> join <table> on <condition>`.
    pub fn render(&self) -> QbResult<String> {
        Ok(format!(
            "{} join {} on {}",
            self.kind.as_str(),
            self.table,
            self.condition.render()?
        ))
    }
}

/// Ordered join list.
#[derive(Debug, Clone, Default)]
pub struct Joins(Vec<Join>);

impl Joins {
    /// Append a join; joins render in insertion order.
    pub fn push(&mut self, join: Join) {
        self.0.push(join);
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate joins in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Join> {
        self.0.iter()
    }

    /// Render all joins separated by a single space.
    pub fn render(&self) -> QbResult<String> {
        let parts = self.0.iter().map(Join::render).collect::<QbResult<Vec<_>>>()?;
        Ok(parts.join(" "))
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    /// `asc` or `desc`.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

/// A single `field direction` ordering directive.
#[derive(Debug, Clone)]
pub struct OrderBy {
    /// Column or expression to sort on.
    pub field: String,
    /// Sort direction.
    pub direction: Direction,
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.direction.as_str())
    }
}

/// Ordered ORDER BY list; the first entry is the primary sort key.
#[derive(Debug, Clone, Default)]
pub struct OrderByFields(Vec<OrderBy>);

impl OrderByFields {
    /// Append a sort key.
    pub fn push(&mut self, field: impl Into<String>, direction: Direction) {
        self.0.push(OrderBy {
            field: field.into(),
            direction,
        });
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render `field dir` entries joined by `,`.
    pub fn render(&self) -> String {
        self.0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Ordered GROUP BY column list.
#[derive(Debug, Clone, Default)]
pub struct GroupBy(Vec<String>);

impl GroupBy {
    /// Append columns in order.
    pub fn extend<I, S>(&mut self, columns: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.extend(columns.into_iter().map(Into::into));
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render the columns joined by `,`.
    pub fn render(&self) -> String {
        self.0.join(",")
    }
}
