//! Leaf predicates for WHERE and ON clauses.
//!
//! A [`Condition`] is a single `field operator argument` comparison. The
//! [`Connector`] decides which list of a [`Wheres`](crate::Wheres) tree the
//! condition is filed under.

use crate::error::{QbError, QbResult};
use crate::value::Value;
use std::fmt;

/// Boolean combinator used to file conditions and nested groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Connector {
    #[default]
    And,
    Or,
}

impl Connector {
    /// SQL keyword used between siblings filed under this connector.
    pub fn as_str(self) -> &'static str {
        match self {
            Connector::And => "AND",
            Connector::Or => "OR",
        }
    }
}

impl fmt::Display for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operators whose argument is rendered as a parenthesized list.
const LIST_OPERATORS: [&str; 2] = ["in", "not in"];

/// A single comparison.
///
/// # Example
/// ```
/// use fluentsql::Condition;
///
/// let cond = Condition::new("age", ">", 18);
/// assert_eq!(cond.render().unwrap(), "age > 18");
///
/// let cond = Condition::new("id", "in", vec![1, 2, 3]);
/// assert_eq!(cond.render().unwrap(), "id in (1,2,3)");
/// ```
#[derive(Debug, Clone)]
pub struct Condition {
    field: String,
    operator: String,
    argument: Value,
}

impl Condition {
    /// Create a condition. An empty operator renders `field argument`.
    pub fn new(
        field: impl Into<String>,
        operator: impl Into<String>,
        argument: impl Into<Value>,
    ) -> Self {
        Self {
            field: field.into(),
            operator: operator.into(),
            argument: argument.into(),
        }
    }

    /// Create an operator-less condition whose argument is a raw fragment,
    /// e.g. `Condition::raw("deleted_at", "is null")`.
    pub fn raw(field: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self::new(field, "", Value::Text(fragment.into()))
    }

    /// Left-hand column or expression.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Comparison operator; may be empty.
    pub fn operator(&self) -> &str {
        &self.operator
    }

    /// Right-hand argument.
    pub fn argument(&self) -> &Value {
        &self.argument
    }

    fn is_list_operator(&self) -> bool {
        LIST_OPERATORS.contains(&self.operator.as_str())
    }

    /// Render the condition as SQL text.
    ///
    /// Fails with [`QbError::UnsupportedArgumentType`] when an `in` / `not in`
    /// argument has no list form.
    pub fn render(&self) -> QbResult<String> {
        let argument = if self.is_list_operator() {
            let list = self.argument.to_list_text().ok_or_else(|| {
                QbError::unsupported_argument(
                    &self.field,
                    &self.operator,
                    format!("{:?}", self.argument),
                )
            })?;
            format!("({})", list)
        } else {
            self.argument.to_text()
        };

        if self.operator.is_empty() {
            Ok(format!("{} {}", self.field, argument))
        } else {
            Ok(format!("{} {} {}", self.field, self.operator, argument))
        }
    }
}
