//! Shared WHERE clause API for SELECT and DELETE.

use super::select::QueryBuilder;
use crate::condition::{Condition, Connector};
use crate::value::Value;
use crate::wheres::Wheres;

/// Fluent predicate methods over a builder's [`Wheres`] tree.
///
/// Every method files one condition (or one group) and returns the builder
/// for chaining. Nothing is validated here; unsupported arguments surface
/// when the statement is rendered.
///
/// **Warning**: arguments are inlined into the SQL text. Never pass
/// untrusted input.
pub trait WhereBuilder {
    /// The tree conditions are filed into.
    fn wheres_mut(&mut self) -> &mut Wheres;

    // ==================== Basic Conditions ====================

    /// Add a condition under an explicit connector.
    fn where_with(
        &mut self,
        field: impl Into<String>,
        op: impl Into<String>,
        value: impl Into<Value>,
        connector: Connector,
    ) -> &mut Self {
        self.wheres_mut()
            .push(connector, Condition::new(field, op, value));
        self
    }

    /// Add AND condition: `field op value`.
    fn and_where(
        &mut self,
        field: impl Into<String>,
        op: impl Into<String>,
        value: impl Into<Value>,
    ) -> &mut Self {
        self.where_with(field, op, value, Connector::And)
    }

    /// Add AND equality condition.
    fn and_eq(&mut self, field: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.where_with(field, "=", value, Connector::And)
    }

    /// Add OR condition: `field op value`.
    fn or_where(
        &mut self,
        field: impl Into<String>,
        op: impl Into<String>,
        value: impl Into<Value>,
    ) -> &mut Self {
        self.where_with(field, op, value, Connector::Or)
    }

    /// Add OR equality condition.
    fn or_eq(&mut self, field: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.where_with(field, "=", value, Connector::Or)
    }

    // ==================== Lists ====================

    /// Add AND `field in (...)`.
    fn and_in(&mut self, field: impl Into<String>, values: impl Into<Value>) -> &mut Self {
        self.where_with(field, "in", values, Connector::And)
    }

    /// Add AND `field not in (...)`.
    fn and_not_in(&mut self, field: impl Into<String>, values: impl Into<Value>) -> &mut Self {
        self.where_with(field, "not in", values, Connector::And)
    }

    /// Add OR `field in (...)`.
    fn or_in(&mut self, field: impl Into<String>, values: impl Into<Value>) -> &mut Self {
        self.where_with(field, "in", values, Connector::Or)
    }

    /// Add OR `field not in (...)`.
    fn or_not_in(&mut self, field: impl Into<String>, values: impl Into<Value>) -> &mut Self {
        self.where_with(field, "not in", values, Connector::Or)
    }

    // ==================== NULL checks ====================

    /// AND `field is null`.
    fn and_is_null(&mut self, field: impl Into<String>) -> &mut Self {
        self.where_with(field, "", "is null", Connector::And)
    }

    /// AND `field is not null`.
    fn and_is_not_null(&mut self, field: impl Into<String>) -> &mut Self {
        self.where_with(field, "", "is not null", Connector::And)
    }

    /// OR `field is null`.
    fn or_is_null(&mut self, field: impl Into<String>) -> &mut Self {
        self.where_with(field, "", "is null", Connector::Or)
    }

    /// OR `field is not null`.
    fn or_is_not_null(&mut self, field: impl Into<String>) -> &mut Self {
        self.where_with(field, "", "is not null", Connector::Or)
    }

    // ==================== Groups ====================

    /// Build a nested group on a fresh child builder and attach its tree
    /// under `connector`. The child is dropped once `f` returns.
    fn group_with<F>(&mut self, connector: Connector, f: F) -> &mut Self
    where
        F: FnOnce(&mut QueryBuilder),
    {
        let mut child = QueryBuilder::new("");
        f(&mut child);
        self.wheres_mut().push_group(connector, child.into_wheres());
        self
    }

    /// Add a parenthesized AND group.
    fn and_group<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut QueryBuilder),
    {
        self.group_with(Connector::And, f)
    }

    /// Add a parenthesized OR group.
    fn or_group<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut QueryBuilder),
    {
        self.group_with(Connector::Or, f)
    }

    // ==================== Option-friendly helpers ====================

    /// Add `field = value` only when `value` is `Some`.
    fn and_eq_opt<T: Into<Value>>(&mut self, field: impl Into<String>, value: Option<T>) -> &mut Self {
        if let Some(v) = value {
            self.and_eq(field, v);
        }
        self
    }

    /// Add `field in (...)` only when `values` is `Some`.
    fn and_in_opt<T: Into<Value>>(&mut self, field: impl Into<String>, values: Option<T>) -> &mut Self {
        if let Some(v) = values {
            self.and_in(field, v);
        }
        self
    }
}
