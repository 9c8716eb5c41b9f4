//! Predicate tree.
//!
//! [`Wheres`] files leaf conditions and nested groups under a [`Connector`].
//! Rendering follows a fixed four-phase order rather than general boolean
//! algebra:
//!
//! 1. AND groups, each parenthesized, joined with `AND`
//! 2. AND conditions joined with `AND`, appended with ` And `
//! 3. OR groups, each parenthesized, joined with `OR`, appended with ` Or `
//! 4. OR conditions joined with `OR`, appended with ` Or `
//!
//! Callers that nest groups must expect this ordering: `a AND b` filed after
//! an OR group still renders before it.

use crate::condition::{Condition, Connector};
use crate::error::QbResult;
use std::collections::BTreeMap;

/// Nested AND/OR structure of conditions.
#[derive(Debug, Clone, Default)]
pub struct Wheres {
    conditions: BTreeMap<Connector, Vec<Condition>>,
    groups: BTreeMap<Connector, Vec<Wheres>>,
}

impl Wheres {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tree holding a single AND condition (used for join constraints).
    pub fn single(condition: Condition) -> Self {
        let mut wheres = Self::new();
        wheres.push(Connector::And, condition);
        wheres
    }

    /// Check if the tree has neither conditions nor groups.
    pub fn is_empty(&self) -> bool {
        self.conditions.values().all(Vec::is_empty) && self.groups.values().all(Vec::is_empty)
    }

    /// File a condition under `connector`.
    pub fn push(&mut self, connector: Connector, condition: Condition) {
        self.conditions.entry(connector).or_default().push(condition);
    }

    /// Attach a nested tree under `connector`.
    ///
    /// Empty trees are dropped so they never render as `()`.
    pub fn push_group(&mut self, connector: Connector, group: Wheres) {
        if group.is_empty() {
            return;
        }
        self.groups.entry(connector).or_default().push(group);
    }

    /// Conditions filed under `connector`, in insertion order.
    pub fn conditions(&self, connector: Connector) -> &[Condition] {
        self.conditions.get(&connector).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Groups filed under `connector`, in insertion order.
    pub fn groups(&self, connector: Connector) -> &[Wheres] {
        self.groups.get(&connector).map(Vec::as_slice).unwrap_or(&[])
    }

    fn render_groups(&self, connector: Connector) -> QbResult<String> {
        let parts = self
            .groups(connector)
            .iter()
            .map(|group| group.render().map(|sql| format!("({})", sql)))
            .collect::<QbResult<Vec<_>>>()?;
        Ok(parts.join(&format!(" {} ", connector)))
    }

    fn render_conditions(&self, connector: Connector) -> QbResult<String> {
        let parts = self
            .conditions(connector)
            .iter()
            .map(Condition::render)
            .collect::<QbResult<Vec<_>>>()?;
        Ok(parts.join(&format!(" {} ", connector)))
    }

    /// Render the tree (without a `where` prefix). The empty tree renders `""`.
    pub fn render(&self) -> QbResult<String> {
        if self.is_empty() {
            return Ok(String::new());
        }

        let mut result = self.render_groups(Connector::And)?;
        let and_conditions = self.render_conditions(Connector::And)?;
        if result.is_empty() {
            result = and_conditions;
        } else if !and_conditions.is_empty() {
            result = format!("{} And {}", result, and_conditions);
        }

        let or_groups = self.render_groups(Connector::Or)?;
        if result.is_empty() {
            result = or_groups;
        } else if !or_groups.is_empty() {
            result = format!("{} Or {}", result, or_groups);
        }

        let or_conditions = self.render_conditions(Connector::Or)?;
        if result.is_empty() {
            result = or_conditions;
        } else if !or_conditions.is_empty() {
            result = format!("{} Or {}", result, or_conditions);
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cond(field: &str, value: i32) -> Condition {
        Condition::new(field, "=", value)
    }

    #[test]
    fn empty_tree_renders_empty() {
        let wheres = Wheres::new();
        assert!(wheres.is_empty());
        assert_eq!(wheres.render().unwrap(), "");
    }

    #[test]
    fn leaves_join_with_their_connector() {
        let mut wheres = Wheres::new();
        wheres.push(Connector::And, cond("a", 1));
        wheres.push(Connector::And, cond("b", 2));
        wheres.push(Connector::Or, cond("c", 3));
        wheres.push(Connector::Or, cond("d", 4));
        assert_eq!(wheres.render().unwrap(), "a = 1 AND b = 2 Or c = 3 OR d = 4");
    }

    #[test]
    fn or_only() {
        let mut wheres = Wheres::new();
        wheres.push(Connector::Or, cond("a", 1));
        wheres.push(Connector::Or, cond("b", 2));
        assert_eq!(wheres.render().unwrap(), "a = 1 OR b = 2");
    }

    #[test]
    fn four_phase_order() {
        let mut inner_and = Wheres::new();
        inner_and.push(Connector::And, cond("x", 1));
        inner_and.push(Connector::Or, cond("y", 2));

        let mut inner_or = Wheres::new();
        inner_or.push(Connector::And, cond("p", 3));
        inner_or.push(Connector::And, cond("q", 4));

        let mut wheres = Wheres::new();
        // Filed out of phase order on purpose.
        wheres.push(Connector::Or, cond("z", 9));
        wheres.push_group(Connector::Or, inner_or);
        wheres.push(Connector::And, cond("a", 5));
        wheres.push_group(Connector::And, inner_and);

        assert_eq!(
            wheres.render().unwrap(),
            "(x = 1 Or y = 2) And a = 5 Or (p = 3 AND q = 4) Or z = 9"
        );
    }

    #[test]
    fn sibling_groups_join_with_connector() {
        let mut g1 = Wheres::new();
        g1.push(Connector::And, cond("a", 1));
        let mut g2 = Wheres::new();
        g2.push(Connector::And, cond("b", 2));
        let mut g3 = Wheres::new();
        g3.push(Connector::And, cond("c", 3));
        let mut g4 = Wheres::new();
        g4.push(Connector::And, cond("d", 4));

        let mut wheres = Wheres::new();
        wheres.push_group(Connector::And, g1);
        wheres.push_group(Connector::And, g2);
        wheres.push_group(Connector::Or, g3);
        wheres.push_group(Connector::Or, g4);
        assert_eq!(wheres.render().unwrap(), "(a = 1) AND (b = 2) Or (c = 3) OR (d = 4)");
    }

    #[test]
    fn empty_group_is_dropped() {
        let mut wheres = Wheres::new();
        wheres.push_group(Connector::And, Wheres::new());
        assert!(wheres.is_empty());
        assert!(wheres.groups(Connector::And).is_empty());
    }

    #[test]
    fn nested_error_propagates() {
        let mut inner = Wheres::new();
        inner.push(Connector::And, Condition::new("id", "in", 1));
        let mut wheres = Wheres::new();
        wheres.push_group(Connector::Or, inner);
        assert!(wheres.render().unwrap_err().is_unsupported_argument());
    }

    #[test]
    fn single_holds_one_and_condition() {
        let wheres = Wheres::single(Condition::new("u.id", "=", "p.user_id"));
        assert_eq!(wheres.conditions(Connector::And).len(), 1);
        assert_eq!(wheres.render().unwrap(), "u.id = p.user_id");
    }
}
