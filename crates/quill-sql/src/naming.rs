//! Mapping from logical model and field names to SQL identifiers.

use heck::ToSnakeCase;
use std::fmt::Debug;

/// Turns logical names into the table and column names that appear in SQL.
///
/// Explicit aliases are resolved before the strategy runs; the strategy
/// sees the effective name.
pub trait NamingStrategy: Debug + Send + Sync {
    fn table_name(&self, name: &str) -> String {
        name.to_string()
    }

    fn column_name(&self, name: &str) -> String {
        name.to_string()
    }
}

/// Uses names unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct Identity;

/// `OrderLine` → `orderline`
#[derive(Debug, Default, Clone, Copy)]
pub struct LowerCase;

/// `OrderLine` → `order_line`
#[derive(Debug, Default, Clone, Copy)]
pub struct SnakeCase;

/// Pluralizes table names produced by the inner strategy.
///
/// ```
/// # use quill_sql::naming::{NamingStrategy, Pluralized, SnakeCase};
/// let naming = Pluralized(SnakeCase);
/// assert_eq!(naming.table_name("OrderLine"), "order_lines");
/// assert_eq!(naming.column_name("UnitPrice"), "unit_price");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Pluralized<S>(pub S);

impl NamingStrategy for Identity {}

impl NamingStrategy for LowerCase {
    fn table_name(&self, name: &str) -> String {
        name.to_lowercase()
    }

    fn column_name(&self, name: &str) -> String {
        name.to_lowercase()
    }
}

impl NamingStrategy for SnakeCase {
    fn table_name(&self, name: &str) -> String {
        name.to_snake_case()
    }

    fn column_name(&self, name: &str) -> String {
        name.to_snake_case()
    }
}

impl<S: NamingStrategy> NamingStrategy for Pluralized<S> {
    fn table_name(&self, name: &str) -> String {
        pluralizer::pluralize(&self.0.table_name(name), 2, false)
    }

    fn column_name(&self, name: &str) -> String {
        self.0.column_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_keeps_names() {
        assert_eq!(Identity.table_name("Person"), "Person");
        assert_eq!(Identity.column_name("FirstName"), "FirstName");
    }

    #[test]
    fn snake_case() {
        assert_eq!(SnakeCase.table_name("OrderLine"), "order_line");
        assert_eq!(SnakeCase.column_name("FirstName"), "first_name");
    }

    #[test]
    fn lower_case() {
        assert_eq!(LowerCase.table_name("OrderLine"), "orderline");
    }

    #[test]
    fn pluralized_only_touches_tables() {
        let naming = Pluralized(SnakeCase);
        assert_eq!(naming.table_name("Person"), "people");
        assert_eq!(naming.column_name("PersonId"), "person_id");
    }
}
