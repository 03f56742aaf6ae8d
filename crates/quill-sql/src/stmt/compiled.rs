use indexmap::IndexMap;
use quill_core::{
    driver::operation::QuerySql,
    stmt::{Intent, TypedValue},
};
use std::time::Duration;

/// Output of the statement compiler: SQL text plus its parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Compiled {
    /// SQL text with named placeholders
    pub sql: String,

    /// Parameter values keyed by placeholder name, in the order the
    /// placeholders appear
    pub params: IndexMap<String, TypedValue>,

    /// What the statement returns
    pub intent: Intent,
}

impl Compiled {
    /// Builds a parameterless statement from raw SQL.
    pub fn raw(sql: impl Into<String>, intent: Intent) -> Compiled {
        Compiled {
            sql: sql.into(),
            params: IndexMap::new(),
            intent,
        }
    }

    /// Turns the compiled statement into a driver operation.
    pub fn into_operation(self, timeout: Option<Duration>) -> QuerySql {
        QuerySql {
            sql: self.sql,
            params: self.params,
            intent: self.intent,
            timeout,
        }
    }
}
