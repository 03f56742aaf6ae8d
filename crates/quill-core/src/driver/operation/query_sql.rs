use super::Operation;

use crate::stmt::{Intent, TypedValue};

use indexmap::IndexMap;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct QuerySql {
    /// SQL text, with named parameter placeholders
    pub sql: String,

    /// Parameter values keyed by placeholder name, in placeholder order
    pub params: IndexMap<String, TypedValue>,

    /// What the statement returns
    pub intent: Intent,

    /// Per-call command timeout, if one is configured
    pub timeout: Option<Duration>,
}

impl From<QuerySql> for Operation {
    fn from(value: QuerySql) -> Self {
        Self::QuerySql(value)
    }
}
