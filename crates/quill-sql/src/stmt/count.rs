use super::Statement;

use quill_core::{schema::ModelDef, stmt::Expr};
use std::sync::Arc;

/// `SELECT COUNT(...)`
#[derive(Debug, Clone)]
pub struct Count {
    pub model: Arc<ModelDef>,

    /// Counted column; `*` when absent
    pub column: Option<Expr>,

    pub distinct: bool,

    pub filter: Option<Expr>,

    pub prefix_table: bool,
}

impl Statement {
    /// `SELECT COUNT(*)` of the rows matching `filter`.
    pub fn count(model: Arc<ModelDef>, filter: Option<Expr>) -> Self {
        Count {
            model,
            column: None,
            distinct: false,
            filter,
            prefix_table: false,
        }
        .into()
    }
}

impl From<Count> for Statement {
    fn from(value: Count) -> Self {
        Self::Count(value)
    }
}
