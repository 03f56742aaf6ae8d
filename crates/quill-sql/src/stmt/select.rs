use super::Statement;

use quill_core::{schema::ModelDef, stmt::Expr};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Select {
    pub model: Arc<ModelDef>,

    /// Selected expressions; every column when empty
    pub projection: Vec<Expr>,

    pub distinct: bool,

    pub filter: Option<Expr>,

    pub group_by: Vec<Expr>,

    pub having: Option<Expr>,

    pub order_by: Vec<OrderBy>,

    pub limit: Option<u64>,

    pub offset: Option<u64>,

    /// Qualify every column reference with the table name
    pub prefix_table: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub expr: Expr,
    pub descending: bool,
}

impl Select {
    /// `SELECT` of every column, without any clause.
    pub fn new(model: Arc<ModelDef>) -> Select {
        Select {
            model,
            projection: vec![],
            distinct: false,
            filter: None,
            group_by: vec![],
            having: None,
            order_by: vec![],
            limit: None,
            offset: None,
            prefix_table: false,
        }
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Self::Select(value)
    }
}
