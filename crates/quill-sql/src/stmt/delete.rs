use super::{update::primary_key_filter, Statement};

use quill_core::{
    schema::{Model, ModelDef},
    stmt::Expr,
};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Delete {
    pub model: Arc<ModelDef>,

    /// Rows to delete; every row when absent
    pub filter: Option<Expr>,
}

impl Statement {
    pub fn delete(model: Arc<ModelDef>, filter: Option<Expr>) -> Self {
        Delete { model, filter }.into()
    }

    /// Deletes the row of `record`, matched by primary key.
    pub fn delete_record<M: Model>(record: &M) -> Self {
        let model = M::definition();
        let filter = primary_key_filter(&model, M::model_ref(), record);
        Delete { model, filter }.into()
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Self::Delete(value)
    }
}
