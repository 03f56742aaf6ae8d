use super::Statement;

use quill_core::schema::ModelDef;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct CreateTable {
    /// Table to create
    pub model: Arc<ModelDef>,
}

impl Statement {
    pub fn create_table(model: Arc<ModelDef>) -> Self {
        CreateTable { model }.into()
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
