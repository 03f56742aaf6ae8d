use super::Statement;

use quill_core::schema::ModelDef;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct CreateIndex {
    /// Which table to index
    pub model: Arc<ModelDef>,

    /// Name of the index, written as-is
    pub name: String,

    pub columns: Vec<IndexColumn>,

    /// When true, the index is unique
    pub unique: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexColumn {
    /// Logical field name
    pub field: String,

    pub descending: bool,
}

impl Statement {
    /// One `CREATE INDEX` per indexed field, followed by one per composite
    /// index, in declaration order.
    pub fn create_indices(model: &Arc<ModelDef>) -> Vec<Statement> {
        let table = model.effective_name();
        let mut stmts = vec![];

        for field in model.columns().filter(|field| field.indexed) {
            stmts.push(
                CreateIndex {
                    model: model.clone(),
                    name: index_name(field.unique, table, field.effective_name()),
                    columns: vec![IndexColumn {
                        field: field.name.clone(),
                        descending: false,
                    }],
                    unique: field.unique,
                }
                .into(),
            );
        }

        for index in &model.indices {
            let name = match &index.name {
                Some(name) => name.clone(),
                None => index_name(index.unique, table, &index.derived_suffix()),
            };

            stmts.push(
                CreateIndex {
                    model: model.clone(),
                    name,
                    columns: index
                        .fields
                        .iter()
                        .map(|field| IndexColumn {
                            field: field.field.clone(),
                            descending: field.descending,
                        })
                        .collect(),
                    unique: index.unique,
                }
                .into(),
            );
        }

        stmts
    }
}

/// `idx_{table}_{column}`, prefixed with `u` for unique indexes, lowercase.
fn index_name(unique: bool, table: &str, suffix: &str) -> String {
    let unique = if unique { "u" } else { "" };
    format!("{unique}idx_{table}_{suffix}").to_lowercase()
}

impl From<CreateIndex> for Statement {
    fn from(value: CreateIndex) -> Self {
        Self::CreateIndex(value)
    }
}
