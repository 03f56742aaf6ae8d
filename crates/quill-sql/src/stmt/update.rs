use super::Statement;

use quill_core::{
    schema::{Model, ModelDef},
    stmt::Expr,
};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Update {
    pub model: Arc<ModelDef>,

    /// `SET` clauses, in order
    pub assignments: Vec<Assignment>,

    pub filter: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// Logical field name
    pub field: String,

    pub value: Expr,
}

impl Statement {
    pub fn update(model: Arc<ModelDef>, assignments: Vec<Assignment>, filter: Option<Expr>) -> Self {
        Update {
            model,
            assignments,
            filter,
        }
        .into()
    }

    /// Writes every stored field of `record`, matching the row by primary
    /// key.
    pub fn update_record<M: Model>(record: &M) -> Self {
        let model = M::definition();
        let model_ref = M::model_ref();

        let assignments = model
            .columns()
            .filter(|field| !field.primary_key && !field.auto_increment)
            .map(|field| Assignment {
                field: field.name.clone(),
                value: Expr::Value(field.get(record).unwrap_or_default()),
            })
            .collect();

        let filter = primary_key_filter(&model, model_ref, record);

        Update {
            model,
            assignments,
            filter,
        }
        .into()
    }
}

/// `pk = value [AND pk2 = value2 ...]` for `record`.
pub(super) fn primary_key_filter(
    model: &ModelDef,
    model_ref: quill_core::schema::ModelRef,
    record: &dyn std::any::Any,
) -> Option<Expr> {
    model
        .primary_key_fields()
        .map(|field| {
            Expr::eq(
                Expr::column(model_ref, field.name.clone()),
                field.get(record).unwrap_or_default(),
            )
        })
        .reduce(Expr::and)
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Self::Update(value)
    }
}
