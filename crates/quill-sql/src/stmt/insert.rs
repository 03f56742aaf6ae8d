use super::Statement;

use quill_core::{
    schema::{Model, ModelDef},
    stmt::Value,
};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Insert {
    /// Table to insert into
    pub model: Arc<ModelDef>,

    /// Logical names of the inserted fields
    pub columns: Vec<String>,

    /// One value per column, per row
    pub rows: Vec<Vec<Value>>,

    /// Append the flavor's identity-fetch clause
    pub fetch_identity: bool,
}

impl Statement {
    /// Inserts `records`, one row each.
    ///
    /// Auto-increment and computed fields are left to the database. When the
    /// table has a single auto-increment key, the generated identity is
    /// fetched.
    pub fn insert<M: Model>(records: &[M]) -> Self {
        let model = M::definition();

        let fields: Vec<_> = model
            .columns()
            .filter(|field| !field.auto_increment)
            .collect();

        let columns = fields.iter().map(|field| field.name.clone()).collect();
        let rows = records
            .iter()
            .map(|record| {
                fields
                    .iter()
                    .map(|field| field.get(record).unwrap_or_default())
                    .collect()
            })
            .collect();

        let fetch_identity = model.auto_increment_primary_key().is_some();

        Insert {
            model,
            columns,
            rows,
            fetch_identity,
        }
        .into()
    }

    /// Inserts explicit rows into the given fields.
    pub fn insert_values<I, S>(model: Arc<ModelDef>, columns: I, rows: Vec<Vec<Value>>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fetch_identity = model.auto_increment_primary_key().is_some();

        Insert {
            model,
            columns: columns.into_iter().map(Into::into).collect(),
            rows,
            fetch_identity,
        }
        .into()
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
