use super::Statement;

use quill_core::schema::ModelDef;
use std::sync::Arc;

/// `ALTER TABLE ... ADD COLUMN`, using the field's current definition.
#[derive(Debug, Clone)]
pub struct AddColumn {
    pub model: Arc<ModelDef>,

    /// Logical field name
    pub field: String,
}

/// Changes a column's type and nullability to match the field's current
/// definition.
#[derive(Debug, Clone)]
pub struct AlterColumn {
    pub model: Arc<ModelDef>,

    pub field: String,
}

/// Renames a column from `old_name` to the field's current column name.
#[derive(Debug, Clone)]
pub struct ChangeColumn {
    pub model: Arc<ModelDef>,

    pub field: String,

    /// Column name in the database before the change
    pub old_name: String,
}

/// Adds the foreign key declared on a field to an existing table.
#[derive(Debug, Clone)]
pub struct AddForeignKey {
    pub model: Arc<ModelDef>,

    pub field: String,
}

impl Statement {
    pub fn add_column(model: Arc<ModelDef>, field: impl Into<String>) -> Self {
        AddColumn {
            model,
            field: field.into(),
        }
        .into()
    }

    pub fn alter_column(model: Arc<ModelDef>, field: impl Into<String>) -> Self {
        AlterColumn {
            model,
            field: field.into(),
        }
        .into()
    }

    pub fn change_column(
        model: Arc<ModelDef>,
        field: impl Into<String>,
        old_name: impl Into<String>,
    ) -> Self {
        ChangeColumn {
            model,
            field: field.into(),
            old_name: old_name.into(),
        }
        .into()
    }

    pub fn add_foreign_key(model: Arc<ModelDef>, field: impl Into<String>) -> Self {
        AddForeignKey {
            model,
            field: field.into(),
        }
        .into()
    }
}

impl From<AddColumn> for Statement {
    fn from(value: AddColumn) -> Self {
        Self::AddColumn(value)
    }
}

impl From<AlterColumn> for Statement {
    fn from(value: AlterColumn) -> Self {
        Self::AlterColumn(value)
    }
}

impl From<ChangeColumn> for Statement {
    fn from(value: ChangeColumn) -> Self {
        Self::ChangeColumn(value)
    }
}

impl From<AddForeignKey> for Statement {
    fn from(value: AddForeignKey) -> Self {
        Self::AddForeignKey(value)
    }
}
