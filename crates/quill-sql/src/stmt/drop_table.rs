use super::Statement;

use quill_core::schema::ModelDef;
use std::sync::Arc;

/// A statement to drop a SQL table.
#[derive(Debug, Clone)]
pub struct DropTable {
    pub model: Arc<ModelDef>,

    /// Whether or not to add an `IF EXISTS` clause.
    pub if_exists: bool,
}

impl Statement {
    /// Drops a table.
    ///
    /// This function _does not_ add an `IF EXISTS` clause.
    pub fn drop_table(model: Arc<ModelDef>) -> Self {
        DropTable {
            model,
            if_exists: false,
        }
        .into()
    }

    /// Drops a table if it exists.
    pub fn drop_table_if_exists(model: Arc<ModelDef>) -> Self {
        DropTable {
            model,
            if_exists: true,
        }
        .into()
    }
}

impl From<DropTable> for Statement {
    fn from(value: DropTable) -> Self {
        Self::DropTable(value)
    }
}
