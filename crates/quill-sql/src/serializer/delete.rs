use super::{Formatter, Params, TableName, ToSql};

use crate::stmt;

use quill_core::Result;

impl ToSql for &stmt::Delete {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        fmt!(f, "DELETE FROM " TableName(&self.model));

        if let Some(filter) = &self.filter {
            fmt!(f, " WHERE " filter);
        }

        Ok(())
    }
}
