use super::{Formatter, Params, TableName, ToSql};

use crate::stmt;

use quill_core::Result;

impl ToSql for &stmt::DropTable {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let table_name = TableName(&self.model);

        if self.if_exists {
            fmt!(f, "DROP TABLE IF EXISTS " table_name);
        } else {
            fmt!(f, "DROP TABLE " table_name);
        }
        Ok(())
    }
}
