use super::{ColumnName, Comma, Formatter, Ident, Params, TableName, ToSql};

use crate::stmt;

use quill_core::{schema::FieldDef, Result};

struct IndexedColumn<'a>(&'a FieldDef, bool);

impl ToSql for &stmt::CreateIndex {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let serializer = f.serializer;
        let model = &*self.model;

        let columns = self
            .columns
            .iter()
            .map(|column| {
                let field = serializer.field(model, &column.field)?;
                Ok(IndexedColumn(field, column.descending))
            })
            .collect::<Result<Vec<_>>>()?;

        let unique = if self.unique { "UNIQUE " } else { "" };
        let name = Ident(self.name.as_str());

        fmt!(
            f, "CREATE " unique "INDEX " name " ON " TableName(model) " (" Comma(columns) ")"
        );
        Ok(())
    }
}

impl ToSql for IndexedColumn<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        fmt!(f, ColumnName(self.0));
        if self.1 {
            fmt!(f, " DESC");
        }
        Ok(())
    }
}
