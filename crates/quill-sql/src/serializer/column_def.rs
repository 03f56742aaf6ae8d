use super::{ColumnName, Formatter, Params, ToSql};

use quill_core::{
    schema::{FieldDef, ModelDef},
    Result,
};

/// A column definition as it appears in `CREATE TABLE` and `ALTER TABLE`.
pub(super) struct ColumnDef<'a> {
    pub(super) model: &'a ModelDef,
    pub(super) field: &'a FieldDef,
}

impl ToSql for ColumnDef<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let field = self.field;
        let ty = f.serializer.column_type(field);

        fmt!(f, ColumnName(field) " " ty.as_str());

        let inline_pk = self
            .model
            .auto_increment_primary_key()
            .is_some_and(|pk| pk.name == field.name);

        if inline_pk {
            fmt!(f, " PRIMARY KEY");
            let serializer = f.serializer;
            let keyword = serializer.auto_increment_keyword.as_str();
            if !keyword.is_empty() {
                fmt!(f, " " keyword);
            }
        } else if field.nullable && !field.primary_key {
            fmt!(f, " NULL");
        } else {
            fmt!(f, " NOT NULL");
        }

        // An indexed unique field gets a unique index instead
        if field.unique && !field.indexed && !inline_pk {
            fmt!(f, " UNIQUE");
        }

        if let Some(default) = &field.default_value {
            let value = f.serializer.default_value_sql(default)?;
            let clause = f.serializer.default_value_format.replace("{}", &value);
            fmt!(f, clause.as_str());
        }

        Ok(())
    }
}
