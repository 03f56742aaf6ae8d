use super::{
    column_def::ColumnDef, ColumnName, Comma, Flavor, Formatter, Ident, Params, TableName, ToSql,
};

use crate::stmt;

use quill_core::{
    schema::{FieldDef, ForeignKey, ModelDef},
    Error, Result,
};

/// `CONSTRAINT "name" FOREIGN KEY ("col") REFERENCES "table" ("pk") ...`
pub(super) struct ForeignKeyClause<'a> {
    pub(super) model: &'a ModelDef,
    pub(super) field: &'a FieldDef,
    pub(super) fk: &'a ForeignKey,
}

impl ToSql for &stmt::CreateTable {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let model = &*self.model;
        let columns: Vec<_> = model.columns().collect();

        if columns.is_empty() {
            return Err(Error::invalid_statement(format!(
                "`{}` has no columns to create",
                model.name
            )));
        }

        fmt!(f, "CREATE TABLE " TableName(model) " (");

        for (index, field) in columns.iter().enumerate() {
            fmt!(f, "\n    " ColumnDef { model, field });
            if index < columns.len() - 1 {
                fmt!(f, ",");
            }
        }

        // A single auto-increment key is declared inline
        if model.auto_increment_primary_key().is_none() {
            let pk: Vec<_> = model
                .primary_key_fields()
                .filter(|field| !field.is_computed())
                .collect();

            if !pk.is_empty() {
                let pk = Comma(pk.iter().map(|field| ColumnName(field)));
                fmt!(f, ",\n    PRIMARY KEY (" pk ")");
            }
        }

        for field in &columns {
            if let Some(fk) = &field.foreign_key {
                fmt!(f, ",\n    " ForeignKeyClause { model, field, fk });
            }
        }

        fmt!(f, "\n)");
        Ok(())
    }
}

impl ToSql for ForeignKeyClause<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let referenced = self.fk.references.resolve();
        let Some(referenced_pk) = referenced.primary_key() else {
            return Err(Error::invalid_statement(format!(
                "`{}.{}` references `{}`, which has no primary key",
                self.model.name, self.field.name, referenced.name
            )));
        };

        let name = self.fk.constraint_name(self.model, self.field);

        fmt!(
            f, "CONSTRAINT " Ident(name) " FOREIGN KEY (" ColumnName(self.field) ") REFERENCES "
            TableName(&referenced) " (" ColumnName(referenced_pk) ")"
        );

        let is_sql_server = f.serializer.flavor == Flavor::SqlServer;

        for (clause, action) in [
            (" ON DELETE ", self.fk.on_delete),
            (" ON UPDATE ", self.fk.on_update),
        ] {
            let Some(action) = action else {
                continue;
            };

            // SQL Server has no RESTRICT; NO ACTION is its default.
            if is_sql_server && action.is_restrict() {
                continue;
            }

            fmt!(f, clause action.as_sql());
        }

        Ok(())
    }
}
