use super::{
    column_def::ColumnDef, create_table::ForeignKeyClause, ColumnName, Flavor, Formatter, Ident,
    Params, TableName, ToSql,
};

use crate::stmt;

use quill_core::{
    schema::{FieldDef, ModelDef},
    Error, Result,
};

/// `"col" TYPE NULL`: a column definition without constraints, used where
/// the column already exists.
struct ColumnSpec<'a>(&'a FieldDef);

fn stored_field<'a>(model: &'a ModelDef, field: &'a FieldDef) -> Result<&'a FieldDef> {
    if field.is_computed() {
        return Err(Error::invalid_statement(format!(
            "`{}.{}` is computed and has no column",
            model.name, field.name
        )));
    }
    Ok(field)
}

impl ToSql for &stmt::AddColumn {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let model = &*self.model;
        let field = stored_field(model, f.serializer.field(model, &self.field)?)?;

        let add = match f.serializer.flavor {
            Flavor::SqlServer => " ADD ",
            _ => " ADD COLUMN ",
        };

        fmt!(f, "ALTER TABLE " TableName(model) add ColumnDef { model, field });
        Ok(())
    }
}

impl ToSql for &stmt::AlterColumn {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let model = &*self.model;
        let field = stored_field(model, f.serializer.field(model, &self.field)?)?;
        let table_name = TableName(model);

        match f.serializer.flavor {
            Flavor::Sqlite => {
                return Err(Error::unsupported_feature(
                    "SQLite cannot modify an existing column",
                ))
            }
            Flavor::Postgresql => {
                let ty = f.serializer.column_type(field);
                fmt!(f, "ALTER TABLE " table_name " ALTER COLUMN " ColumnName(field) " TYPE " ty.as_str());
            }
            Flavor::Mysql => {
                fmt!(f, "ALTER TABLE " table_name " MODIFY COLUMN " ColumnSpec(field));
            }
            Flavor::SqlServer => {
                fmt!(f, "ALTER TABLE " table_name " ALTER COLUMN " ColumnSpec(field));
            }
        }
        Ok(())
    }
}

impl ToSql for &stmt::ChangeColumn {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let serializer = f.serializer;
        let model = &*self.model;
        let field = stored_field(model, serializer.field(model, &self.field)?)?;
        let old_name = Ident(self.old_name.as_str());

        match serializer.flavor {
            Flavor::Sqlite | Flavor::Postgresql => {
                fmt!(f, "ALTER TABLE " TableName(model) " RENAME COLUMN " old_name " TO " ColumnName(field));
            }
            Flavor::Mysql => {
                fmt!(f, "ALTER TABLE " TableName(model) " CHANGE COLUMN " old_name " " ColumnSpec(field));
            }
            Flavor::SqlServer => {
                let mut path = String::new();
                if let Some(schema) = &model.schema {
                    path.push_str(schema);
                    path.push('.');
                }
                path.push_str(&serializer.table_name(model));
                path.push('.');
                path.push_str(&self.old_name);

                let path = serializer.literal(&path.into())?;
                let new_name = serializer.literal(&serializer.column_name(field).into())?;

                fmt!(f, "EXEC sp_rename " path.as_str() ", " new_name.as_str() ", 'COLUMN'");
            }
        }
        Ok(())
    }
}

impl ToSql for &stmt::AddForeignKey {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let model = &*self.model;
        let field = stored_field(model, f.serializer.field(model, &self.field)?)?;

        if f.serializer.flavor == Flavor::Sqlite {
            return Err(Error::unsupported_feature(
                "SQLite cannot add a foreign key to an existing table",
            ));
        }

        let Some(fk) = &field.foreign_key else {
            return Err(Error::invalid_statement(format!(
                "`{}.{}` does not reference another model",
                model.name, field.name
            )));
        };

        fmt!(f, "ALTER TABLE " TableName(model) " ADD " ForeignKeyClause { model, field, fk });
        Ok(())
    }
}

impl ToSql for ColumnSpec<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let field = self.0;
        let ty = f.serializer.column_type(field);
        let null = if field.nullable && !field.primary_key {
            " NULL"
        } else {
            " NOT NULL"
        };

        fmt!(f, ColumnName(field) " " ty.as_str() null);
        Ok(())
    }
}
