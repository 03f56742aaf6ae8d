use super::{value::Bind, ColumnName, Comma, Flavor, Formatter, Params, TableName, ToSql};

use crate::stmt;

use quill_core::{schema::FieldDef, stmt::Value, Error, Result};

/// `(@p_0, @p_1)`, each value typed from its field.
struct Row<'a> {
    fields: &'a [&'a FieldDef],
    values: &'a [Value],
}

impl ToSql for &stmt::Insert {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let serializer = f.serializer;
        let model = &*self.model;

        if self.rows.is_empty() {
            return Err(Error::invalid_statement(format!(
                "insert into `{}` has no rows",
                model.name
            )));
        }

        let fields = self
            .columns
            .iter()
            .map(|name| {
                let field = serializer.field(model, name)?;
                if field.is_computed() {
                    return Err(Error::invalid_statement(format!(
                        "`{}.{}` is computed and cannot be inserted",
                        model.name, field.name
                    )));
                }
                Ok(field)
            })
            .collect::<Result<Vec<_>>>()?;

        if let Some(row) = self.rows.iter().find(|row| row.len() != fields.len()) {
            return Err(Error::invalid_statement(format!(
                "insert into `{}` has {} columns but a row with {} values",
                model.name,
                fields.len(),
                row.len()
            )));
        }

        fmt!(f, "INSERT INTO " TableName(model));

        if fields.is_empty() {
            match serializer.flavor {
                Flavor::Mysql => {
                    let rows = Comma(self.rows.iter().map(|_| "()"));
                    fmt!(f, " () VALUES " rows);
                }
                _ if self.rows.len() > 1 => {
                    return Err(Error::invalid_statement(format!(
                        "insert into `{}` cannot write several rows of defaults",
                        model.name
                    )))
                }
                _ => fmt!(f, " DEFAULT VALUES"),
            }
        } else {
            let columns = Comma(fields.iter().map(|field| ColumnName(field)));
            let rows = Comma(self.rows.iter().map(|values| Row {
                fields: &fields,
                values,
            }));

            fmt!(f, " (" columns ") VALUES " rows);
        }

        let pk = model.auto_increment_primary_key();

        if let (true, Some(pk)) = (self.fetch_identity, pk) {
            match serializer.flavor {
                Flavor::Sqlite => fmt!(f, "; SELECT last_insert_rowid()"),
                Flavor::Postgresql => fmt!(f, " RETURNING " ColumnName(pk)),
                Flavor::Mysql => fmt!(f, "; SELECT LAST_INSERT_ID()"),
                Flavor::SqlServer => fmt!(f, "; SELECT SCOPE_IDENTITY()"),
            }
        }

        Ok(())
    }
}

impl ToSql for Row<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let serializer = f.serializer;
        let values = self
            .values
            .iter()
            .zip(self.fields)
            .map(|(value, field)| Bind(value, Some(serializer.db_type(field.ty))));

        fmt!(f, "(" Comma(values) ")");
        Ok(())
    }
}
