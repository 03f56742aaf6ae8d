use super::{expr::Typed, ColumnName, Comma, Formatter, Params, TableName, ToSql};

use crate::stmt;

use quill_core::{
    schema::FieldDef,
    stmt::Expr,
    Error, Result,
};

struct Assignment<'a> {
    field: &'a FieldDef,
    value: &'a Expr,
}

impl ToSql for &stmt::Update {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let serializer = f.serializer;
        let model = &*self.model;

        if self.assignments.is_empty() {
            return Err(Error::invalid_statement(format!(
                "update of `{}` has no fields to set",
                model.name
            )));
        }

        let assignments = self
            .assignments
            .iter()
            .map(|assignment| {
                let field = serializer.field(model, &assignment.field)?;
                if field.is_computed() {
                    return Err(Error::invalid_statement(format!(
                        "`{}.{}` is computed and cannot be updated",
                        model.name, field.name
                    )));
                }
                Ok(Assignment {
                    field,
                    value: &assignment.value,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        fmt!(f, "UPDATE " TableName(model) " SET " Comma(assignments));

        if let Some(filter) = &self.filter {
            fmt!(f, " WHERE " filter);
        }

        Ok(())
    }
}

impl ToSql for Assignment<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let db_type = f.serializer.db_type(self.field.ty);
        fmt!(f, ColumnName(self.field) " = " Typed(self.value, Some(db_type)));
        Ok(())
    }
}
