use super::{ColumnRef, Comma, Formatter, Ident, Params, ToSql};

use quill_core::{
    schema::{FieldDef, ModelDef},
    stmt::{Expr, ExprColumn, NewField},
    Error, Result,
};

/// The select list of a `SELECT`.
///
/// Only column references, casts of column references, constructor
/// projections and aggregates of columns are accepted. An empty list selects
/// every mapped field.
pub(super) struct Projection<'a> {
    pub(super) model: &'a ModelDef,
    pub(super) exprs: &'a [Expr],
}

struct Selected<'a>(&'a Expr);

struct Aliased<'a>(&'a NewField);

/// A projected column reference, resolved against its model.
struct ProjectedColumn<'a>(&'a ExprColumn, Option<&'a str>);

/// One column of the select list with an optional alias.
struct SelectColumn<'a> {
    model: &'a ModelDef,
    field: &'a FieldDef,
    alias: Option<&'a str>,
}

impl ToSql for Projection<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let model = self.model;

        if self.exprs.is_empty() {
            let columns = model.fields.iter().map(|field| SelectColumn {
                model,
                field,
                alias: None,
            });
            fmt!(f, Comma(columns));
            return Ok(());
        }

        let aggregates = self.exprs.iter().filter(|expr| expr.is_aggregate()).count();

        if aggregates != 0 && aggregates != self.exprs.len() {
            return Err(Error::invalid_statement(
                "a projection cannot mix aggregate and non-aggregate expressions",
            ));
        }

        fmt!(f, Comma(self.exprs.iter().map(Selected)));
        Ok(())
    }
}

impl ToSql for Selected<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        match self.0 {
            Expr::Column(_) | Expr::Cast(_) => {
                let column = column_of(self.0)?;
                fmt!(f, ProjectedColumn(column, None));
            }
            Expr::New(new) => {
                if new.fields.is_empty() {
                    return Err(Error::invalid_statement(
                        "a constructor projection needs at least one field",
                    ));
                }
                fmt!(f, Comma(new.fields.iter().map(Aliased)));
            }
            Expr::Aggregate(aggregate) => {
                if let Some(arg) = &aggregate.arg {
                    column_of(arg)?;
                }
                fmt!(f, self.0);
            }
            expr => return Err(Error::unsupported_expression(expr.node_name())),
        }
        Ok(())
    }
}

impl ToSql for Aliased<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let column = column_of(&self.0.expr)?;
        fmt!(f, ProjectedColumn(column, Some(self.0.name.as_str())));
        Ok(())
    }
}

impl ToSql for ProjectedColumn<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let model = self.0.model.resolve();
        let field = f.serializer.field(&model, &self.0.field)?;

        fmt!(f, SelectColumn {
            model: &model,
            field,
            alias: self.1,
        });
        Ok(())
    }
}

impl ToSql for SelectColumn<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let name = f.serializer.column_name(self.field);

        match &self.field.computed {
            // A computed column always needs a name
            Some(sql) => {
                let alias = self.alias.unwrap_or(&name);
                fmt!(f, sql " AS " Ident(alias));
            }
            None => {
                fmt!(f, ColumnRef(self.model, self.field));

                if let Some(alias) = self.alias {
                    fmt!(f, " AS " Ident(alias));
                }
            }
        }
        Ok(())
    }
}

/// The column a projected expression refers to, looking through casts.
fn column_of(expr: &Expr) -> Result<&ExprColumn> {
    expr.as_column().ok_or_else(|| {
        let found = match expr {
            Expr::Cast(cast) => cast.expr.node_name(),
            expr => expr.node_name(),
        };
        Error::unsupported_expression(found)
    })
}
