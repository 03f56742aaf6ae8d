use super::{value::Bind, ColumnRef, Comma, Delimited, Flavor, Formatter, Params, Serializer, ToSql};

use quill_core::{
    stmt::{self, DbType, Expr, Func, PatternKind, Value},
    Error, Result,
};

/// An expression whose constant value is bound with the given type hint.
pub(super) struct Typed<'a>(pub(super) &'a Expr, pub(super) Option<DbType>);

/// Operand of a binary operator, parenthesized when it is itself compound.
pub(super) struct Operand<'a>(pub(super) &'a Expr, pub(super) Option<DbType>);

/// Operand of `AND`/`OR`.
struct Logical<'a>(&'a Expr);

impl ToSql for &Expr {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        match self {
            Expr::Aggregate(expr) => expr.to_sql(f),
            Expr::And(expr) => {
                fmt!(f, Delimited(expr.operands.iter().map(Logical), " AND "));
                Ok(())
            }
            Expr::BinaryOp(expr) => expr.to_sql(f),
            Expr::Cast(expr) => expr.expr.to_sql(f),
            Expr::Column(expr) => expr.to_sql(f),
            Expr::Func(expr) => expr.to_sql(f),
            Expr::InList(expr) => expr.to_sql(f),
            Expr::IsNull(expr) => {
                let test = if expr.negate { " IS NOT NULL" } else { " IS NULL" };
                fmt!(f, Operand(&expr.expr, None) test);
                Ok(())
            }
            Expr::Not(expr) => {
                let inner: &Expr = &expr.expr;
                fmt!(f, "NOT (" inner ")");
                Ok(())
            }
            Expr::Or(expr) => {
                fmt!(f, Delimited(expr.operands.iter().map(Logical), " OR "));
                Ok(())
            }
            Expr::Pattern(expr) => expr.to_sql(f),
            Expr::Value(Value::Null) => {
                fmt!(f, "NULL");
                Ok(())
            }
            Expr::Value(value) => Bind(value, None).to_sql(f),
            Expr::New(_) => Err(Error::unsupported_expression(self.node_name())),
        }
    }
}

impl ToSql for &stmt::ExprAggregate {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        if !f.allow_aggregates {
            return Err(Error::invalid_statement(
                "aggregate functions are only valid in projections, HAVING and ORDER BY",
            ));
        }

        let func = self.func.to_string();
        fmt!(f, func.as_str() "(");

        match &self.arg {
            None => fmt!(f, "*"),
            Some(arg) => {
                if self.distinct {
                    fmt!(f, "DISTINCT ");
                }

                // Aggregates do not nest
                f.allow_aggregates = false;
                let arg: &Expr = arg;
                fmt!(f, arg);
                f.allow_aggregates = true;
            }
        }

        fmt!(f, ")");
        Ok(())
    }
}

impl ToSql for &stmt::ExprBinaryOp {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let lhs: &Expr = &self.lhs;
        let rhs: &Expr = &self.rhs;

        if let Some((operand, negated)) = self.null_test() {
            let test = if negated { " IS NOT NULL" } else { " IS NULL" };
            fmt!(f, Operand(operand, None) test);
            return Ok(());
        }

        let serializer = f.serializer;
        let hint = column_db_type(serializer, lhs).or_else(|| column_db_type(serializer, rhs));
        let op = self.op.to_string();

        fmt!(f, Operand(lhs, hint) " " op.as_str() " " Operand(rhs, hint));
        Ok(())
    }
}

impl ToSql for &stmt::ExprColumn {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let model = self.model.resolve();
        let field = f.serializer.field(&model, &self.field)?;

        match &field.computed {
            Some(sql) => fmt!(f, "(" sql ")"),
            None => fmt!(f, ColumnRef(&model, field)),
        }
        Ok(())
    }
}

impl ToSql for &stmt::ExprFunc {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let name = match (self.func, f.serializer.flavor) {
            (Func::Upper, _) => "upper",
            (Func::Lower, _) => "lower",
            (Func::Length, Flavor::SqlServer) => "len",
            (Func::Length, _) => "length",
        };
        let arg: &Expr = &self.arg;

        fmt!(f, name "(" arg ")");
        Ok(())
    }
}

impl ToSql for &stmt::ExprInList {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        if self.list.is_empty() {
            // Nothing is a member of the empty set
            let constant = if self.negate { "1 = 1" } else { "1 = 0" };
            fmt!(f, constant);
            return Ok(());
        }

        let hint = column_db_type(f.serializer, &self.expr);
        let keyword = if self.negate { " NOT IN (" } else { " IN (" };
        let values = Comma(self.list.iter().map(|value| Bind(value, hint)));

        fmt!(f, Operand(&self.expr, None) keyword values ")");
        Ok(())
    }
}

impl ToSql for &stmt::ExprPattern {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let sql_server = f.serializer.flavor == Flavor::SqlServer;
        let mut pattern = String::with_capacity(self.pattern.len() + 2);

        if matches!(self.kind, PatternKind::EndsWith | PatternKind::Contains) {
            pattern.push('%');
        }

        for c in self.pattern.to_uppercase().chars() {
            if matches!(c, '%' | '_' | '^') || (sql_server && c == '[') {
                pattern.push('^');
            }
            pattern.push(c);
        }

        if matches!(self.kind, PatternKind::StartsWith | PatternKind::Contains) {
            pattern.push('%');
        }

        let expr: &Expr = &self.expr;
        let pattern = Value::String(pattern);

        // An explicit escape also overrides the backslash default of
        // PostgreSQL and MySQL, so `\` stays literal
        fmt!(f, "upper(" expr ") LIKE " Bind(&pattern, Some(DbType::String)) " ESCAPE '^'");
        Ok(())
    }
}

impl ToSql for Typed<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        match self.0 {
            Expr::Value(value) if !value.is_null() => Bind(value, self.1).to_sql(f),
            expr => expr.to_sql(f),
        }
    }
}

impl ToSql for Operand<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let expr = self.0;

        if matches!(expr, Expr::BinaryOp(_) | Expr::And(_) | Expr::Or(_)) {
            fmt!(f, "(" expr ")");
            Ok(())
        } else {
            Typed(expr, self.1).to_sql(f)
        }
    }
}

impl ToSql for Logical<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let expr = self.0;

        if matches!(expr, Expr::And(_) | Expr::Or(_)) {
            fmt!(f, "(" expr ")");
        } else {
            fmt!(f, expr);
        }
        Ok(())
    }
}

/// Parameter type of the column `expr` refers to, if any.
fn column_db_type(serializer: &Serializer, expr: &Expr) -> Option<DbType> {
    let column = expr.as_column()?;
    let model = column.model.resolve();
    let field = model.field(&column.field)?;
    Some(serializer.db_type(field.ty))
}
