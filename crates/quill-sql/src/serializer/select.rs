use super::{projection::Projection, Comma, Flavor, Formatter, Params, TableName, ToSql};

use crate::stmt;

use quill_core::{Error, Result};

/// Row limiting clause, which each flavor spells differently.
struct Limit {
    limit: Option<u64>,
    offset: Option<u64>,
    ordered: bool,
}

impl ToSql for &stmt::Select {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let model = &*self.model;
        let prefix_table = std::mem::replace(&mut f.prefix_table, self.prefix_table);

        fmt!(f, "SELECT ");

        if self.distinct {
            fmt!(f, "DISTINCT ");
        }

        f.allow_aggregates = true;
        fmt!(f, Projection { model, exprs: &self.projection } " FROM " TableName(model));
        f.allow_aggregates = false;

        if let Some(filter) = &self.filter {
            fmt!(f, " WHERE " filter);
        }

        if !self.group_by.is_empty() {
            fmt!(f, " GROUP BY " Comma(&self.group_by));
        }

        f.allow_aggregates = true;

        if let Some(having) = &self.having {
            fmt!(f, " HAVING " having);
        }

        if !self.order_by.is_empty() {
            fmt!(f, " ORDER BY " Comma(&self.order_by));
        }

        f.allow_aggregates = false;

        fmt!(f, Limit {
            limit: self.limit,
            offset: self.offset,
            ordered: !self.order_by.is_empty(),
        });

        f.prefix_table = prefix_table;
        Ok(())
    }
}

impl ToSql for &stmt::OrderBy {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let expr = &self.expr;
        fmt!(f, expr);
        if self.descending {
            fmt!(f, " DESC");
        }
        Ok(())
    }
}

impl ToSql for &stmt::Count {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let model = &*self.model;
        let prefix_table = std::mem::replace(&mut f.prefix_table, self.prefix_table);

        fmt!(f, "SELECT COUNT(");

        match &self.column {
            None => fmt!(f, "*"),
            Some(column) => {
                if column.as_column().is_none() {
                    return Err(Error::unsupported_expression(column.node_name()));
                }
                if self.distinct {
                    fmt!(f, "DISTINCT ");
                }
                fmt!(f, column);
            }
        }

        fmt!(f, ") FROM " TableName(model));

        if let Some(filter) = &self.filter {
            fmt!(f, " WHERE " filter);
        }

        f.prefix_table = prefix_table;
        Ok(())
    }
}

impl ToSql for Limit {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let flavor = f.serializer.flavor;

        match (flavor, self.limit, self.offset) {
            (_, None, None) => {}
            (Flavor::SqlServer, limit, offset) => {
                // OFFSET ... FETCH requires an ORDER BY
                if !self.ordered {
                    fmt!(f, " ORDER BY (SELECT NULL)");
                }
                fmt!(f, " OFFSET " offset.unwrap_or(0) " ROWS");
                if let Some(limit) = limit {
                    fmt!(f, " FETCH NEXT " limit " ROWS ONLY");
                }
            }
            (Flavor::Mysql, Some(limit), None) => fmt!(f, " LIMIT " limit),
            (Flavor::Mysql, limit, Some(offset)) => {
                let limit = limit.unwrap_or(u64::MAX);
                fmt!(f, " LIMIT " offset ", " limit);
            }
            (Flavor::Sqlite, None, Some(offset)) => fmt!(f, " LIMIT -1 OFFSET " offset),
            (Flavor::Postgresql, None, Some(offset)) => fmt!(f, " OFFSET " offset),
            (Flavor::Sqlite | Flavor::Postgresql, Some(limit), offset) => {
                fmt!(f, " LIMIT " limit);
                if let Some(offset) = offset {
                    fmt!(f, " OFFSET " offset);
                }
            }
        }
        Ok(())
    }
}
