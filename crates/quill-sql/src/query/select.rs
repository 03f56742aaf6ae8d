use super::{Expr, IntoExpr, Path, Projection};

use crate::stmt::{self, Assignment, OrderBy, Statement};

use quill_core::{schema::Model, stmt::Expr as UntypedExpr};
use std::{fmt, marker::PhantomData};

/// Builds select, count, update and delete statements against model `M`.
///
/// Filters compose left to right: `filter(a).and(b).or(c)` is
/// `(a AND b) OR c`. The builder is the only precedence authority.
pub struct Query<M> {
    filter: Option<UntypedExpr>,
    projection: Vec<UntypedExpr>,
    distinct: bool,
    group_by: Vec<UntypedExpr>,
    having: Option<UntypedExpr>,
    order_by: Vec<OrderBy>,
    limit: Option<u64>,
    offset: Option<u64>,
    prefix_table: bool,
    assignments: Vec<Assignment>,
    _p: PhantomData<fn() -> M>,
}

impl<M: Model> Query<M> {
    /// Every row, every column.
    pub fn all() -> Self {
        Self {
            filter: None,
            projection: vec![],
            distinct: false,
            group_by: vec![],
            having: None,
            order_by: vec![],
            limit: None,
            offset: None,
            prefix_table: false,
            assignments: vec![],
            _p: PhantomData,
        }
    }

    pub fn filter(expr: Expr<bool>) -> Self {
        Self::all().and(expr)
    }

    pub fn and(mut self, expr: Expr<bool>) -> Self {
        self.filter = Some(match self.filter.take() {
            Some(filter) => UntypedExpr::and(filter, expr.untyped),
            None => expr.untyped,
        });
        self
    }

    pub fn or(mut self, expr: Expr<bool>) -> Self {
        self.filter = Some(match self.filter.take() {
            Some(filter) => UntypedExpr::or(filter, expr.untyped),
            None => expr.untyped,
        });
        self
    }

    /// Adds an expression to the select list.
    pub fn select<T>(mut self, expr: impl IntoExpr<T>) -> Self {
        self.projection.push(expr.into_expr().untyped);
        self
    }

    pub fn select_new(mut self, projection: Projection) -> Self {
        self.projection.push(projection.into());
        self
    }

    pub fn select_min<T>(self, path: Path<M, T>) -> Self {
        self.select(path.min())
    }

    pub fn select_max<T>(self, path: Path<M, T>) -> Self {
        self.select(path.max())
    }

    pub fn select_sum<T>(self, path: Path<M, T>) -> Self {
        self.select(path.sum())
    }

    pub fn select_avg<T>(self, path: Path<M, T>) -> Self {
        self.select(path.avg())
    }

    /// `COUNT(*)`
    pub fn select_count(self) -> Self {
        self.select(Expr::count_star())
    }

    pub fn select_count_distinct<T>(self, path: Path<M, T>) -> Self {
        self.select(path.count_distinct())
    }

    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    pub fn group_by<T>(mut self, expr: impl IntoExpr<T>) -> Self {
        self.group_by.push(expr.into_expr().untyped);
        self
    }

    /// Adds a `HAVING` condition, AND-ed with any previous one.
    pub fn having(mut self, expr: Expr<bool>) -> Self {
        self.having = Some(match self.having.take() {
            Some(having) => UntypedExpr::and(having, expr.untyped),
            None => expr.untyped,
        });
        self
    }

    pub fn order_by(mut self, order: impl Into<OrderBy>) -> Self {
        self.order_by.push(order.into());
        self
    }

    pub fn order_by_desc<T>(mut self, expr: impl IntoExpr<T>) -> Self {
        self.order_by.push(OrderBy {
            expr: expr.into_expr().untyped,
            descending: true,
        });
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Qualifies every column reference with its table name.
    pub fn prefix_with_table_name(mut self) -> Self {
        self.prefix_table = true;
        self
    }

    /// Adds a `SET` assignment for [`to_update`](Self::to_update).
    pub fn set<T>(mut self, path: Path<M, T>, value: impl IntoExpr<T>) -> Self {
        self.assignments.push(Assignment {
            field: path.name().to_string(),
            value: value.into_expr().untyped,
        });
        self
    }

    pub fn to_select(&self) -> Statement {
        stmt::Select {
            model: M::definition(),
            projection: self.projection.clone(),
            distinct: self.distinct,
            filter: self.filter.clone(),
            group_by: self.group_by.clone(),
            having: self.having.clone(),
            order_by: self.order_by.clone(),
            limit: self.limit,
            offset: self.offset,
            prefix_table: self.prefix_table,
        }
        .into()
    }

    /// Counts matching rows. A single selected column is counted instead of
    /// `*`, honoring `distinct`.
    pub fn to_count(&self) -> Statement {
        let column = match &self.projection[..] {
            [expr] if expr.as_column().is_some() => Some(expr.clone()),
            _ => None,
        };

        stmt::Count {
            model: M::definition(),
            distinct: self.distinct && column.is_some(),
            column,
            filter: self.filter.clone(),
            prefix_table: self.prefix_table,
        }
        .into()
    }

    pub fn to_update(&self) -> Statement {
        Statement::update(
            M::definition(),
            self.assignments.clone(),
            self.filter.clone(),
        )
    }

    pub fn to_delete(&self) -> Statement {
        Statement::delete(M::definition(), self.filter.clone())
    }
}

impl<M> Clone for Query<M> {
    fn clone(&self) -> Self {
        Self {
            filter: self.filter.clone(),
            projection: self.projection.clone(),
            distinct: self.distinct,
            group_by: self.group_by.clone(),
            having: self.having.clone(),
            order_by: self.order_by.clone(),
            limit: self.limit,
            offset: self.offset,
            prefix_table: self.prefix_table,
            assignments: self.assignments.clone(),
            _p: PhantomData,
        }
    }
}

impl<M> fmt::Debug for Query<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("filter", &self.filter)
            .field("projection", &self.projection)
            .field("distinct", &self.distinct)
            .field("group_by", &self.group_by)
            .field("having", &self.having)
            .field("order_by", &self.order_by)
            .field("limit", &self.limit)
            .field("offset", &self.offset)
            .field("assignments", &self.assignments)
            .finish()
    }
}
