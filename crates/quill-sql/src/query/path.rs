use super::{Expr, IntoExpr};

use crate::stmt::OrderBy;

use quill_core::{
    schema::{FieldType, Model},
    stmt,
};
use std::{fmt, marker::PhantomData};

/// A typed reference to field `name` of model `M`, holding values of `T`.
pub struct Path<M, T> {
    name: &'static str,
    _p: PhantomData<fn() -> (M, T)>,
}

impl<M, T> Path<M, T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _p: PhantomData,
        }
    }

    /// Logical field name.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<M: Model, T> Path<M, T> {
    fn column(self) -> Expr<T> {
        Expr::from_untyped(stmt::Expr::column(M::model_ref(), self.name))
    }

    pub fn eq(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        self.column().eq(rhs)
    }

    pub fn ne(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        self.column().ne(rhs)
    }

    pub fn gt(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        self.column().gt(rhs)
    }

    pub fn ge(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        self.column().ge(rhs)
    }

    pub fn lt(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        self.column().lt(rhs)
    }

    pub fn le(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        self.column().le(rhs)
    }

    pub fn is_null(self) -> Expr<bool> {
        self.column().is_null()
    }

    pub fn is_not_null(self) -> Expr<bool> {
        self.column().is_not_null()
    }

    pub fn in_list(self, values: impl IntoIterator<Item = T>) -> Expr<bool>
    where
        T: FieldType,
    {
        let values = values.into_iter().map(|value| value.to_value());
        Expr::from_untyped(stmt::Expr::in_list(self.column().untyped, values))
    }

    pub fn not_in_list(self, values: impl IntoIterator<Item = T>) -> Expr<bool>
    where
        T: FieldType,
    {
        let values = values.into_iter().map(|value| value.to_value());
        Expr::from_untyped(stmt::Expr::not_in_list(self.column().untyped, values))
    }

    pub fn cast<U>(self) -> Expr<U> {
        self.column().cast()
    }

    pub fn min(self) -> Expr<T> {
        self.column().min()
    }

    pub fn max(self) -> Expr<T> {
        self.column().max()
    }

    pub fn sum(self) -> Expr<T> {
        self.column().sum()
    }

    pub fn avg(self) -> Expr<T> {
        self.column().avg()
    }

    pub fn count(self) -> Expr<i64> {
        self.column().count()
    }

    pub fn count_distinct(self) -> Expr<i64> {
        self.column().count_distinct()
    }

    pub fn asc(self) -> OrderBy {
        OrderBy {
            expr: self.column().untyped,
            descending: false,
        }
    }

    pub fn desc(self) -> OrderBy {
        OrderBy {
            expr: self.column().untyped,
            descending: true,
        }
    }
}

impl<M: Model> Path<M, String> {
    pub fn starts_with(self, pattern: impl Into<String>) -> Expr<bool> {
        self.column().starts_with(pattern)
    }

    pub fn ends_with(self, pattern: impl Into<String>) -> Expr<bool> {
        self.column().ends_with(pattern)
    }

    pub fn contains(self, pattern: impl Into<String>) -> Expr<bool> {
        self.column().contains(pattern)
    }

    pub fn upper(self) -> Expr<String> {
        self.column().upper()
    }

    pub fn lower(self) -> Expr<String> {
        self.column().lower()
    }

    pub fn length(self) -> Expr<i32> {
        self.column().length()
    }
}

impl<M, T> Clone for Path<M, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M, T> Copy for Path<M, T> {}

impl<M: Model, T> IntoExpr<T> for Path<M, T> {
    fn into_expr(self) -> Expr<T> {
        self.column()
    }

    fn by_ref(&self) -> Expr<T> {
        self.column()
    }
}

impl<M, T> fmt::Debug for Path<M, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path({})", self.name)
    }
}

impl<M: Model, T> From<Path<M, T>> for OrderBy {
    fn from(value: Path<M, T>) -> Self {
        value.asc()
    }
}
