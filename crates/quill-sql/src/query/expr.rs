use super::IntoExpr;

use quill_core::stmt::{self, AggregateFunc, BinaryOp, Func, Value};
use std::{fmt, marker::PhantomData, ops::Not};

pub struct Expr<T> {
    /// The un-typed expression
    pub(crate) untyped: stmt::Expr,

    /// `T` is the type of the expression
    _p: PhantomData<fn() -> T>,
}

impl<T> Expr<T> {
    /// Create an expression from the given value.
    pub(crate) fn from_value(value: Value) -> Self {
        Self::from_untyped(stmt::Expr::Value(value))
    }

    pub fn from_untyped(untyped: impl Into<stmt::Expr>) -> Self {
        Self {
            untyped: untyped.into(),
            _p: PhantomData,
        }
    }

    pub fn into_untyped(self) -> stmt::Expr {
        self.untyped
    }

    /// Changes the static type. The emitted SQL is unchanged.
    pub fn cast<U>(self) -> Expr<U> {
        Expr::from_untyped(stmt::Expr::cast(self.untyped, None))
    }

    pub fn eq(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        self.compare(BinaryOp::Eq, rhs)
    }

    pub fn ne(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        self.compare(BinaryOp::Ne, rhs)
    }

    pub fn gt(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        self.compare(BinaryOp::Gt, rhs)
    }

    pub fn ge(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        self.compare(BinaryOp::Ge, rhs)
    }

    pub fn lt(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        self.compare(BinaryOp::Lt, rhs)
    }

    pub fn le(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        self.compare(BinaryOp::Le, rhs)
    }

    pub fn is_null(self) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::is_null(self.untyped))
    }

    pub fn is_not_null(self) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::is_not_null(self.untyped))
    }

    pub fn min(self) -> Expr<T> {
        Expr::from_untyped(stmt::Expr::aggregate(AggregateFunc::Min, self.untyped))
    }

    pub fn max(self) -> Expr<T> {
        Expr::from_untyped(stmt::Expr::aggregate(AggregateFunc::Max, self.untyped))
    }

    pub fn sum(self) -> Expr<T> {
        Expr::from_untyped(stmt::Expr::aggregate(AggregateFunc::Sum, self.untyped))
    }

    pub fn avg(self) -> Expr<T> {
        Expr::from_untyped(stmt::Expr::aggregate(AggregateFunc::Avg, self.untyped))
    }

    pub fn count(self) -> Expr<i64> {
        Expr::from_untyped(stmt::Expr::aggregate(AggregateFunc::Count, self.untyped))
    }

    pub fn count_distinct(self) -> Expr<i64> {
        Expr::from_untyped(stmt::Expr::count_distinct(self.untyped))
    }

    fn compare(self, op: BinaryOp, rhs: impl IntoExpr<T>) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::binary_op(
            self.untyped,
            op,
            rhs.into_expr().untyped,
        ))
    }

    fn arithmetic(self, op: BinaryOp, rhs: impl IntoExpr<T>) -> Expr<T> {
        Expr::from_untyped(stmt::Expr::binary_op(
            self.untyped,
            op,
            rhs.into_expr().untyped,
        ))
    }
}

impl Expr<i64> {
    /// `COUNT(*)`
    pub fn count_star() -> Self {
        Self::from_untyped(stmt::Expr::count_star())
    }
}

impl Expr<bool> {
    pub fn and(self, rhs: impl IntoExpr<bool>) -> Self {
        Self::from_untyped(stmt::Expr::and(self.untyped, rhs.into_expr().untyped))
    }

    pub fn or(self, rhs: impl IntoExpr<bool>) -> Self {
        Self::from_untyped(stmt::Expr::or(self.untyped, rhs.into_expr().untyped))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        !self
    }
}

impl Expr<String> {
    pub fn starts_with(self, pattern: impl Into<String>) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::starts_with(self.untyped, pattern))
    }

    pub fn ends_with(self, pattern: impl Into<String>) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::ends_with(self.untyped, pattern))
    }

    pub fn contains(self, pattern: impl Into<String>) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::contains(self.untyped, pattern))
    }

    pub fn upper(self) -> Self {
        Self::from_untyped(stmt::Expr::func(Func::Upper, self.untyped))
    }

    pub fn lower(self) -> Self {
        Self::from_untyped(stmt::Expr::func(Func::Lower, self.untyped))
    }

    pub fn length(self) -> Expr<i32> {
        Expr::from_untyped(stmt::Expr::func(Func::Length, self.untyped))
    }
}

macro_rules! impl_arithmetic {
    ( $( $ty:ty ),* ) => {
        $(
            impl Expr<$ty> {
                #[allow(clippy::should_implement_trait)]
                pub fn add(self, rhs: impl IntoExpr<$ty>) -> Self {
                    self.arithmetic(BinaryOp::Add, rhs)
                }

                #[allow(clippy::should_implement_trait)]
                pub fn sub(self, rhs: impl IntoExpr<$ty>) -> Self {
                    self.arithmetic(BinaryOp::Sub, rhs)
                }

                #[allow(clippy::should_implement_trait)]
                pub fn mul(self, rhs: impl IntoExpr<$ty>) -> Self {
                    self.arithmetic(BinaryOp::Mul, rhs)
                }

                #[allow(clippy::should_implement_trait)]
                pub fn div(self, rhs: impl IntoExpr<$ty>) -> Self {
                    self.arithmetic(BinaryOp::Div, rhs)
                }
            }
        )*
    };
}

impl_arithmetic!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl Not for Expr<bool> {
    type Output = Self;

    fn not(self) -> Self {
        Self::from_untyped(stmt::Expr::not(self.untyped))
    }
}

impl<T> Clone for Expr<T> {
    fn clone(&self) -> Self {
        Self::from_untyped(self.untyped.clone())
    }
}

impl<T> fmt::Debug for Expr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.untyped, f)
    }
}

impl<T> From<Expr<T>> for stmt::Expr {
    fn from(value: Expr<T>) -> Self {
        value.untyped
    }
}
