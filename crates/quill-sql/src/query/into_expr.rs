use super::Expr;

use quill_core::{schema::FieldType, stmt::Value};

/// Converts a value, path or expression into a typed expression of `T`.
pub trait IntoExpr<T> {
    fn into_expr(self) -> Expr<T>;

    fn by_ref(&self) -> Expr<T>;
}

impl<T: FieldType> IntoExpr<T> for T {
    fn into_expr(self) -> Expr<T> {
        Expr::from_value(self.to_value())
    }

    fn by_ref(&self) -> Expr<T> {
        Expr::from_value(self.to_value())
    }
}

impl IntoExpr<String> for &str {
    fn into_expr(self) -> Expr<String> {
        Expr::from_value(Value::from(self))
    }

    fn by_ref(&self) -> Expr<String> {
        Expr::from_value(Value::from(*self))
    }
}

impl<T> IntoExpr<T> for Expr<T> {
    fn into_expr(self) -> Self {
        self
    }

    fn by_ref(&self) -> Self {
        self.clone()
    }
}
