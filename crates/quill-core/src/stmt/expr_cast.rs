use super::{Expr, Type};

/// Changes the static type of an expression.
///
/// Casting never changes the emitted SQL; it only tells the caller which
/// type the expression now has.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprCast {
    pub expr: Box<Expr>,
    pub ty: Option<Type>,
}

impl Expr {
    pub fn cast(expr: impl Into<Self>, ty: Option<Type>) -> Self {
        ExprCast {
            expr: Box::new(expr.into()),
            ty,
        }
        .into()
    }
}

impl From<ExprCast> for Expr {
    fn from(value: ExprCast) -> Self {
        Self::Cast(value)
    }
}
