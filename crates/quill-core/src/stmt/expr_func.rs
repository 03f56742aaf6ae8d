use super::Expr;

/// Scalar SQL function
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Func {
    Upper,
    Lower,
    Length,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprFunc {
    pub func: Func,
    pub arg: Box<Expr>,
}

impl Expr {
    pub fn func(func: Func, arg: impl Into<Self>) -> Self {
        ExprFunc {
            func,
            arg: Box::new(arg.into()),
        }
        .into()
    }
}

impl From<ExprFunc> for Expr {
    fn from(value: ExprFunc) -> Self {
        Self::Func(value)
    }
}
