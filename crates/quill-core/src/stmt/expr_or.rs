use super::{expr_and::flatten, Expr};

use std::ops;

/// Disjunction of two or more operands.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprOr {
    pub operands: Vec<Expr>,
}

impl Expr {
    /// `lhs OR rhs`, flattening nested disjunctions.
    pub fn or(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        let operands = flatten(lhs.into(), rhs.into(), |expr| match expr {
            Expr::Or(or) => Ok(or.operands),
            expr => Err(expr),
        });

        ExprOr { operands }.into()
    }
}

impl ops::Deref for ExprOr {
    type Target = [Expr];

    fn deref(&self) -> &Self::Target {
        &self.operands
    }
}

impl From<ExprOr> for Expr {
    fn from(value: ExprOr) -> Self {
        Self::Or(value)
    }
}
