use super::Expr;

use std::ops;

/// Conjunction of two or more operands.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprAnd {
    pub operands: Vec<Expr>,
}

impl Expr {
    /// `lhs AND rhs`. Operands that are themselves conjunctions are spliced
    /// in, so `and(and(a, b), c)` has three operands.
    pub fn and(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        let operands = flatten(lhs.into(), rhs.into(), |expr| match expr {
            Expr::And(and) => Ok(and.operands),
            expr => Err(expr),
        });

        ExprAnd { operands }.into()
    }
}

/// Concatenates the operand lists of `lhs` and `rhs`. `split` yields the
/// operands of an expression of the same connective, or hands it back.
pub(super) fn flatten(
    lhs: Expr,
    rhs: Expr,
    split: impl Fn(Expr) -> Result<Vec<Expr>, Expr>,
) -> Vec<Expr> {
    let mut operands = split(lhs).unwrap_or_else(|expr| vec![expr]);

    match split(rhs) {
        Ok(rest) => operands.extend(rest),
        Err(expr) => operands.push(expr),
    }

    operands
}

impl ops::Deref for ExprAnd {
    type Target = [Expr];

    fn deref(&self) -> &Self::Target {
        &self.operands
    }
}

impl From<ExprAnd> for Expr {
    fn from(value: ExprAnd) -> Self {
        Self::And(value)
    }
}
