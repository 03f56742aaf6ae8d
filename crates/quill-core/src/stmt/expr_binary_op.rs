use super::{BinaryOp, Expr};

/// `lhs op rhs`, a comparison or an arithmetic operation.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprBinaryOp {
    pub lhs: Box<Expr>,
    pub op: BinaryOp,
    pub rhs: Box<Expr>,
}

impl ExprBinaryOp {
    /// For `x = NULL` / `x <> NULL` (either side), the operand to test and
    /// whether the test is negated. `None` for every other operation.
    pub fn null_test(&self) -> Option<(&Expr, bool)> {
        if !(self.op.is_eq() || self.op.is_ne()) {
            return None;
        }

        let operand = if self.rhs.is_value_null() {
            &self.lhs
        } else if self.lhs.is_value_null() {
            &self.rhs
        } else {
            return None;
        };

        Some((operand, self.op.is_ne()))
    }
}

macro_rules! comparisons {
    ( $( $name:ident => $op:ident, )* ) => {
        impl Expr {
            $(
                pub fn $name(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
                    Expr::binary_op(lhs, BinaryOp::$op, rhs)
                }
            )*
        }
    };
}

comparisons! {
    eq => Eq,
    ne => Ne,
    ge => Ge,
    gt => Gt,
    le => Le,
    lt => Lt,
}

impl Expr {
    pub fn binary_op(lhs: impl Into<Self>, op: BinaryOp, rhs: impl Into<Self>) -> Self {
        Expr::BinaryOp(ExprBinaryOp {
            lhs: Box::new(lhs.into()),
            op,
            rhs: Box::new(rhs.into()),
        })
    }

    pub fn is_eq(&self) -> bool {
        matches!(self, Expr::BinaryOp(binary) if binary.op.is_eq())
    }
}

impl From<ExprBinaryOp> for Expr {
    fn from(value: ExprBinaryOp) -> Self {
        Self::BinaryOp(value)
    }
}
