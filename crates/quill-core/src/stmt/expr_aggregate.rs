use super::Expr;

use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum AggregateFunc {
    Min,
    Max,
    Sum,
    Avg,
    Count,
}

/// Aggregate function call.
///
/// `arg` is `None` only for `COUNT(*)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprAggregate {
    pub func: AggregateFunc,
    pub arg: Option<Box<Expr>>,
    pub distinct: bool,
}

impl Expr {
    pub fn aggregate(func: AggregateFunc, arg: impl Into<Self>) -> Self {
        ExprAggregate {
            func,
            arg: Some(Box::new(arg.into())),
            distinct: false,
        }
        .into()
    }

    pub fn count_star() -> Self {
        ExprAggregate {
            func: AggregateFunc::Count,
            arg: None,
            distinct: false,
        }
        .into()
    }

    pub fn count_distinct(arg: impl Into<Self>) -> Self {
        ExprAggregate {
            func: AggregateFunc::Count,
            arg: Some(Box::new(arg.into())),
            distinct: true,
        }
        .into()
    }
}

impl From<ExprAggregate> for Expr {
    fn from(value: ExprAggregate) -> Self {
        Self::Aggregate(value)
    }
}

impl fmt::Display for AggregateFunc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AggregateFunc::Min => "MIN",
            AggregateFunc::Max => "MAX",
            AggregateFunc::Sum => "SUM",
            AggregateFunc::Avg => "AVG",
            AggregateFunc::Count => "COUNT",
        })
    }
}

impl fmt::Debug for AggregateFunc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
