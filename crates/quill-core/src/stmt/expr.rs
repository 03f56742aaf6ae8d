use super::*;

/// Untyped query expression.
///
/// The tree is built by the caller through the typed builder API and walked
/// by the dialect's predicate and projection compilers. It never contains
/// host-language closures; every column reference names its model and field
/// explicitly.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Aggregate function call, e.g. `MAX(col)`
    Aggregate(ExprAggregate),

    /// AND a set of boolean expressions
    And(ExprAnd),

    /// Binary operator applied to two expressions
    BinaryOp(ExprBinaryOp),

    /// Change the static type of an expression
    Cast(ExprCast),

    /// References a field of a mapped model
    Column(ExprColumn),

    /// Scalar function call
    Func(ExprFunc),

    /// Membership test against a list of values
    InList(ExprInList),

    /// Whether an expression is (or is not) null
    IsNull(ExprIsNull),

    /// Constructor projection, e.g. `new { X = a.Col1, Y = a.Col2 }`
    New(ExprNew),

    /// Boolean negation
    Not(ExprNot),

    /// OR a set of boolean expressions
    Or(ExprOr),

    /// String pattern match (starts with, ends with, contains)
    Pattern(ExprPattern),

    /// Constant value
    Value(Value),
}

impl Expr {
    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }

    pub fn null() -> Self {
        Self::Value(Value::Null)
    }

    pub fn is_value_null(&self) -> bool {
        matches!(self, Self::Value(Value::Null))
    }

    pub fn is_column(&self) -> bool {
        matches!(self, Self::Column(_))
    }

    pub fn is_aggregate(&self) -> bool {
        matches!(self, Self::Aggregate(_))
    }

    /// Returns the column this expression refers to, looking through casts.
    pub fn as_column(&self) -> Option<&ExprColumn> {
        match self {
            Self::Column(column) => Some(column),
            Self::Cast(cast) => cast.expr.as_column(),
            _ => None,
        }
    }

    /// Short description of the node kind, used in error messages.
    pub fn node_name(&self) -> &'static str {
        match self {
            Self::Aggregate(_) => "aggregate function",
            Self::And(_) => "AND expression",
            Self::BinaryOp(_) => "binary operator",
            Self::Cast(_) => "cast",
            Self::Column(_) => "column reference",
            Self::Func(_) => "function call",
            Self::InList(_) => "IN list",
            Self::IsNull(_) => "IS NULL test",
            Self::New(_) => "constructor projection",
            Self::Not(_) => "NOT expression",
            Self::Or(_) => "OR expression",
            Self::Pattern(_) => "pattern match",
            Self::Value(_) => "constant value",
        }
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Self::Value(value.into())
    }
}
