use super::Expr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    StartsWith,
    EndsWith,
    Contains,
}

/// Tests if a string expression matches a literal pattern.
///
/// ```text
/// starts_with(name, "J")  // upper(name) LIKE 'J%'
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExprPattern {
    pub kind: PatternKind,

    /// The string expression to test.
    pub expr: Box<Expr>,

    /// The literal text to look for.
    pub pattern: String,
}

impl Expr {
    pub fn pattern(kind: PatternKind, expr: impl Into<Self>, pattern: impl Into<String>) -> Self {
        ExprPattern {
            kind,
            expr: Box::new(expr.into()),
            pattern: pattern.into(),
        }
        .into()
    }

    pub fn starts_with(expr: impl Into<Self>, pattern: impl Into<String>) -> Self {
        Expr::pattern(PatternKind::StartsWith, expr, pattern)
    }

    pub fn ends_with(expr: impl Into<Self>, pattern: impl Into<String>) -> Self {
        Expr::pattern(PatternKind::EndsWith, expr, pattern)
    }

    pub fn contains(expr: impl Into<Self>, pattern: impl Into<String>) -> Self {
        Expr::pattern(PatternKind::Contains, expr, pattern)
    }
}

impl From<ExprPattern> for Expr {
    fn from(value: ExprPattern) -> Self {
        Self::Pattern(value)
    }
}
