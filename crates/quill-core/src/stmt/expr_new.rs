use super::Expr;

/// Constructor projection.
///
/// Each field pairs the target property name with the expression that
/// populates it. The property name becomes the column alias.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExprNew {
    pub fields: Vec<NewField>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewField {
    pub name: String,
    pub expr: Expr,
}

impl ExprNew {
    pub fn push(&mut self, name: impl Into<String>, expr: impl Into<Expr>) {
        self.fields.push(NewField {
            name: name.into(),
            expr: expr.into(),
        });
    }
}

impl Expr {
    pub fn new_projection<N, E>(fields: impl IntoIterator<Item = (N, E)>) -> Self
    where
        N: Into<String>,
        E: Into<Expr>,
    {
        let mut expr = ExprNew::default();
        for (name, value) in fields {
            expr.push(name, value);
        }
        expr.into()
    }
}

impl From<ExprNew> for Expr {
    fn from(value: ExprNew) -> Self {
        Self::New(value)
    }
}
