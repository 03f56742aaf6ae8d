use super::Expr;
use crate::schema::ModelRef;

/// References a field of a mapped model by its logical name.
///
/// The name is resolved against the model definition at compile time, so a
/// field alias or naming strategy only affects the emitted SQL.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprColumn {
    /// Model owning the field.
    pub model: ModelRef,

    /// Logical field name.
    pub field: String,
}

impl Expr {
    pub fn column(model: ModelRef, field: impl Into<String>) -> Self {
        ExprColumn {
            model,
            field: field.into(),
        }
        .into()
    }
}

impl From<ExprColumn> for Expr {
    fn from(value: ExprColumn) -> Self {
        Self::Column(value)
    }
}
