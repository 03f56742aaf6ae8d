use super::IntoExpr;

use quill_core::stmt;

/// Constructor projection: each field becomes one column of the select
/// list, aliased as the field name.
///
/// ```
/// # use quill_sql::query::{Path, Projection};
/// # use quill_core::schema::{Model, ModelBuilder};
/// # struct Person { name: String }
/// # impl Model for Person {
/// #     fn describe(model: &mut ModelBuilder<Self>) {
/// #         model.field("Name", |p| &p.name);
/// #     }
/// # }
/// const NAME: Path<Person, String> = Path::new("Name");
///
/// let projection = Projection::new().field("Label", NAME);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Projection {
    untyped: stmt::ExprNew,
}

impl Projection {
    pub fn new() -> Projection {
        Projection::default()
    }

    pub fn field<T>(mut self, name: impl Into<String>, expr: impl IntoExpr<T>) -> Projection {
        self.untyped.push(name, expr.into_expr().untyped);
        self
    }
}

impl From<Projection> for stmt::Expr {
    fn from(value: Projection) -> Self {
        stmt::Expr::New(value.untyped)
    }
}
