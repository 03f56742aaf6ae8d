//! Typed query-expression builder.
//!
//! Column paths carry the model and value type they belong to, so predicates
//! and projections are checked by the compiler before they become the untyped
//! [`quill_core::stmt::Expr`] tree the serializer walks.
//!
//! ```
//! # use quill_core::schema::{Model, ModelBuilder};
//! # use quill_sql::query::{Path, Query};
//! struct Person {
//!     id: i64,
//!     name: String,
//!     age: i32,
//! }
//!
//! impl Person {
//!     const AGE: Path<Person, i32> = Path::new("Age");
//!     const NAME: Path<Person, String> = Path::new("Name");
//! }
//!
//! impl Model for Person {
//!     fn describe(model: &mut ModelBuilder<Self>) {
//!         model.field("Id", |p| &p.id).primary_key().auto_increment();
//!         model.field("Name", |p| &p.name);
//!         model.field("Age", |p| &p.age);
//!     }
//! }
//!
//! let stmt = Query::<Person>::filter(Person::AGE.gt(10))
//!     .and(Person::NAME.starts_with("J"))
//!     .to_select();
//! ```

mod expr;
pub use expr::Expr;

mod into_expr;
pub use into_expr::IntoExpr;

mod path;
pub use path::Path;

mod projection;
pub use projection::Projection;

mod select;
pub use select::Query;
