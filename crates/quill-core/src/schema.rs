mod builder;
pub use builder::{FieldBuilder, ModelBuilder};

mod field;
pub use field::{DefaultValue, FieldDef};

mod field_type;
pub use field_type::FieldType;

mod fk;
pub use fk::{ForeignKey, ReferentialAction};

mod index;
pub use index::{CompositeIndex, IndexField};

mod model;
pub use model::ModelDef;

mod model_ref;
pub use model_ref::ModelRef;

mod registry;
pub use registry::Registry;

use std::{any::Any, sync::Arc};

/// A Rust type mapped to a database table.
///
/// Implementations describe their table once through [`ModelBuilder`]. The
/// description is evaluated on first use and cached for the lifetime of the
/// process by the global [`Registry`].
///
/// ```ignore
/// struct Person {
///     id: i64,
///     name: String,
///     age: i32,
/// }
///
/// impl Model for Person {
///     fn describe(model: &mut ModelBuilder<Self>) {
///         model.field("Id", |p| &p.id).primary_key().auto_increment();
///         model.field("Name", |p| &p.name);
///         model.field("Age", |p| &p.age);
///     }
/// }
/// ```
pub trait Model: Any + Send + Sync + Sized {
    /// Declares the table, its columns and its indexes.
    fn describe(model: &mut ModelBuilder<Self>);

    /// Returns the cached table description for this type.
    fn definition() -> Arc<ModelDef> {
        Registry::global().resolve::<Self>()
    }

    /// Returns a cheap, copyable handle to this model.
    fn model_ref() -> ModelRef {
        ModelRef::of::<Self>()
    }
}

/// Resolve the table description of `M` through the global registry.
pub fn resolve<M: Model>() -> Arc<ModelDef> {
    Registry::global().resolve::<M>()
}

/// The unqualified name of a Rust type, without module path or generics.
pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = match full.find('<') {
        Some(generics) => &full[..generics],
        None => full,
    };
    base.rsplit("::").next().unwrap_or(base)
}
