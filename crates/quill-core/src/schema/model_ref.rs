use super::{short_type_name, Model, ModelDef, Registry};

use std::{
    any::TypeId,
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

/// Identifies a mapped type without resolving its description.
///
/// Foreign keys and column references store a `ModelRef` so that a model may
/// reference itself (or a model that has not been resolved yet) from inside
/// its own `describe` function.
#[derive(Clone, Copy)]
pub struct ModelRef {
    type_id: TypeId,
    type_name: &'static str,
    resolve: fn() -> Arc<ModelDef>,
}

impl ModelRef {
    pub fn of<M: Model>() -> ModelRef {
        ModelRef {
            type_id: TypeId::of::<M>(),
            type_name: short_type_name::<M>(),
            resolve: resolve_global::<M>,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Unqualified Rust type name.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Resolve the referenced model through the global registry.
    pub fn resolve(&self) -> Arc<ModelDef> {
        (self.resolve)()
    }

    pub fn is<M: Model>(&self) -> bool {
        self.type_id == TypeId::of::<M>()
    }
}

fn resolve_global<M: Model>() -> Arc<ModelDef> {
    Registry::global().resolve::<M>()
}

impl PartialEq for ModelRef {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for ModelRef {}

impl Hash for ModelRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for ModelRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModelRef({})", self.type_name)
    }
}
