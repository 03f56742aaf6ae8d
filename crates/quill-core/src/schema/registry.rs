use super::{Model, ModelDef};

use dashmap::DashMap;
use std::{
    any::TypeId,
    sync::{Arc, OnceLock},
};

/// Process-wide cache of table descriptions, keyed by Rust type.
///
/// Entries are built on first use and never evicted. The description is
/// built before the map is touched; if two callers race on the same type,
/// the first insert wins and both observe the same `Arc`.
#[derive(Debug, Default)]
pub struct Registry {
    models: DashMap<TypeId, Arc<ModelDef>>,
}

static GLOBAL: OnceLock<Registry> = OnceLock::new();

impl Registry {
    pub fn new() -> Registry {
        Registry::default()
    }

    pub fn global() -> &'static Registry {
        GLOBAL.get_or_init(Registry::new)
    }

    pub fn resolve<M: Model>(&self) -> Arc<ModelDef> {
        let type_id = TypeId::of::<M>();

        if let Some(def) = self.models.get(&type_id) {
            return def.value().clone();
        }

        let built = Arc::new(ModelDef::build::<M>());
        tracing::trace!(
            model = %built.name,
            table = %built.effective_name(),
            fields = built.fields.len(),
            "built table description"
        );

        let def = self.models.entry(type_id).or_insert(built);
        def.value().clone()
    }

    /// Whether `M` has been resolved already.
    pub fn contains<M: Model>(&self) -> bool {
        self.models.contains_key(&TypeId::of::<M>())
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
