use super::{CompositeIndex, FieldDef, Model, ModelBuilder};

use std::any::TypeId;

/// Immutable description of a mapped table.
#[derive(Debug)]
pub struct ModelDef {
    /// Logical name, the Rust type name unless overridden
    pub name: String,

    /// Table name override
    pub alias: Option<String>,

    /// Database schema the table lives in
    pub schema: Option<String>,

    /// Columns, in declaration order
    pub fields: Vec<FieldDef>,

    pub indices: Vec<CompositeIndex>,

    /// Fields declared but not mapped to a column
    pub ignored: Vec<String>,

    type_id: TypeId,
}

impl ModelDef {
    pub(crate) fn build<M: Model>() -> ModelDef {
        let mut builder = ModelBuilder::<M>::new();
        M::describe(&mut builder);
        builder.build()
    }

    pub(crate) fn from_parts(
        type_id: TypeId,
        name: String,
        alias: Option<String>,
        schema: Option<String>,
        fields: Vec<FieldDef>,
        indices: Vec<CompositeIndex>,
        ignored: Vec<String>,
    ) -> ModelDef {
        ModelDef {
            name,
            alias,
            schema,
            fields,
            indices,
            ignored,
            type_id,
        }
    }

    /// Table name: the alias if one is set, otherwise the logical name.
    pub fn effective_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn is<M: Model>(&self) -> bool {
        self.type_id == TypeId::of::<M>()
    }

    /// Looks up a field by its logical name.
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// The primary key field. With a multi-column key, the first declared
    /// key field is returned.
    pub fn primary_key(&self) -> Option<&FieldDef> {
        self.fields.iter().find(|field| field.primary_key)
    }

    pub fn primary_key_fields(&self) -> impl Iterator<Item = &FieldDef> + '_ {
        self.fields.iter().filter(|field| field.primary_key)
    }

    /// The primary key when it is a single auto-increment column.
    pub fn auto_increment_primary_key(&self) -> Option<&FieldDef> {
        let mut pk = self.primary_key_fields();
        match (pk.next(), pk.next()) {
            (Some(field), None) if field.auto_increment => Some(field),
            _ => None,
        }
    }

    /// Fields backed by a physical column, i.e. everything but computed
    /// fields.
    pub fn columns(&self) -> impl Iterator<Item = &FieldDef> + '_ {
        self.fields.iter().filter(|field| !field.is_computed())
    }
}
