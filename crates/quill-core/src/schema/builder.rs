use super::{
    short_type_name, CompositeIndex, DefaultValue, FieldDef, FieldType, ForeignKey, Model,
    ModelDef, ReferentialAction,
};
use crate::stmt::{Type, Value};

use std::{any::TypeId, marker::PhantomData, sync::Arc};

/// Collects the table configuration of model `M`.
///
/// Passed to [`Model::describe`].
pub struct ModelBuilder<M> {
    name: String,
    alias: Option<String>,
    schema: Option<String>,
    fields: Vec<FieldBuilder>,
    indices: Vec<CompositeIndex>,
    _model: PhantomData<fn() -> M>,
}

/// Configuration of a single field.
pub struct FieldBuilder {
    def: FieldDef,
    required: bool,
    reference: bool,
    optional: bool,
    ignored: bool,
}

impl<M: Model> ModelBuilder<M> {
    pub(crate) fn new() -> ModelBuilder<M> {
        ModelBuilder {
            name: short_type_name::<M>().to_string(),
            alias: None,
            schema: None,
            fields: vec![],
            indices: vec![],
            _model: PhantomData,
        }
    }

    /// Overrides the logical model name.
    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    /// Sets the table name used in SQL.
    pub fn alias(&mut self, alias: impl Into<String>) -> &mut Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn schema(&mut self, schema: impl Into<String>) -> &mut Self {
        self.schema = Some(schema.into());
        self
    }

    /// Declares a field read through `get`.
    ///
    /// The logical type and default nullability come from `T`.
    pub fn field<T, F>(&mut self, name: impl Into<String>, get: F) -> &mut FieldBuilder
    where
        T: FieldType,
        F: Fn(&M) -> &T + Send + Sync + 'static,
    {
        let accessor = Arc::new(move |instance: &dyn std::any::Any| {
            instance.downcast_ref::<M>().map(|model| get(model).to_value())
        });

        self.fields.push(FieldBuilder {
            def: FieldDef::new(name.into(), T::TYPE, false, accessor),
            required: false,
            reference: T::REFERENCE,
            optional: T::OPTIONAL,
            ignored: false,
        });

        let len = self.fields.len();
        &mut self.fields[len - 1]
    }

    /// Adds an index over several fields. A field spec may end in ` DESC`.
    pub fn composite_index<'a>(
        &mut self,
        fields: impl IntoIterator<Item = &'a str>,
        unique: bool,
    ) -> &mut Self {
        self.indices.push(CompositeIndex::new(fields, unique));
        self
    }

    pub fn named_composite_index<'a>(
        &mut self,
        name: impl Into<String>,
        fields: impl IntoIterator<Item = &'a str>,
        unique: bool,
    ) -> &mut Self {
        let mut index = CompositeIndex::new(fields, unique);
        index.name = Some(name.into());
        self.indices.push(index);
        self
    }

    pub(crate) fn build(self) -> ModelDef {
        let mut fields = Vec::with_capacity(self.fields.len());
        let mut ignored = vec![];

        for builder in self.fields {
            if builder.ignored {
                ignored.push(builder.def.name);
                continue;
            }

            let mut def = builder.def;
            def.nullable = builder.optional || (builder.reference && !builder.required);
            fields.push(def);
        }

        ModelDef::from_parts(
            TypeId::of::<M>(),
            self.name,
            self.alias,
            self.schema,
            fields,
            self.indices,
            ignored,
        )
    }
}

impl FieldBuilder {
    /// Sets the column name used in SQL.
    pub fn alias(&mut self, alias: impl Into<String>) -> &mut Self {
        self.def.alias = Some(alias.into());
        self
    }

    /// Marks a string or binary field NOT NULL.
    pub fn required(&mut self) -> &mut Self {
        self.required = true;
        self
    }

    pub fn primary_key(&mut self) -> &mut Self {
        self.def.primary_key = true;
        self
    }

    pub fn auto_increment(&mut self) -> &mut Self {
        self.def.auto_increment = true;
        self
    }

    /// Creates a single-column index.
    pub fn index(&mut self) -> &mut Self {
        self.def.indexed = true;
        self
    }

    /// Adds a uniqueness constraint. Combined with [`index`](Self::index)
    /// this creates a unique index instead of an inline constraint.
    pub fn unique(&mut self) -> &mut Self {
        self.def.unique = true;
        self
    }

    pub fn length(&mut self, length: u32) -> &mut Self {
        self.def.length = Some(length);
        self
    }

    /// Decimal precision, stored in the length slot.
    pub fn precision(&mut self, precision: u32) -> &mut Self {
        self.def.length = Some(precision);
        self
    }

    pub fn scale(&mut self, scale: u32) -> &mut Self {
        self.def.scale = Some(scale);
        self
    }

    pub fn default_value(&mut self, value: impl Into<Value>) -> &mut Self {
        self.def.default_value = Some(DefaultValue::Value(value.into()));
        self
    }

    /// Raw SQL default, e.g. `CURRENT_TIMESTAMP`.
    pub fn default_sql(&mut self, sql: impl Into<String>) -> &mut Self {
        self.def.default_value = Some(DefaultValue::Sql(sql.into()));
        self
    }

    /// References the primary key of `T`.
    pub fn references<T: Model>(&mut self) -> &mut Self {
        self.def.foreign_key = Some(ForeignKey::new(T::model_ref()));
        self
    }

    pub fn on_delete(&mut self, action: ReferentialAction) -> &mut Self {
        if let Some(fk) = &mut self.def.foreign_key {
            fk.on_delete = Some(action);
        }
        self
    }

    pub fn on_update(&mut self, action: ReferentialAction) -> &mut Self {
        if let Some(fk) = &mut self.def.foreign_key {
            fk.on_update = Some(action);
        }
        self
    }

    pub fn foreign_key_name(&mut self, name: impl Into<String>) -> &mut Self {
        if let Some(fk) = &mut self.def.foreign_key {
            fk.name = Some(name.into());
        }
        self
    }

    /// Marks the field as computed by the database from `expr`.
    pub fn computed(&mut self, expr: impl Into<String>) -> &mut Self {
        self.def.computed = Some(expr.into());
        self
    }

    /// Column type text used instead of the type mapper's choice.
    pub fn column_type(&mut self, column_type: impl Into<String>) -> &mut Self {
        self.def.column_type = Some(column_type.into());
        self
    }

    /// Overrides the logical type inferred from the Rust type.
    pub fn ty(&mut self, ty: Type) -> &mut Self {
        self.def.ty = ty;
        self
    }

    /// Excludes the field from the table.
    pub fn ignore(&mut self) -> &mut Self {
        self.ignored = true;
        self
    }
}
