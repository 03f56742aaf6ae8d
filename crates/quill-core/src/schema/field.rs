use super::ForeignKey;
use crate::stmt::{Type, Value};

use std::{any::Any, fmt, sync::Arc};

pub(crate) type Accessor = Arc<dyn Fn(&dyn Any) -> Option<Value> + Send + Sync>;

/// Description of one mapped column.
#[derive(Clone)]
pub struct FieldDef {
    /// Logical field name
    pub name: String,

    /// Column name override
    pub alias: Option<String>,

    /// Logical column type
    pub ty: Type,

    pub nullable: bool,

    pub primary_key: bool,

    pub auto_increment: bool,

    /// A single-column index is created for this field
    pub indexed: bool,

    pub unique: bool,

    /// String length, or decimal precision
    pub length: Option<u32>,

    /// Decimal scale
    pub scale: Option<u32>,

    pub default_value: Option<DefaultValue>,

    pub foreign_key: Option<ForeignKey>,

    /// SQL expression of a computed column. Computed columns are never
    /// created, inserted or updated.
    pub computed: Option<String>,

    /// Column type text overriding the type mapper
    pub column_type: Option<String>,

    accessor: Accessor,
}

/// Column default, either a literal value or raw SQL such as
/// `CURRENT_TIMESTAMP`.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    Value(Value),
    Sql(String),
}

impl FieldDef {
    pub(crate) fn new(name: String, ty: Type, nullable: bool, accessor: Accessor) -> FieldDef {
        FieldDef {
            name,
            alias: None,
            ty,
            nullable,
            primary_key: false,
            auto_increment: false,
            indexed: false,
            unique: false,
            length: None,
            scale: None,
            default_value: None,
            foreign_key: None,
            computed: None,
            column_type: None,
            accessor,
        }
    }

    /// Column name: the alias if one is set, otherwise the field name.
    pub fn effective_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    pub fn is_computed(&self) -> bool {
        self.computed.is_some()
    }

    /// Reads this field's value from a model instance.
    ///
    /// Returns `None` when `instance` is not of the model type the field was
    /// declared on.
    pub fn get(&self, instance: &dyn Any) -> Option<Value> {
        (self.accessor)(instance)
    }
}

impl fmt::Debug for FieldDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDef")
            .field("name", &self.name)
            .field("alias", &self.alias)
            .field("ty", &self.ty)
            .field("nullable", &self.nullable)
            .field("primary_key", &self.primary_key)
            .field("auto_increment", &self.auto_increment)
            .field("indexed", &self.indexed)
            .field("unique", &self.unique)
            .field("length", &self.length)
            .field("scale", &self.scale)
            .field("default_value", &self.default_value)
            .field("foreign_key", &self.foreign_key)
            .field("computed", &self.computed)
            .field("column_type", &self.column_type)
            .finish_non_exhaustive()
    }
}
