use super::{DbType, Value};

/// A parameter value together with its binding kind.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedValue {
    pub value: Value,

    /// `None` for an untyped null.
    pub db_type: Option<DbType>,
}

impl TypedValue {
    pub fn new(value: Value, db_type: Option<DbType>) -> TypedValue {
        TypedValue { value, db_type }
    }
}

impl From<Value> for TypedValue {
    fn from(value: Value) -> Self {
        let db_type = value.ty().map(DbType::from);
        TypedValue { value, db_type }
    }
}
