use super::{Formatter, ToSql};

use quill_core::{
    stmt::{DbType, TypedValue, Value},
    Result,
};

/// Collects the values bound to a statement's placeholders.
pub trait Params {
    fn push(&mut self, value: &Value, db_type: Option<DbType>) -> Placeholder;
}

/// Zero-based position of a bound parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder(pub usize);

impl Params for Vec<TypedValue> {
    fn push(&mut self, value: &Value, db_type: Option<DbType>) -> Placeholder {
        let db_type = db_type.or_else(|| value.ty().map(DbType::from));
        self.push(TypedValue::new(value.clone(), db_type));
        Placeholder(self.len() - 1)
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let name = f.serializer.param_name(self.0);
        f.dst.push_str(&name);
        Ok(())
    }
}
