use crate::stmt::{Type, Value};

/// A Rust type that can be stored in a single column.
///
/// Implemented for the primitive types, strings, byte vectors, UUIDs and the
/// `chrono` date/time types. `Option<T>` is the explicit nullable wrapper: the
/// column takes `T`'s logical type and is always nullable.
pub trait FieldType: Send + Sync + 'static {
    /// Logical column type.
    const TYPE: Type;

    /// Heap-allocated types (`String`, `Vec<u8>`) are nullable unless the
    /// field is marked required.
    const REFERENCE: bool = false;

    /// True only for `Option<T>`.
    const OPTIONAL: bool = false;

    fn to_value(&self) -> Value;
}

impl<T: FieldType> FieldType for Option<T> {
    const TYPE: Type = T::TYPE;
    const REFERENCE: bool = T::REFERENCE;
    const OPTIONAL: bool = true;

    fn to_value(&self) -> Value {
        match self {
            Some(value) => value.to_value(),
            None => Value::Null,
        }
    }
}
