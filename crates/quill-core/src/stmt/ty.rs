use std::fmt;

/// Logical column type.
///
/// This is the backend-agnostic type a field is declared with. Each dialect's
/// type mapper turns it, together with the field's length/scale settings,
/// into the column type text that appears in `CREATE TABLE`.
///
/// ```text
/// Type::String + length 50   →  VARCHAR(50)
/// Type::I64                  →  BIGINT
/// Type::Decimal (18, 2)      →  DECIMAL(18,2)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// Boolean value
    Bool,

    /// Signed 8-bit integer
    I8,

    /// Signed 16-bit integer
    I16,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// Unsigned 8-bit integer
    U8,

    /// Unsigned 16-bit integer
    U16,

    /// Unsigned 32-bit integer
    U32,

    /// Unsigned 64-bit integer
    U64,

    /// Single precision floating point
    F32,

    /// Double precision floating point
    F64,

    /// Fixed precision decimal number
    Decimal,

    /// Monetary amount, stored as a fixed precision decimal
    Currency,

    /// Variable length text
    String,

    /// Fixed length text
    Char,

    /// XML document
    Xml,

    /// Binary data
    Bytes,

    /// Opaque serialized object
    Object,

    /// 128-bit universally unique identifier
    Uuid,

    /// Civil calendar date
    Date,

    /// Civil wall-clock time
    Time,

    /// Civil date and time without an offset
    DateTime,

    /// Date and time with an offset from UTC
    DateTimeOffset,

    /// Length of time
    Duration,
}

impl Type {
    pub fn is_string_like(self) -> bool {
        matches!(self, Type::String | Type::Char | Type::Xml)
    }

    pub fn is_integer(self) -> bool {
        matches!(
            self,
            Type::I8
                | Type::I16
                | Type::I32
                | Type::I64
                | Type::U8
                | Type::U16
                | Type::U32
                | Type::U64
        )
    }

    pub fn is_unsigned(self) -> bool {
        matches!(self, Type::U8 | Type::U16 | Type::U32 | Type::U64)
    }

    pub fn is_numeric(self) -> bool {
        self.is_integer() || matches!(self, Type::F32 | Type::F64 | Type::Decimal | Type::Currency)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
