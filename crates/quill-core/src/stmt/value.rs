use super::Type;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use uuid::Uuid;

/// A literal value bound to a statement parameter.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 8-bit integer
    I8(i8),

    /// Signed 16-bit integer
    I16(i16),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// Unsigned 8-bit integer
    U8(u8),

    /// Unsigned 16-bit integer
    U16(u16),

    /// Unsigned 32-bit integer
    U32(u32),

    /// Unsigned 64-bit integer
    U64(u64),

    /// Single precision float
    F32(f32),

    /// Double precision float
    F64(f64),

    /// String value
    String(String),

    /// Binary value
    Bytes(Vec<u8>),

    /// UUID value
    Uuid(Uuid),

    /// Calendar date
    Date(NaiveDate),

    /// Wall-clock time
    Time(NaiveTime),

    /// Date and time without offset
    DateTime(NaiveDateTime),

    /// Date and time with offset
    DateTimeOffset(DateTime<FixedOffset>),

    /// Length of time
    Duration(TimeDelta),

    /// Null value
    #[default]
    Null,
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::I8(v) => Some(v.into()),
            Self::I16(v) => Some(v.into()),
            Self::I32(v) => Some(v.into()),
            Self::I64(v) => Some(v),
            Self::U8(v) => Some(v.into()),
            Self::U16(v) => Some(v.into()),
            Self::U32(v) => Some(v.into()),
            Self::U64(v) => i64::try_from(v).ok(),
            _ => None,
        }
    }

    /// The logical type of the value, `None` for `Null`.
    pub fn ty(&self) -> Option<Type> {
        Some(match self {
            Self::Bool(_) => Type::Bool,
            Self::I8(_) => Type::I8,
            Self::I16(_) => Type::I16,
            Self::I32(_) => Type::I32,
            Self::I64(_) => Type::I64,
            Self::U8(_) => Type::U8,
            Self::U16(_) => Type::U16,
            Self::U32(_) => Type::U32,
            Self::U64(_) => Type::U64,
            Self::F32(_) => Type::F32,
            Self::F64(_) => Type::F64,
            Self::String(_) => Type::String,
            Self::Bytes(_) => Type::Bytes,
            Self::Uuid(_) => Type::Uuid,
            Self::Date(_) => Type::Date,
            Self::Time(_) => Type::Time,
            Self::DateTime(_) => Type::DateTime,
            Self::DateTimeOffset(_) => Type::DateTimeOffset,
            Self::Duration(_) => Type::Duration,
            Self::Null => return None,
        })
    }
}

impl_primitive! {
    bool => Bool, Bool;
    i8 => I8, I8;
    i16 => I16, I16;
    i32 => I32, I32;
    i64 => I64, I64;
    u8 => U8, U8;
    u16 => U16, U16;
    u32 => U32, U32;
    u64 => U64, U64;
    f32 => F32, F32;
    f64 => F64, F64;
    String => String, String, true;
    Vec<u8> => Bytes, Bytes, true;
    Uuid => Uuid, Uuid;
    NaiveDate => Date, Date;
    NaiveTime => Time, Time;
    NaiveDateTime => DateTime, DateTime;
    DateTime<FixedOffset> => DateTimeOffset, DateTimeOffset;
    TimeDelta => Duration, Duration;
}

impl From<&str> for Value {
    fn from(src: &str) -> Value {
        Value::String(src.to_string())
    }
}

impl From<&[u8]> for Value {
    fn from(src: &[u8]) -> Value {
        Value::Bytes(src.to_vec())
    }
}

impl<T> From<Option<T>> for Value
where
    Value: From<T>,
{
    fn from(src: Option<T>) -> Value {
        match src {
            Some(value) => Value::from(value),
            None => Value::Null,
        }
    }
}
