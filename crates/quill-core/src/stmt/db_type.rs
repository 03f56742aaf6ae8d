use super::Type;

/// How a parameter is bound by the driver.
///
/// Drivers use this to choose the wire type of a bound parameter. It is
/// derived from the column's logical type when the parameter targets a known
/// column and from the value otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DbType {
    Boolean,
    SByte,
    Int16,
    Int32,
    Int64,
    Byte,
    UInt16,
    UInt32,
    UInt64,
    Single,
    Double,
    Decimal,
    Currency,
    String,
    StringFixedLength,
    Xml,
    Binary,
    Object,
    Guid,
    Date,
    Time,
    DateTime,
    DateTimeOffset,
    Duration,
}

impl From<Type> for DbType {
    fn from(ty: Type) -> DbType {
        match ty {
            Type::Bool => DbType::Boolean,
            Type::I8 => DbType::SByte,
            Type::I16 => DbType::Int16,
            Type::I32 => DbType::Int32,
            Type::I64 => DbType::Int64,
            Type::U8 => DbType::Byte,
            Type::U16 => DbType::UInt16,
            Type::U32 => DbType::UInt32,
            Type::U64 => DbType::UInt64,
            Type::F32 => DbType::Single,
            Type::F64 => DbType::Double,
            Type::Decimal => DbType::Decimal,
            Type::Currency => DbType::Currency,
            Type::String => DbType::String,
            Type::Char => DbType::StringFixedLength,
            Type::Xml => DbType::Xml,
            Type::Bytes => DbType::Binary,
            Type::Object => DbType::Object,
            Type::Uuid => DbType::Guid,
            Type::Date => DbType::Date,
            Type::Time => DbType::Time,
            Type::DateTime => DbType::DateTime,
            Type::DateTimeOffset => DbType::DateTimeOffset,
            Type::Duration => DbType::Duration,
        }
    }
}
