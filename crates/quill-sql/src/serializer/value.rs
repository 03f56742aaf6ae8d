use super::{Flavor, Formatter, Params, Serializer, ToSql};

use quill_core::{
    schema::DefaultValue,
    stmt::{DbType, Value},
    Result,
};
use std::fmt::Write;

/// A value bound as a parameter.
pub(super) struct Bind<'a>(pub(super) &'a Value, pub(super) Option<DbType>);

impl ToSql for Bind<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let placeholder = f.params.push(self.0, self.1);
        fmt!(f, placeholder);
        Ok(())
    }
}

impl ToSql for &Value {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        Bind(self, None).to_sql(f)
    }
}

impl Serializer {
    /// Renders a column default as SQL text.
    pub fn default_value_sql(&self, default: &DefaultValue) -> Result<String> {
        match default {
            DefaultValue::Sql(sql) => Ok(sql.clone()),
            DefaultValue::Value(value) => self.literal(value),
        }
    }

    /// Renders `value` as an inline SQL literal.
    pub fn literal(&self, value: &Value) -> Result<String> {
        let mut dst = String::new();

        match value {
            Value::Null => dst.push_str("NULL"),
            Value::Bool(v) => match self.flavor {
                Flavor::Postgresql => dst.push_str(if *v { "TRUE" } else { "FALSE" }),
                _ => dst.push_str(if *v { "1" } else { "0" }),
            },
            Value::I8(v) => write!(dst, "{v}")?,
            Value::I16(v) => write!(dst, "{v}")?,
            Value::I32(v) => write!(dst, "{v}")?,
            Value::I64(v) => write!(dst, "{v}")?,
            Value::U8(v) => write!(dst, "{v}")?,
            Value::U16(v) => write!(dst, "{v}")?,
            Value::U32(v) => write!(dst, "{v}")?,
            Value::U64(v) => write!(dst, "{v}")?,
            Value::F32(v) => write!(dst, "{v}")?,
            Value::F64(v) => write!(dst, "{v}")?,
            Value::String(v) => quote_string(&mut dst, v),
            Value::Uuid(v) => quote_string(&mut dst, &v.to_string()),
            Value::Date(v) => quote_string(&mut dst, &v.format("%Y-%m-%d").to_string()),
            Value::Time(v) => quote_string(&mut dst, &v.format("%H:%M:%S%.f").to_string()),
            Value::DateTime(v) => {
                quote_string(&mut dst, &v.format("%Y-%m-%d %H:%M:%S%.f").to_string())
            }
            Value::DateTimeOffset(v) => {
                quote_string(&mut dst, &v.format("%Y-%m-%d %H:%M:%S%.f%:z").to_string())
            }
            Value::Duration(v) => match self.flavor {
                Flavor::Postgresql => {
                    write!(dst, "INTERVAL '{} milliseconds'", v.num_milliseconds())?
                }
                _ => write!(dst, "{}", v.num_milliseconds())?,
            },
            Value::Bytes(v) => {
                match self.flavor {
                    Flavor::Sqlite | Flavor::Mysql => dst.push_str("X'"),
                    Flavor::Postgresql => dst.push_str("'\\x"),
                    Flavor::SqlServer => dst.push_str("0x"),
                }
                for byte in v {
                    write!(dst, "{byte:02X}")?;
                }
                if self.flavor != Flavor::SqlServer {
                    dst.push('\'');
                }
            }
        }

        Ok(dst)
    }
}

fn quote_string(dst: &mut String, s: &str) {
    dst.push('\'');
    for c in s.chars() {
        if c == '\'' {
            dst.push('\'');
        }
        dst.push(c);
    }
    dst.push('\'');
}
